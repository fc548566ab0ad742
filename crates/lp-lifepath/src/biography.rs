//! Rendering a [`Character`] as a plain-text biography.
//!
//! Sections, in order: header, person, family, life goals, the role
//! paragraph under a `<Role>:` heading, then friends, enemies and love
//! affairs. Every piece of table text passes through
//! [`Pronouns::third_person`] before it is embedded.

use crate::character::Character;
use crate::pronoun::{Pronouns, YouAs};
use crate::relations::{Enemy, Friend, LoveInterest, render_list};
use crate::text::{lower_first, strip_article, trim_period, upper_first};

/// Render the full biography.
pub fn render_biography(character: &Character) -> String {
    let p = character.pronouns();
    let mut output = String::new();

    output.push_str(&render_header(character, &p));
    output.push_str(&render_person(character, &p));
    output.push_str(&render_family(character, &p));
    output.push_str(&format!(
        "Life goals: {}\n",
        p.third_person(&character.traits().life_goals, YouAs::Subject)
    ));

    output.push_str(&format!("{}:\n", character.role()));
    output.push_str(&character.profile().narrate(&p));

    output.push_str("Friends:\n");
    output.push_str(&render_list(character.friends(), &p, Friend::describe));
    output.push_str("Enemies:\n");
    output.push_str(&render_list(character.enemies(), &p, Enemy::describe));
    output.push_str("Love affairs:\n");
    output.push_str(&render_list(
        character.love_interests(),
        &p,
        LoveInterest::describe,
    ));

    output
}

fn render_header(character: &Character, p: &Pronouns) -> String {
    format!(
        "Name: {} ({})\nRole: {}. {}\n",
        character.name(),
        character.sex(),
        character.role(),
        p.third_person(character.profile().character_type(), YouAs::Object)
    )
}

fn render_person(character: &Character, p: &Pronouns) -> String {
    let t = character.traits();
    let origin = character.origin();
    let he = p.subject_cap();
    let his = p.possessive_cap();
    let third = |text: &str, you_as| p.third_person(text, you_as);

    let mut output = String::from("Person:\n");
    output.push_str(&format!(
        "{he} is from the {} region. Speaks {}.\n",
        origin.region, origin.language
    ));
    output.push_str(&format!(
        "{he} is {}.\n",
        lower_first(trim_period(&third(&t.personality, YouAs::Object)))
    ));
    output.push_str(&format!(
        "{he} is wearing {}.\n",
        lower_first(trim_period(&third(&t.clothing_style, YouAs::Object)))
    ));
    output.push_str(&format!(
        "{his} hairstyle is {}. {his} affectation is {}.\n",
        lower_first(trim_period(&third(&t.hairstyle, YouAs::Object))),
        lower_first(trim_period(&third(&t.affectation, YouAs::Object)))
    ));
    output.push_str(&format!(
        "{he} values {} the most. {he} feels about others: \"{}\"\n",
        lower_first(trim_period(&third(&t.motivation, YouAs::Object))),
        third(&t.relationships, YouAs::Subject)
    ));
    output.push_str(&format!(
        "{} is {} most valued person.\n",
        upper_first(trim_period(&third(&t.most_valued_person, YouAs::Possessive))),
        p.possessive
    ));
    output.push_str(&format!(
        "{his} most valued possession is {}.\n",
        lower_first(strip_article(trim_period(&third(
            &t.most_valued_possession,
            YouAs::Possessive
        ))))
    ));
    output
}

fn render_family(character: &Character, p: &Pronouns) -> String {
    let t = character.traits();
    let he = p.subject_cap();
    let background = &t.family_background;

    let mut output = String::from("Family:\n");
    output.push_str(&format!(
        "{he} comes from a {} background.\n",
        trim_period(&p.third_person(&background.family, YouAs::Object))
    ));
    output.push_str(&format!(
        "\"{}\"\n",
        p.third_person(&background.anecdote, YouAs::Subject)
    ));
    output.push_str(&format!(
        "Childhood: {}\n",
        p.third_person(&t.childhood_environment, YouAs::Subject)
    ));
    output.push_str(&format!(
        "But {}\n",
        lower_first(&p.third_person(&t.family_crisis, YouAs::Possessive))
    ));
    output
}
