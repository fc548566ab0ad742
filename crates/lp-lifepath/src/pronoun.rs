//! Sex, pronouns, and the second-to-third person rewrite.
//!
//! Table text is written to the player ("You feel...", "your crew").
//! Before it lands in a biography it is rewritten by plain substring
//! replacement: `your`/`Your` become the possessive pronoun, then
//! `you`/`You` become whichever pronoun the call site asks for. The
//! rewrite is not grammar aware; "You were" becomes "He were".

use std::str::FromStr;

use lp_dice::coin_flip;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::GenError;
use crate::text::upper_first;

/// A character's sex, which selects names and pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Sex {
    /// Choose a sex uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        if coin_flip(rng) { Self::Female } else { Self::Male }
    }

    /// Lowercase name, as printed in headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Pronouns for this sex.
    pub fn pronouns(self) -> Pronouns {
        match self {
            Self::Male => Pronouns {
                subject: "he",
                object: "him",
                possessive: "his",
            },
            Self::Female => Pronouns {
                subject: "she",
                object: "her",
                possessive: "her",
            },
        }
    }
}

impl FromStr for Sex {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(GenError::InvalidSex(s.to_string())),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which pronoun a bare "you" turns into at a given call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YouAs {
    /// "you" as the actor: he/she.
    Subject,
    /// "you" as the target: him/her.
    Object,
    /// "you" read as "your": his/her.
    Possessive,
}

/// Lowercase third-person pronouns for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pronouns {
    /// he / she
    pub subject: &'static str,
    /// him / her
    pub object: &'static str,
    /// his / her
    pub possessive: &'static str,
}

impl Pronouns {
    /// Subject pronoun, capitalized for sentence starts.
    pub fn subject_cap(&self) -> String {
        upper_first(self.subject)
    }

    /// Possessive pronoun, capitalized for sentence starts.
    pub fn possessive_cap(&self) -> String {
        upper_first(self.possessive)
    }

    fn you_form(&self, you_as: YouAs) -> &'static str {
        match you_as {
            YouAs::Subject => self.subject,
            YouAs::Object => self.object,
            YouAs::Possessive => self.possessive,
        }
    }

    /// Rewrite second-person table text into third person.
    ///
    /// `your` is replaced before `you` so that it never turns into
    /// "sher" or "hisr". The output holds no `you`/`You` substring.
    pub fn third_person(&self, text: &str, you_as: YouAs) -> String {
        let you = self.you_form(you_as);
        text.replace("Your", &upper_first(self.possessive))
            .replace("your", self.possessive)
            .replace("You", &upper_first(you))
            .replace("you", you)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn parse_sex() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" F ".parse::<Sex>().unwrap(), Sex::Female);
        assert!(matches!(
            "robot".parse::<Sex>(),
            Err(GenError::InvalidSex(ref s)) if s == "robot"
        ));
    }

    #[test]
    fn random_sex_hits_both() {
        let mut rng = StdRng::seed_from_u64(12);
        let draws: Vec<Sex> = (0..50).map(|_| Sex::random(&mut rng)).collect();
        assert!(draws.contains(&Sex::Male));
        assert!(draws.contains(&Sex::Female));
    }

    #[test]
    fn rewrite_male() {
        let p = Sex::Male.pronouns();
        assert_eq!(
            p.third_person("You trust your crew, they trust you.", YouAs::Object),
            "Him trust his crew, they trust him."
        );
        assert_eq!(
            p.third_person("You trust your crew.", YouAs::Subject),
            "He trust his crew."
        );
    }

    #[test]
    fn rewrite_female_possessive_mode() {
        let p = Sex::Female.pronouns();
        assert_eq!(
            p.third_person("Your family betrayed you.", YouAs::Possessive),
            "Her family betrayed her."
        );
        assert_eq!(p.third_person("yourself", YouAs::Subject), "herself");
    }

    #[test]
    fn capitalized_forms() {
        let p = Sex::Male.pronouns();
        assert_eq!(p.subject_cap(), "He");
        assert_eq!(p.possessive_cap(), "His");
    }

    proptest! {
        #[test]
        fn rewrite_leaves_no_second_person(
            words in proptest::collection::vec("(you|You|your|Your|yourself|[a-z]{1,6})", 0..12),
            female in any::<bool>(),
            mode in 0u8..3,
        ) {
            let sex = if female { Sex::Female } else { Sex::Male };
            let you_as = match mode {
                0 => YouAs::Subject,
                1 => YouAs::Object,
                _ => YouAs::Possessive,
            };
            let text = words.join(" ");
            let out = sex.pronouns().third_person(&text, you_as);
            prop_assert!(!out.contains("you"), "{out}");
            prop_assert!(!out.contains("You"), "{out}");
            // A second pass changes nothing.
            prop_assert_eq!(sex.pronouns().third_person(&out, you_as), out.clone());
        }
    }
}
