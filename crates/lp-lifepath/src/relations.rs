//! Friends, enemies, and past loves.
//!
//! Each list has `max(0, 1d10 - 7)` entries, so seven characters in ten
//! have none. Entries are generated independently of each other.

use std::sync::LazyLock;

use lp_dice::DiceExpr;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::GenResult;
use crate::names::NameService;
use crate::pronoun::{Pronouns, Sex, YouAs};
use crate::resolver::{COMMON_DIE, Resolver};
use crate::text::lower_first;

/// Friend relationship table.
pub const FRIEND: &str = "Friend";
/// Who the enemy is.
pub const ENEMY_TYPE: &str = "Enemy type";
/// What caused the grudge.
pub const ENEMY_WRONG: &str = "Enemy wrong";
/// What the enemy can throw at the character; may hold a `{NdM}` placeholder.
pub const ENEMY_THROW: &str = "Enemy throw";
/// What happens when they meet.
pub const ENEMY_MEET: &str = "Enemy meet";
/// How a love affair went.
pub const LOVE_HAPPENED: &str = "Love happened";

/// Every table the relationship generators roll on.
pub const RELATION_TABLES: &[&str] = &[
    FRIEND,
    ENEMY_TYPE,
    ENEMY_WRONG,
    ENEMY_THROW,
    ENEMY_MEET,
    LOVE_HAPPENED,
];

static DICE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("DICE_PLACEHOLDER pattern is invalid"));

/// Number of entries for a relationship list given its `1d10` roll.
pub fn relation_count(roll: u32) -> usize {
    roll.saturating_sub(7) as usize
}

/// Roll a list length, then generate that many entries.
pub(crate) fn roll_list<T>(
    res: &mut Resolver<'_, '_>,
    names: &dyn NameService,
    label: &'static str,
    make: fn(&mut Resolver<'_, '_>, &dyn NameService) -> GenResult<T>,
) -> GenResult<Vec<T>> {
    let count = relation_count(res.roll(COMMON_DIE)?);
    debug!(list = label, count, "rolled relationship count");
    (0..count).map(|_| make(res, names)).collect()
}

/// Replace the first `{NdM}` placeholder with a rolled number.
pub(crate) fn roll_placeholder(text: &str, res: &mut Resolver<'_, '_>) -> GenResult<String> {
    let Some(caps) = DICE_PLACEHOLDER.captures(text) else {
        return Ok(text.to_string());
    };
    let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
        return Ok(text.to_string());
    };
    let expr = DiceExpr::parse(expr.as_str())?;
    let rolled = expr.roll(res.rng());
    debug!(%expr, %rolled, "rolled table placeholder");
    let value = rolled.total();
    Ok(format!(
        "{}{value}{}",
        &text[..whole.start()],
        &text[whole.end()..]
    ))
}

/// Render a relationship list: one `- ` line per entry, or `- none`.
pub fn render_list<T>(
    items: &[T],
    pronouns: &Pronouns,
    describe: fn(&T, &Pronouns) -> String,
) -> String {
    if items.is_empty() {
        return "- none\n".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {}\n", describe(item, pronouns)))
        .collect()
}

/// A friend. The table design gives friends a name but no recorded sex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Friend {
    /// Friend's name.
    pub name: String,
    /// How they relate to the character.
    pub relationship: String,
}

impl Friend {
    /// Roll one friend.
    pub fn generate(res: &mut Resolver<'_, '_>, names: &dyn NameService) -> GenResult<Self> {
        let relationship = res.lookup(FRIEND, COMMON_DIE)?.text()?.to_string();
        let sex = Sex::random(res.rng());
        let name = names.name(sex, res.rng());
        Ok(Self { name, relationship })
    }

    /// One-line description from the character's point of view.
    pub fn describe(&self, pronouns: &Pronouns) -> String {
        format!(
            "{}. {}",
            self.name,
            pronouns.third_person(&self.relationship, YouAs::Object)
        )
    }
}

/// An enemy and the grudge between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enemy {
    /// Enemy's name.
    pub name: String,
    /// Enemy's sex.
    pub sex: Sex,
    /// Who they are.
    pub enemy_type: String,
    /// What caused it.
    pub wrong: String,
    /// What they can bring to bear, with any dice already rolled.
    pub throw: String,
    /// What happens on meeting.
    pub meet: String,
}

impl Enemy {
    /// Roll one enemy.
    pub fn generate(res: &mut Resolver<'_, '_>, names: &dyn NameService) -> GenResult<Self> {
        let enemy_type = res.lookup(ENEMY_TYPE, COMMON_DIE)?.text()?.to_string();
        let sex = Sex::random(res.rng());
        let name = names.name(sex, res.rng());
        let wrong = res.lookup(ENEMY_WRONG, COMMON_DIE)?.text()?.to_string();
        let throw_row = res.lookup(ENEMY_THROW, COMMON_DIE)?.text()?.to_string();
        let throw = roll_placeholder(&throw_row, res)?;
        let meet = res.lookup(ENEMY_MEET, COMMON_DIE)?.text()?.to_string();
        Ok(Self {
            name,
            sex,
            enemy_type,
            wrong,
            throw,
            meet,
        })
    }

    /// One-line description from the character's point of view.
    pub fn describe(&self, pronouns: &Pronouns) -> String {
        format!(
            "{} ({}) ({}) {} Can throw {} If meet: {}",
            self.name,
            self.sex,
            pronouns.third_person(&self.enemy_type, YouAs::Object),
            pronouns.third_person(&self.wrong, YouAs::Subject),
            lower_first(&pronouns.third_person(&self.throw, YouAs::Object)),
            pronouns.third_person(&self.meet, YouAs::Object),
        )
    }
}

/// A past or present love.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoveInterest {
    /// Their name.
    pub name: String,
    /// Their sex.
    pub sex: Sex,
    /// How it went.
    pub happened: String,
}

impl LoveInterest {
    /// Roll one love affair.
    pub fn generate(res: &mut Resolver<'_, '_>, names: &dyn NameService) -> GenResult<Self> {
        let sex = Sex::random(res.rng());
        let name = names.name(sex, res.rng());
        let happened = res.lookup(LOVE_HAPPENED, COMMON_DIE)?.text()?.to_string();
        Ok(Self {
            name,
            sex,
            happened,
        })
    }

    /// One-line description from the character's point of view.
    pub fn describe(&self, pronouns: &Pronouns) -> String {
        format!(
            "{} ({}). {}",
            self.name,
            self.sex,
            pronouns.third_person(&self.happened, YouAs::Object)
        )
    }
}
