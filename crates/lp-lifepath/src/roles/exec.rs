//! Exec: corporate climbers.
//!
//! The division table is rolled directly so the roll itself can be
//! inspected: a 5 lands on a row of three `/` options, one of which is
//! chosen with a `1d3`.

use lp_tables::TableError;
use serde::Serialize;
use tracing::debug;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::{Resolver, table_key};
use crate::text::{lower_first, trim_period};

/// Division roll that lands on the three-way row.
pub const SPLIT_DIVISION_ROLL: u32 = 5;

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 10),
    TableSpec::new("Division", 6),
    TableSpec::new("Good/Bad", 6),
    TableSpec::new("Based", 6),
    TableSpec::new("Gunning", 6),
    TableSpec::new("Boss", 6),
];

/// Exec background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exec {
    /// Kind of corporation.
    pub character_type: String,
    /// Division the exec works in.
    pub division: String,
    /// Whether the corporation is good or bad.
    pub good_or_bad: String,
    /// Where the corporation is based.
    pub based: String,
    /// Who is gunning for the exec.
    pub gunning: String,
    /// Relationship with the boss.
    pub boss: String,
}

/// Option `pick` (1-based) of a `/`-separated division row.
pub fn split_division(row: &str, pick: u32) -> Option<&str> {
    let index = usize::try_from(pick.checked_sub(1)?).ok()?;
    row.split('/').nth(index).map(str::trim)
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 10)?;

    let division_roll = res.roll(6)?;
    let row = res.row_at(&table_key(res.role(), "Division"), division_roll)?;
    let text = row.text()?;
    let division = if division_roll == SPLIT_DIVISION_ROLL {
        let pick = res.roll(3)?;
        debug!(pick, "exec split division");
        split_division(text, pick)
            .ok_or_else(|| TableError::MalformedRow {
                table: row.table.to_string(),
                roll: row.roll,
                reason: format!("expected three '/' options, option {pick} is missing"),
            })?
            .to_string()
    } else {
        text.to_string()
    };

    let good_or_bad = res.role_text("Good/Bad", 6)?;
    let based = res.role_text("Based", 6)?;
    let gunning = res.role_text("Gunning", 6)?;
    let boss = res.role_text("Boss", 6)?;

    Ok(RoleProfile::Exec(Exec {
        character_type,
        division,
        good_or_bad,
        based,
        gunning,
        boss,
    }))
}

impl Exec {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        let third = |text: &str, you_as| p.third_person(text, you_as);
        format!(
            "Works for a '{}' corporation that is '{}', based in {}, in the {} division.\n\
             Gunning for {}: {}\n\
             {}\n",
            third(&self.character_type, YouAs::Object),
            lower_first(trim_period(&third(&self.good_or_bad, YouAs::Object))),
            lower_first(&third(&self.based, YouAs::Object)),
            third(&self.division, YouAs::Object),
            p.object,
            third(&self.gunning, YouAs::Object),
            third(&self.boss, YouAs::Object),
        )
    }
}
