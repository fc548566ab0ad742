//! Solo: bodyguards, assassins, and soldiers for hire.

use serde::Serialize;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;
use crate::text::{choose_slash_words, lower_first, trim_period, upper_first};

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 6),
    TableSpec::new("Moral Compass", 6),
    TableSpec::new("Operational Territory", 6),
    TableSpec::new("Gunning", 6),
];

/// Solo background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solo {
    /// Kind of solo, with `/` alternatives decided word by word.
    pub character_type: String,
    /// Their code.
    pub moral_compass: String,
    /// Where they work.
    pub operational_territory: String,
    /// Who is after them.
    pub gunning: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let raw_type = res.role_text("Type", 6)?;
    let character_type = choose_slash_words(&raw_type, res.rng());
    let moral_compass = res.role_text("Moral Compass", 6)?;
    let operational_territory = res.role_text("Operational Territory", 6)?;
    let gunning = res.role_text("Gunning", 6)?;

    Ok(RoleProfile::Solo(Solo {
        character_type,
        moral_compass,
        operational_territory,
        gunning,
    }))
}

impl Solo {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        format!(
            "{}\nWorks in {}.\n{} is after {}.\n",
            p.third_person(&self.moral_compass, YouAs::Subject),
            lower_first(trim_period(&p.third_person(
                &self.operational_territory,
                YouAs::Object
            ))),
            upper_first(trim_period(&p.third_person(&self.gunning, YouAs::Object))),
            p.object,
        )
    }
}
