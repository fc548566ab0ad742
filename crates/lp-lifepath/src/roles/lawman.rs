//! Lawman: cops, from beat officers to corporate security.

use serde::Serialize;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;
use crate::text::{lower_first, trim_period};

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 6),
    TableSpec::new("Jurisdiction", 6),
    TableSpec::new("Corruption", 6),
    TableSpec::new("Gunning", 6),
    TableSpec::new("Target", 6),
];

/// Lawman background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lawman {
    /// Position on the force.
    pub character_type: String,
    /// Where the badge applies.
    pub jurisdiction: String,
    /// How bent the force is.
    pub corruption: String,
    /// Who is gunning for them.
    pub gunning: String,
    /// Usual target of their work.
    pub target: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    Ok(RoleProfile::Lawman(Lawman {
        character_type: res.role_text("Type", 6)?,
        jurisdiction: res.role_text("Jurisdiction", 6)?,
        corruption: res.role_text("Corruption", 6)?,
        gunning: res.role_text("Gunning", 6)?,
        target: res.role_text("Target", 6)?,
    }))
}

impl Lawman {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        format!(
            "Jurisdiction: {}\nCorruption: {}\nMain target: {}\nGunning for {}: {}\n",
            p.third_person(&self.jurisdiction, YouAs::Object),
            p.third_person(&self.corruption, YouAs::Subject),
            trim_period(&p.third_person(&self.target, YouAs::Object)),
            p.object,
            lower_first(&p.third_person(&self.gunning, YouAs::Object)),
        )
    }
}
