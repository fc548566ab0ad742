//! Media: journalists, screamsheet writers, and streamers.

use serde::Serialize;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 10),
    TableSpec::new("Source", 6),
    TableSpec::new("Ethics", 6),
];

/// Media background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    /// Medium they work in.
    pub character_type: String,
    /// Where their stories come from.
    pub source: String,
    /// How far they bend the truth.
    pub ethics: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 10)?;
    let source = res.role_text("Source", 6)?;
    let ethics = res.role_text("Ethics", 6)?;
    Ok(RoleProfile::Media(Media {
        character_type,
        source,
        ethics,
    }))
}

impl Media {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        format!(
            "Sources: {}\nEthics: {}\n",
            p.third_person(&self.source, YouAs::Subject),
            p.third_person(&self.ethics, YouAs::Subject)
        )
    }
}
