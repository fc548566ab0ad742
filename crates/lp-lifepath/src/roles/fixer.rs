//! Fixer: brokers deals between the street and everyone else.

use serde::Serialize;
use tracing::debug;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 10),
    TableSpec::new("Partner", 6),
    TableSpec::new("Office", 6),
    TableSpec::new("Side Clients", 6),
    TableSpec::new("Gunner", 6),
];

/// Fixer background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixer {
    /// What kind of fixer.
    pub character_type: String,
    /// Business partner, present on a coin flip.
    pub partner: Option<String>,
    /// Where business gets done.
    pub office: String,
    /// Side clients.
    pub clients: String,
    /// Who is gunning for the fixer.
    pub gunning: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 10)?;
    let has_partner = res.coin_flip();
    debug!(has_partner, "fixer partner flip");
    let partner = if has_partner {
        Some(res.role_text("Partner", 6)?)
    } else {
        None
    };
    let office = res.role_text("Office", 6)?;
    let clients = res.role_text("Side Clients", 6)?;
    let gunning = res.role_text("Gunner", 6)?;

    Ok(RoleProfile::Fixer(Fixer {
        character_type,
        partner,
        office,
        clients,
        gunning,
    }))
}

impl Fixer {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        let mut out = String::new();
        if let Some(partner) = &self.partner {
            out.push_str(&format!("Partner: {}\n", p.third_person(partner, YouAs::Object)));
        }
        out.push_str(&format!(
            "Office: {}\n",
            p.third_person(&self.office, YouAs::Object)
        ));
        out.push_str(&format!(
            "Clients: {}\n",
            p.third_person(&self.clients, YouAs::Object)
        ));
        out.push_str(&format!(
            "Gunning for {}: {}\n",
            p.object,
            p.third_person(&self.gunning, YouAs::Object)
        ));
        out
    }
}
