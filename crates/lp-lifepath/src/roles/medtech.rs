//! Medtech: street doctors and trauma teams.

use serde::Serialize;
use tracing::debug;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;
use crate::text::lower_first;

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 6),
    TableSpec::new("Partner", 6),
    TableSpec::new("Workspace", 6),
    TableSpec::new("Clients", 6),
    TableSpec::new("Supplies", 6),
];

/// Medtech background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Medtech {
    /// Kind of medtech.
    pub character_type: String,
    /// Works without a partner.
    pub alone: bool,
    /// Partner, only when not alone.
    pub partner: Option<String>,
    /// Where they treat patients.
    pub workspace: String,
    /// Who their patients are.
    pub clients: String,
    /// Where drugs and gear come from.
    pub supplies: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 6)?;
    let alone = res.coin_flip();
    debug!(alone, "medtech partner flip");
    let partner = if alone {
        None
    } else {
        Some(res.role_text("Partner", 6)?)
    };
    let workspace = res.role_text("Workspace", 6)?;
    let clients = res.role_text("Clients", 6)?;
    let supplies = res.role_text("Supplies", 6)?;

    Ok(RoleProfile::Medtech(Medtech {
        character_type,
        alone,
        partner,
        workspace,
        clients,
        supplies,
    }))
}

impl Medtech {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        let partner = match &self.partner {
            Some(partner) => format!(
                "Works with a partner, {}.",
                lower_first(&p.third_person(partner, YouAs::Object))
            ),
            None => "Works alone.".to_string(),
        };
        format!(
            "{partner}\nWorkspace: {}\nPatients: {}\nSupplies: {}\n",
            p.third_person(&self.workspace, YouAs::Object),
            p.third_person(&self.clients, YouAs::Object),
            p.third_person(&self.supplies, YouAs::Subject),
        )
    }
}
