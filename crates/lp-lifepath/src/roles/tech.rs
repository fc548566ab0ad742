//! Tech: mechanics, fixers of machines, and inventors.

use serde::Serialize;
use tracing::debug;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;
use crate::text::lower_first;

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 10),
    TableSpec::new("Partner", 6),
    TableSpec::new("Workspace", 6),
    TableSpec::new("Clients", 6),
    TableSpec::new("Supplies", 6),
    TableSpec::new("Gunning", 6),
];

/// Tech background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tech {
    /// Kind of tech.
    pub character_type: String,
    /// Works without a partner.
    pub alone: bool,
    /// Partner, only when not alone.
    pub partner: Option<String>,
    /// Where they work.
    pub workspace: String,
    /// Who they work for.
    pub clients: String,
    /// Where parts come from.
    pub supplies: String,
    /// Who is gunning for them.
    pub gunning: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 10)?;
    let alone = res.coin_flip();
    debug!(alone, "tech partner flip");
    let partner = if alone {
        None
    } else {
        Some(res.role_text("Partner", 6)?)
    };
    let workspace = res.role_text("Workspace", 6)?;
    let clients = res.role_text("Clients", 6)?;
    let supplies = res.role_text("Supplies", 6)?;
    let gunning = res.role_text("Gunning", 6)?;

    Ok(RoleProfile::Tech(Tech {
        character_type,
        alone,
        partner,
        workspace,
        clients,
        supplies,
        gunning,
    }))
}

impl Tech {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        let partner = match &self.partner {
            Some(partner) => format!(
                "Works with a partner, {}.",
                lower_first(&p.third_person(partner, YouAs::Object))
            ),
            None => "Works alone.".to_string(),
        };
        format!(
            "{partner}\nWorkspace: {}\nClients: {}\nSupplies: {}\nGunning for {}: {}\n",
            p.third_person(&self.workspace, YouAs::Object),
            p.third_person(&self.clients, YouAs::Object),
            p.third_person(&self.supplies, YouAs::Subject),
            p.object,
            p.third_person(&self.gunning, YouAs::Subject),
        )
    }
}
