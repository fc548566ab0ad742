//! Netrunner: hackers who ride the NET.

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
    TableSpec::new("Get Programs", 6),
    TableSpec::new("Gunning", 6),
];

/// Netrunner background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Netrunner {
    /// Kind of runner.
    pub character_type: String,
    /// Works without a partner.
    pub alone: bool,
    /// Partner, only when not alone.
    pub partner: Option<String>,
    /// Where they jack in.
    pub workspace: String,
    /// Who they work for.
    pub clients: String,
    /// Where their programs come from.
    pub get_programs: String,
    /// Who is gunning for them.
    pub gunning: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 6)?;
    let alone = res.coin_flip();
    debug!(alone, "netrunner partner flip");
    let partner = if alone {
        None
    } else {
        Some(res.role_text("Partner", 6)?)
    };
    let workspace = res.role_text("Workspace", 6)?;
    let clients = res.role_text("Clients", 6)?;
    let get_programs = res.role_text("Get Programs", 6)?;
    let gunning = res.role_text("Gunning", 6)?;

    Ok(RoleProfile::Netrunner(Netrunner {
        character_type,
        alone,
        partner,
        workspace,
        clients,
        get_programs,
        gunning,
    }))
}

impl Netrunner {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        let partner = match &self.partner {
            Some(partner) => format!(
                "Works with a partner, {}",
                lower_first(&p.third_person(partner, YouAs::Object))
            ),
            None => "Works alone.".to_string(),
        };
        format!(
            "{partner}\nWorkspace: {}\nClients: {}\nGets programs: {}\nGunning for {}: {}\n",
            p.third_person(&self.workspace, YouAs::Object),
            p.third_person(&self.clients, YouAs::Object),
            lower_first(&p.third_person(&self.get_programs, YouAs::Subject)),
            p.object,
            lower_first(&p.third_person(&self.gunning, YouAs::Object)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronoun::Sex;

    #[test]
    fn narrate_with_partner() {
        let n = Netrunner {
            character_type: "Freelance patch man".into(),
            alone: false,
            partner: Some("A techie who owes you".into()),
            workspace: "A cramped cube hotel".into(),
            clients: "Fixers".into(),
            get_programs: "You write them yourself.".into(),
            gunning: "A NetWatch agent".into(),
        };
        assert_eq!(
            n.narrate(&Sex::Female.pronouns()),
            "Works with a partner, a techie who owes her\n\
             Workspace: A cramped cube hotel\n\
             Clients: Fixers\n\
             Gets programs: she write them herself.\n\
             Gunning for her: a NetWatch agent\n"
        );
    }

    #[test]
    fn narrate_alone() {
        let n = Netrunner {
            character_type: "Corporate runner".into(),
            alone: true,
            partner: None,
            workspace: "An office".into(),
            clients: "Corps".into(),
            get_programs: "Stolen".into(),
            gunning: "A rival".into(),
        };
        assert!(n.narrate(&Sex::Male.pronouns()).starts_with("Works alone.\n"));
    }
}
