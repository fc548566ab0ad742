//! Rockerboy: musicians, poets, and agitators.

use serde::Serialize;
use tracing::debug;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;
use crate::text::lower_first;

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 10),
    TableSpec::new("Leave", 6),
    TableSpec::new("Perform", 6),
    TableSpec::new("Gunning", 10),
];

/// Rockerboy background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rockerboy {
    /// Kind of act.
    pub character_type: String,
    /// Currently performs with a group.
    pub in_group: bool,
    /// Solo act that used to be in a group. Always false for group acts.
    pub were_in_group: bool,
    /// Why they left the old group, only for former group members.
    pub leave: Option<String>,
    /// Where they perform.
    pub perform: String,
    /// Who is gunning for them.
    pub gunning: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 10)?;
    let in_group = res.coin_flip();
    let were_in_group = !in_group && res.coin_flip();
    debug!(in_group, were_in_group, "rockerboy group flips");
    let leave = if were_in_group {
        Some(res.role_text("Leave", 6)?)
    } else {
        None
    };
    let perform = res.role_text("Perform", 6)?;
    let gunning = res.role_text("Gunning", 10)?;

    Ok(RoleProfile::Rockerboy(Rockerboy {
        character_type,
        in_group,
        were_in_group,
        leave,
        perform,
        gunning,
    }))
}

impl Rockerboy {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        let mut out = String::from(if self.in_group {
            "Performs in a group."
        } else {
            "Performs solo."
        });
        if let Some(leave) = &self.leave {
            out.push_str(&format!(
                " Was in a group, but {}",
                lower_first(&p.third_person(leave, YouAs::Subject))
            ));
        }
        out.push('\n');
        out.push_str(&format!(
            "Performs in {}\n",
            lower_first(&p.third_person(&self.perform, YouAs::Object))
        ));
        out.push_str(&format!(
            "Gunning for {}: {}\n",
            p.object,
            p.third_person(&self.gunning, YouAs::Object)
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronoun::Sex;
    use crate::roles::RoleKind;
    use crate::testing::fixture_store;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn leave_only_for_former_group_members() {
        let store = fixture_store();
        for seed in 0..60 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut res = Resolver::new(&store, RoleKind::Rockerboy, &mut rng);
            let RoleProfile::Rockerboy(r) = generate(&mut res).unwrap() else {
                panic!("wrong profile");
            };
            if r.in_group {
                assert!(!r.were_in_group);
            }
            assert_eq!(r.leave.is_some(), r.were_in_group);
        }
    }

    #[test]
    fn narrate_solo_act_with_history() {
        let r = Rockerboy {
            character_type: "Street poet".into(),
            in_group: false,
            were_in_group: true,
            leave: Some("You fought with your drummer.".into()),
            perform: "Underground clubs".into(),
            gunning: "An old group member".into(),
        };
        assert_eq!(
            r.narrate(&Sex::Female.pronouns()),
            "Performs solo. Was in a group, but she fought with her drummer.\n\
             Performs in underground clubs\n\
             Gunning for her: An old group member\n"
        );
    }

    #[test]
    fn narrate_group_act() {
        let r = Rockerboy {
            character_type: "Guitarist".into(),
            in_group: true,
            were_in_group: false,
            leave: None,
            perform: "Arenas".into(),
            gunning: "A producer".into(),
        };
        assert!(r.narrate(&Sex::Male.pronouns()).starts_with("Performs in a group.\n"));
    }
}
