//! Nomad: members of the road families.
//!
//! A pack works on land, in the air, or at sea; each kind has its own
//! work table with its own die.

use serde::Serialize;
use tracing::debug;

use super::{RoleProfile, TableSpec};
use crate::error::GenResult;
use crate::pronoun::{Pronouns, YouAs};
use crate::resolver::Resolver;
use crate::text::{lower_first, trim_period};

pub(crate) const TABLES: &[TableSpec] = &[
    TableSpec::new("Type", 6),
    TableSpec::new("Land", 10),
    TableSpec::new("Air", 6),
    TableSpec::new("Sea", 6),
    TableSpec::new("Philosophy", 6),
    TableSpec::new("Gunning", 6),
];

/// Where a nomad pack does its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackType {
    /// Convoys and road crews.
    Land,
    /// Air freight and smuggling.
    Air,
    /// Shipping and piracy.
    Sea,
}

impl PackType {
    /// Every pack type.
    pub const ALL: [PackType; 3] = [Self::Land, Self::Air, Self::Sea];

    /// Table keyword for this pack's work.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Land => "Land",
            Self::Air => "Air",
            Self::Sea => "Sea",
        }
    }

    /// Die rolled on this pack's work table.
    pub fn sides(self) -> u32 {
        match self {
            Self::Land => 10,
            Self::Air | Self::Sea => 6,
        }
    }
}

impl std::fmt::Display for PackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Land => "land",
            Self::Air => "air",
            Self::Sea => "sea",
        })
    }
}

/// Nomad background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nomad {
    /// Standing within the family.
    pub character_type: String,
    /// Where the pack works.
    pub pack: PackType,
    /// What the pack does for a living.
    pub pack_work: String,
    /// The family's outlook.
    pub philosophy: String,
    /// Who is gunning for them.
    pub gunning: String,
}

pub(crate) fn generate(res: &mut Resolver<'_, '_>) -> GenResult<RoleProfile> {
    let character_type = res.role_text("Type", 6)?;
    let pack = res.pick(&PackType::ALL).copied().unwrap_or(PackType::Land);
    debug!(%pack, "nomad pack type");
    let pack_work = res.role_text(pack.keyword(), pack.sides())?;
    let philosophy = res.role_text("Philosophy", 6)?;
    let gunning = res.role_text("Gunning", 6)?;

    Ok(RoleProfile::Nomad(Nomad {
        character_type,
        pack,
        pack_work,
        philosophy,
        gunning,
    }))
}

impl Nomad {
    pub(crate) fn narrate(&self, p: &Pronouns) -> String {
        format!(
            "Rides with a {} pack: {}.\nPhilosophy: {}\nGunning for {}: {}\n",
            self.pack,
            lower_first(trim_period(&p.third_person(&self.pack_work, YouAs::Object))),
            p.third_person(&self.philosophy, YouAs::Subject),
            p.object,
            lower_first(&p.third_person(&self.gunning, YouAs::Object)),
        )
    }
}
