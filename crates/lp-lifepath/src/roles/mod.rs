//! Role profiles: the ten archetypes and their table-driven backgrounds.
//!
//! Each role is a single pass over its own tables. A few steps branch on
//! a coin flip or an earlier roll; none loop or re-roll. [`RoleKind`]
//! names the role and dispatches to its generator; [`RoleProfile`] holds
//! the role's resolved fields and renders its paragraph.

pub mod exec;
pub mod fixer;
pub mod lawman;
pub mod media;
pub mod medtech;
pub mod netrunner;
pub mod nomad;
pub mod rockerboy;
pub mod solo;
pub mod tech;

use serde::Serialize;

use crate::error::GenResult;
use crate::pronoun::Pronouns;
use crate::resolver::Resolver;

pub use exec::Exec;
pub use fixer::Fixer;
pub use lawman::Lawman;
pub use media::Media;
pub use medtech::Medtech;
pub use netrunner::Netrunner;
pub use nomad::{Nomad, PackType};
pub use rockerboy::Rockerboy;
pub use solo::Solo;
pub use tech::Tech;

/// A role-specific table: keyword (appended to the role name) and die size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Second half of the table name.
    pub keyword: &'static str,
    /// Sides of the die rolled on it.
    pub sides: u32,
}

impl TableSpec {
    pub(crate) const fn new(keyword: &'static str, sides: u32) -> Self {
        Self { keyword, sides }
    }
}

/// Signature shared by every role generator.
pub(crate) type RoleGenerator = fn(&mut Resolver<'_, '_>) -> GenResult<RoleProfile>;

/// A character archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoleKind {
    /// Deal-maker and broker.
    Fixer,
    /// Journalist or streamer.
    Media,
    /// Corporate executive.
    Exec,
    /// Musician and rebel.
    Rockerboy,
    /// Hired gun.
    Solo,
    /// Hacker.
    Netrunner,
    /// Mechanic and inventor.
    Tech,
    /// Street doctor.
    Medtech,
    /// Cop.
    Lawman,
    /// Road family member.
    Nomad,
}

impl RoleKind {
    /// Every role, in rulebook order.
    pub const ALL: [RoleKind; 10] = [
        Self::Fixer,
        Self::Media,
        Self::Exec,
        Self::Rockerboy,
        Self::Solo,
        Self::Netrunner,
        Self::Tech,
        Self::Medtech,
        Self::Lawman,
        Self::Nomad,
    ];

    /// Capitalized name, also the prefix of the role's table names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fixer => "Fixer",
            Self::Media => "Media",
            Self::Exec => "Exec",
            Self::Rockerboy => "Rockerboy",
            Self::Solo => "Solo",
            Self::Netrunner => "Netrunner",
            Self::Tech => "Tech",
            Self::Medtech => "Medtech",
            Self::Lawman => "Lawman",
            Self::Nomad => "Nomad",
        }
    }

    /// Match a role name case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Role-specific tables this role rolls on.
    pub fn tables(self) -> &'static [TableSpec] {
        match self {
            Self::Fixer => fixer::TABLES,
            Self::Media => media::TABLES,
            Self::Exec => exec::TABLES,
            Self::Rockerboy => rockerboy::TABLES,
            Self::Solo => solo::TABLES,
            Self::Netrunner => netrunner::TABLES,
            Self::Tech => tech::TABLES,
            Self::Medtech => medtech::TABLES,
            Self::Lawman => lawman::TABLES,
            Self::Nomad => nomad::TABLES,
        }
    }

    pub(crate) fn generator(self) -> RoleGenerator {
        match self {
            Self::Fixer => fixer::generate,
            Self::Media => media::generate,
            Self::Exec => exec::generate,
            Self::Rockerboy => rockerboy::generate,
            Self::Solo => solo::generate,
            Self::Netrunner => netrunner::generate,
            Self::Tech => tech::generate,
            Self::Medtech => medtech::generate,
            Self::Lawman => lawman::generate,
            Self::Nomad => nomad::generate,
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The role-specific half of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleProfile {
    /// Fixer background.
    Fixer(Fixer),
    /// Media background.
    Media(Media),
    /// Exec background.
    Exec(Exec),
    /// Rockerboy background.
    Rockerboy(Rockerboy),
    /// Solo background.
    Solo(Solo),
    /// Netrunner background.
    Netrunner(Netrunner),
    /// Tech background.
    Tech(Tech),
    /// Medtech background.
    Medtech(Medtech),
    /// Lawman background.
    Lawman(Lawman),
    /// Nomad background.
    Nomad(Nomad),
}

impl RoleProfile {
    /// Which role this profile belongs to.
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Fixer(_) => RoleKind::Fixer,
            Self::Media(_) => RoleKind::Media,
            Self::Exec(_) => RoleKind::Exec,
            Self::Rockerboy(_) => RoleKind::Rockerboy,
            Self::Solo(_) => RoleKind::Solo,
            Self::Netrunner(_) => RoleKind::Netrunner,
            Self::Tech(_) => RoleKind::Tech,
            Self::Medtech(_) => RoleKind::Medtech,
            Self::Lawman(_) => RoleKind::Lawman,
            Self::Nomad(_) => RoleKind::Nomad,
        }
    }

    /// The role's type line, shown in the biography header.
    pub fn character_type(&self) -> &str {
        match self {
            Self::Fixer(p) => &p.character_type,
            Self::Media(p) => &p.character_type,
            Self::Exec(p) => &p.character_type,
            Self::Rockerboy(p) => &p.character_type,
            Self::Solo(p) => &p.character_type,
            Self::Netrunner(p) => &p.character_type,
            Self::Tech(p) => &p.character_type,
            Self::Medtech(p) => &p.character_type,
            Self::Lawman(p) => &p.character_type,
            Self::Nomad(p) => &p.character_type,
        }
    }

    /// The role paragraph, already in third person.
    pub fn narrate(&self, pronouns: &Pronouns) -> String {
        match self {
            Self::Fixer(p) => p.narrate(pronouns),
            Self::Media(p) => p.narrate(pronouns),
            Self::Exec(p) => p.narrate(pronouns),
            Self::Rockerboy(p) => p.narrate(pronouns),
            Self::Solo(p) => p.narrate(pronouns),
            Self::Netrunner(p) => p.narrate(pronouns),
            Self::Tech(p) => p.narrate(pronouns),
            Self::Medtech(p) => p.narrate(pronouns),
            Self::Lawman(p) => p.narrate(pronouns),
            Self::Nomad(p) => p.narrate(pronouns),
        }
    }
}
