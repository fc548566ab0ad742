//! Table-driven lifepath generation.
//!
//! Rolls a character's cultural origin, personality, family history,
//! relationships and role-specific background against a [`TableStore`],
//! then renders the result as a second-person-free biography.
//!
//! Randomness and naming are injected: every entry point takes a seeded
//! [`rand::rngs::StdRng`] and a [`NameService`], so a run is fully
//! reproducible from its seed.
//!
//! [`TableStore`]: lp_tables::TableStore

pub mod biography;
pub mod character;
pub mod config;
pub mod error;
pub mod generator;
pub mod names;
pub mod origin;
pub mod pronoun;
pub mod relations;
pub mod resolver;
pub mod roles;
pub mod text;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use biography::render_biography;
pub use character::{Character, CommonTraits, FamilyBackground, Identity};
pub use config::{CharacterRequest, DEFAULT_TABLES_PATH, GeneratorConfig};
pub use error::{GenError, GenResult};
pub use generator::Generator;
pub use names::{NameService, StockNames};
pub use origin::CulturalOrigin;
pub use pronoun::{Pronouns, Sex, YouAs};
pub use relations::{Enemy, Friend, LoveInterest};
pub use roles::{RoleKind, RoleProfile, TableSpec};
pub use validate::{ValidationIssue, validate_tables};
