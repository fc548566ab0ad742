//! Generator configuration and per-character requests.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::pronoun::Sex;

/// Where the table data lives unless told otherwise.
pub const DEFAULT_TABLES_PATH: &str = "data/tables.yaml";

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// RNG seed; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    /// Path to the YAML table data.
    pub tables_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tables_path: PathBuf::from(DEFAULT_TABLES_PATH),
        }
    }
}

impl GeneratorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the table data path.
    pub fn with_tables_path(mut self, path: impl AsRef<Path>) -> Self {
        self.tables_path = path.as_ref().to_path_buf();
        self
    }

    /// The configured seed, or a random one.
    ///
    /// Log the result: it is the only way to reproduce an unseeded run.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// An RNG seeded from [`resolve_seed`](Self::resolve_seed), with the seed used.
    pub fn seeded_rng(&self) -> (u64, StdRng) {
        let seed = self.resolve_seed();
        (seed, StdRng::seed_from_u64(seed))
    }
}

/// What the caller asks for; anything unset is rolled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRequest {
    /// Fixed name.
    pub name: Option<String>,
    /// Role name, matched case-insensitively against the configured roles.
    pub role: Option<String>,
    /// Fixed sex.
    pub sex: Option<Sex>,
}

impl CharacterRequest {
    /// Use this name instead of generating one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Ask for a role by name.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Fix the sex.
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}
