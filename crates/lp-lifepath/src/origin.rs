//! Cultural origin: where the character grew up and what they speak.

use lp_tables::TableError;
use serde::Serialize;
use tracing::debug;

use crate::error::GenResult;
use crate::resolver::{COMMON_DIE, Resolver};
use crate::text::choose_slash_option;

/// Table holding region/languages records.
pub const CULTURAL_ORIGINS: &str = "Cultural Origins";

/// A resolved cultural origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CulturalOrigin {
    /// One region, with any `/` alternatives already decided.
    pub region: String,
    /// One language spoken there.
    pub language: String,
}

impl CulturalOrigin {
    /// Roll the origins table, then pick a region alternative and a
    /// language independently of the roll.
    pub fn resolve(res: &mut Resolver<'_, '_>) -> GenResult<Self> {
        let row = res.lookup(CULTURAL_ORIGINS, COMMON_DIE)?;
        let origin = row.origin()?;

        let malformed = |reason: &str| TableError::MalformedRow {
            table: row.table.to_string(),
            roll: row.roll,
            reason: reason.to_string(),
        };

        let region = choose_slash_option(origin.region, res.rng())
            .ok_or_else(|| malformed("region has no usable alternative"))?;
        let language = res
            .pick(origin.languages)
            .ok_or_else(|| malformed("no languages"))?
            .clone();

        debug!(%region, %language, "resolved cultural origin");
        Ok(Self { region, language })
    }
}
