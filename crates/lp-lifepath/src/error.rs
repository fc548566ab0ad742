//! Error types for character generation.

use lp_dice::DiceError;
use lp_tables::TableError;
use thiserror::Error;

/// Result type for generation.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that stop a character from being generated.
///
/// All of them are fatal for the current character: there is no
/// fallback text and no partial output.
#[derive(Debug, Error)]
pub enum GenError {
    /// The requested role is not in the configured `roles` list.
    #[error("no such role '{requested}'; choose from: {}", .valid.join(", "))]
    UnknownRole {
        /// Role as the user typed it.
        requested: String,
        /// Roles the table data allows.
        valid: Vec<String>,
    },

    /// The role is configured in the tables but no generator exists for it.
    #[error("role '{0}' is configured but has no generator")]
    UnsupportedRole(String),

    /// The table data configures no usable roles.
    #[error("no usable roles are configured")]
    NoRoles,

    /// A sex other than male or female was requested.
    #[error("invalid sex '{0}'; expected 'male' or 'female'")]
    InvalidSex(String),

    /// A table lookup failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A dice expression in table text could not be evaluated.
    #[error(transparent)]
    Dice(#[from] DiceError),

    /// The builder was frozen before a field was resolved.
    #[error("character is missing {0}")]
    Incomplete(&'static str),
}
