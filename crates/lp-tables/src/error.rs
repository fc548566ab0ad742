//! Error types for table loading and lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while loading or reading roll tables.
///
/// Every variant is a data-integrity problem: nothing here is retried.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or not a mapping of tables.
    #[error("invalid table document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document has no `roles` entry.
    #[error("table document has no 'roles' list")]
    MissingRoles,

    /// A table entry could not be read as integer-keyed rows.
    #[error("table '{table}' is malformed: {reason}")]
    MalformedTable {
        /// Table name.
        table: String,
        /// What went wrong.
        reason: String,
    },

    /// No table with this name exists.
    #[error("no table named '{0}'")]
    MissingTable(String),

    /// The table exists but has no row for the rolled value.
    #[error("table '{table}' has no row {roll}")]
    MissingRow {
        /// Table name.
        table: String,
        /// The rolled value that had no row.
        roll: u32,
    },

    /// The row exists but does not have the expected shape.
    #[error("table '{table}' row {roll} is malformed: {reason}")]
    MalformedRow {
        /// Table name.
        table: String,
        /// Row key.
        roll: u32,
        /// What was expected.
        reason: String,
    },
}
