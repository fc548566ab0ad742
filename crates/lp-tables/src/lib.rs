//! Roll tables for the lifepath generator.
//!
//! A [`TableStore`] maps table names to integer-keyed rows and carries the
//! list of configured roles. It is loaded once from a YAML document and is
//! read-only afterwards; generators borrow it and roll against it with a
//! caller-supplied RNG.

pub mod error;
pub mod row;
pub mod store;

pub use error::{TableError, TableResult};
pub use row::{Origin, OriginRow, RolledRow, Row};
pub use store::{Table, TableStore};
