pub mod check;
pub mod generate;
pub mod roles;

use std::path::Path;

use lp_tables::TableStore;

/// Load the table data, turning any failure into a printable message.
fn load_tables(path: &Path) -> Result<TableStore, String> {
    TableStore::load(path).map_err(|e| e.to_string())
}
