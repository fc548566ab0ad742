use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use lp_lifepath::RoleKind;

pub fn run(tables: &Path) -> Result<(), String> {
    let store = super::load_tables(tables)?;

    if store.roles().is_empty() {
        println!("  No roles configured.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Role", "Tables", "Generator"]);

    for role in store.roles() {
        let count = store.count_with_prefix(&format!("{role} "));
        let generator = match RoleKind::parse(role) {
            Some(kind) => format!("{} tables expected", kind.tables().len()),
            None => "none".to_string(),
        };
        table.add_row(vec![role.clone(), count.to_string(), generator]);
    }

    println!("{table}");
    println!();
    println!("  {} roles", store.roles().len());

    Ok(())
}
