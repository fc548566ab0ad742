use std::path::Path;

use colored::Colorize;
use lp_lifepath::validate_tables;

pub fn run(tables: &Path) -> Result<(), String> {
    let store = super::load_tables(tables)?;
    let issues = validate_tables(&store);

    for issue in &issues {
        let level = if issue.is_error {
            "error".red().bold()
        } else {
            "warning".yellow().bold()
        };
        eprintln!("  {level}: {}: {}", issue.table.bold(), issue.message);
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{} in '{}'",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
            tables.display()
        ));
    }

    println!("  All checks passed for '{}'.", tables.display());
    println!(
        "  {} tables, {} roles, {} warning{}",
        store.table_names().count(),
        store.roles().len(),
        warnings,
        if warnings == 1 { "" } else { "s" },
    );

    Ok(())
}
