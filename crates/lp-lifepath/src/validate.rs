//! Validation of table data against what the generators will roll.
//!
//! Every table a configured role can reach must exist and hold a row for
//! every face of the die rolled on it; structured rows must have the
//! shape their readers expect. Running this up front turns a mid-run
//! `MissingRow` into a report that names every gap at once.

use lp_tables::{RolledRow, TableStore};

use crate::character::COMMON_ATTRIBUTES;
use crate::origin::CULTURAL_ORIGINS;
use crate::relations::RELATION_TABLES;
use crate::resolver::{COMMON_DIE, common_table_name, table_key};
use crate::roles::RoleKind;
use crate::roles::exec::SPLIT_DIVISION_ROLL;

/// A warning or error found in the table data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Table (or `roles`) the issue was found in.
    pub table: String,
    /// Human-readable description.
    pub message: String,
    /// Whether generation can fail because of it.
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.table, self.message)
    }
}

/// Check a table store for everything generation depends on.
pub fn validate_tables(store: &TableStore) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let roles: Vec<RoleKind> = store
        .roles()
        .iter()
        .filter_map(|name| match RoleKind::parse(name) {
            Some(role) => Some(role),
            None => {
                issues.push(ValidationIssue::error(
                    "roles",
                    format!("role '{name}' has no generator"),
                ));
                None
            }
        })
        .collect();

    if roles.is_empty() {
        issues.push(ValidationIssue::error("roles", "no usable roles configured"));
    }

    for attribute in COMMON_ATTRIBUTES {
        check_coverage(store, &common_table_name(attribute), COMMON_DIE, &mut issues);
    }
    check_coverage(store, CULTURAL_ORIGINS, COMMON_DIE, &mut issues);
    for table in RELATION_TABLES {
        check_coverage(store, table, COMMON_DIE, &mut issues);
    }

    check_rows(store, CULTURAL_ORIGINS, &mut issues, |row| {
        row.origin().map(|_| ())
    });
    check_rows(
        store,
        &common_table_name("family_background"),
        &mut issues,
        |row| row.pair().map(|_| ()),
    );

    for role in &roles {
        for table in role.tables() {
            check_coverage(store, &table_key(*role, table.keyword), table.sides, &mut issues);
        }
    }

    if roles.contains(&RoleKind::Exec) {
        check_exec_division(store, &mut issues);
    }

    for name in store.table_names() {
        if store.table(name).is_ok_and(|t| t.is_empty()) {
            issues.push(ValidationIssue::warning(name, "table has no rows"));
        }
    }

    issues
}

/// The table exists and has a row for every face of a `1d{sides}`.
fn check_coverage(
    store: &TableStore,
    name: &str,
    sides: u32,
    issues: &mut Vec<ValidationIssue>,
) {
    let table = match store.table(name) {
        Ok(table) => table,
        Err(_) => {
            issues.push(ValidationIssue::error(name, "table is missing"));
            return;
        }
    };
    let missing = table.missing_rows(sides);
    if !missing.is_empty() {
        let list: Vec<String> = missing.iter().map(u32::to_string).collect();
        issues.push(ValidationIssue::error(
            name,
            format!("no rows for rolls {} of 1d{sides}", list.join(", ")),
        ));
    }
    let extra = table.iter().filter(|(roll, _)| *roll > sides).count();
    if extra > 0 {
        issues.push(ValidationIssue::warning(
            name,
            format!("{extra} row(s) can never be rolled on 1d{sides}"),
        ));
    }
}

/// Every row of the table passes `check`.
fn check_rows<F>(store: &TableStore, name: &str, issues: &mut Vec<ValidationIssue>, check: F)
where
    F: Fn(&RolledRow<'_>) -> lp_tables::TableResult<()>,
{
    let Ok(table) = store.table(name) else {
        return;
    };
    for (roll, _) in table.iter() {
        let result = store.row(name, roll).and_then(|row| check(&row));
        if let Err(e) = result {
            issues.push(ValidationIssue::error(name, e.to_string()));
        }
    }
}

fn check_exec_division(store: &TableStore, issues: &mut Vec<ValidationIssue>) {
    let name = table_key(RoleKind::Exec, "Division");
    let Ok(row) = store.row(&name, SPLIT_DIVISION_ROLL) else {
        return;
    };
    match row.text() {
        Ok(text) => {
            let options = text.split('/').filter(|o| !o.trim().is_empty()).count();
            if options != 3 {
                issues.push(ValidationIssue::error(
                    &name,
                    format!("row {SPLIT_DIVISION_ROLL} needs three '/' options, found {options}"),
                ));
            }
        }
        Err(e) => issues.push(ValidationIssue::error(&name, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_store;
    use lp_tables::{Row, Table};

    fn errors(issues: &[ValidationIssue]) -> Vec<&ValidationIssue> {
        issues.iter().filter(|i| i.is_error).collect()
    }

    #[test]
    fn fixture_is_clean() {
        let issues = validate_tables(&fixture_store());
        assert!(errors(&issues).is_empty(), "{issues:?}");
    }

    #[test]
    fn display_format() {
        let issue = ValidationIssue::error("Friend", "table is missing");
        assert_eq!(issue.to_string(), "error: Friend: table is missing");
        let issue = ValidationIssue::warning("Friend", "table has no rows");
        assert_eq!(issue.to_string(), "warning: Friend: table has no rows");
    }

    #[test]
    fn unknown_role_is_reported() {
        let store = TableStore::new(["Wizard"]);
        let issues = validate_tables(&store);
        assert!(issues.iter().any(|i| i.table == "roles" && i.message.contains("Wizard")));
        assert!(issues.iter().any(|i| i.message == "no usable roles configured"));
    }

    #[test]
    fn missing_rows_are_listed() {
        let store = fixture_store().with_table("Friend", Table::from_rows([(1, "a"), (2, "b")]));
        let issues = validate_tables(&store);
        let friend = issues
            .iter()
            .find(|i| i.table == "Friend" && i.is_error)
            .unwrap();
        assert_eq!(friend.message, "no rows for rolls 3, 4, 5, 6, 7, 8, 9, 10 of 1d10");
    }

    #[test]
    fn missing_role_table_is_reported() {
        let store = TableStore::new(["Media"]);
        let issues = validate_tables(&store);
        assert!(
            issues
                .iter()
                .any(|i| i.table == "Media Ethics" && i.message == "table is missing")
        );
    }

    #[test]
    fn bad_exec_division_is_reported() {
        let rows = (1..=6).map(|k| {
            let text = if k == 5 { "Legal/Gray" } else { "Sales" };
            (k, text)
        });
        let store = fixture_store().with_table("Exec Division", Table::from_rows(rows));
        let issues = validate_tables(&store);
        assert!(
            issues
                .iter()
                .any(|i| i.table == "Exec Division" && i.message.contains("found 2"))
        );
    }

    #[test]
    fn malformed_family_background_is_reported() {
        let rows = (1..=10).map(|k| (k, Row::from("not a pair")));
        let store = fixture_store().with_table("Family Background", Table::from_rows(rows));
        let issues = validate_tables(&store);
        assert_eq!(
            errors(&issues)
                .iter()
                .filter(|i| i.table == "Family Background")
                .count(),
            10
        );
    }

    #[test]
    fn unreachable_rows_warn() {
        let rows = (1..=12).map(|k| (k, "row"));
        let store = fixture_store().with_table("Friend", Table::from_rows(rows));
        let issues = validate_tables(&store);
        let warning = issues
            .iter()
            .find(|i| i.table == "Friend" && !i.is_error)
            .unwrap();
        assert_eq!(warning.message, "2 row(s) can never be rolled on 1d10");
    }
}
