//! The table store: named roll tables plus the configured role list.

use std::collections::BTreeMap;
use std::path::Path;

use lp_dice::{DiceExpr, Die};
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::{TableError, TableResult};
use crate::row::{RolledRow, Row};

/// Document key holding the list of configured roles.
const ROLES_KEY: &str = "roles";

/// A single roll table: rows keyed by the value rolled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: BTreeMap<u32, Row>,
}

impl Table {
    /// Build a table from `(roll, row)` pairs.
    pub fn from_rows<R: Into<Row>>(rows: impl IntoIterator<Item = (u32, R)>) -> Self {
        Self {
            rows: rows.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Row for a rolled value.
    pub fn get(&self, roll: u32) -> Option<&Row> {
        self.rows.get(&roll)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Row)> {
        self.rows.iter().map(|(k, v)| (*k, v))
    }

    /// Keys in `1..=sides` that have no row.
    pub fn missing_rows(&self, sides: u32) -> Vec<u32> {
        (1..=sides).filter(|k| !self.rows.contains_key(k)).collect()
    }
}

/// All roll tables for a run, read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    roles: Vec<String>,
    tables: BTreeMap<String, Table>,
}

impl TableStore {
    /// Create an empty store with the given configured roles.
    pub fn new<S: Into<String>>(roles: impl IntoIterator<Item = S>) -> Self {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            tables: BTreeMap::new(),
        }
    }

    /// Add (or replace) a table.
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.tables.insert(name.into(), table);
        self
    }

    /// Load a store from a YAML file.
    pub fn load(path: &Path) -> TableResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_yaml_str(&text)?;
        debug!(
            path = %path.display(),
            tables = store.tables.len(),
            roles = store.roles.len(),
            "loaded table store"
        );
        Ok(store)
    }

    /// Parse a store from YAML text.
    ///
    /// The document is a mapping: `roles` holds a list of role names and
    /// every other key is a table of integer keys to rows.
    pub fn from_yaml_str(text: &str) -> TableResult<Self> {
        let mut doc: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(text)?;

        let roles = doc.remove(ROLES_KEY).ok_or(TableError::MissingRoles)?;
        let roles: Vec<String> =
            serde_yaml::from_value(roles).map_err(|e| TableError::MalformedTable {
                table: ROLES_KEY.to_string(),
                reason: e.to_string(),
            })?;

        let mut tables = BTreeMap::new();
        for (name, value) in doc {
            let rows: BTreeMap<u32, Row> =
                serde_yaml::from_value(value).map_err(|e| TableError::MalformedTable {
                    table: name.clone(),
                    reason: e.to_string(),
                })?;
            tables.insert(name, Table { rows });
        }

        Ok(Self { roles, tables })
    }

    /// The configured role names, in document order.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Configured role matching `name` case-insensitively.
    pub fn find_role(&self, name: &str) -> Option<&str> {
        self.roles
            .iter()
            .find(|r| r.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Table names, sorted.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of tables whose name starts with `prefix`.
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.tables.keys().filter(|k| k.starts_with(prefix)).count()
    }

    /// Look up a table by exact name.
    pub fn table(&self, name: &str) -> TableResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| TableError::MissingTable(name.to_string()))
    }

    /// Look up the row at `roll` in table `name`.
    pub fn row(&self, name: &str, roll: u32) -> TableResult<RolledRow<'_>> {
        let (table_name, table) = self
            .tables
            .get_key_value(name)
            .ok_or_else(|| TableError::MissingTable(name.to_string()))?;
        let row = table.get(roll).ok_or_else(|| TableError::MissingRow {
            table: name.to_string(),
            roll,
        })?;
        Ok(RolledRow {
            table: table_name,
            roll,
            row,
        })
    }

    /// Roll one `die` and return the matching row of table `name`.
    ///
    /// The table is checked before rolling, so a missing table never
    /// consumes randomness.
    pub fn roll(&self, name: &str, die: Die, rng: &mut StdRng) -> TableResult<RolledRow<'_>> {
        self.table(name)?;
        let roll = DiceExpr::single(die).roll_total(rng);
        debug!(table = name, %die, roll, "table roll");
        self.row(name, roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
roles: [Fixer, Solo]
Personality:
  1: Shy and secretive
  2: Rebellious, antisocial, violent
Family Background:
  1: [Corporate Execs, Wealthy and powerful]
Cultural Origins:
  1:
    Cultural Region: North/South America
    Languages: [English, Spanish]
"#;

    #[test]
    fn parses_roles_and_tables() {
        let store = TableStore::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(store.roles(), ["Fixer", "Solo"]);
        assert_eq!(store.table_names().count(), 3);
        assert_eq!(store.table("Personality").unwrap().len(), 2);
    }

    #[test]
    fn find_role_ignores_case() {
        let store = TableStore::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(store.find_role("fixer"), Some("Fixer"));
        assert_eq!(store.find_role("SOLO"), Some("Solo"));
        assert_eq!(store.find_role("wizard"), None);
    }

    #[test]
    fn missing_roles_is_an_error() {
        let err = TableStore::from_yaml_str("Personality: {1: Calm}").unwrap_err();
        assert!(matches!(err, TableError::MissingRoles));
    }

    #[test]
    fn non_integer_keys_are_malformed() {
        let err = TableStore::from_yaml_str("roles: [Solo]\nPersonality: {one: Calm}").unwrap_err();
        assert!(
            matches!(err, TableError::MalformedTable { ref table, .. } if table == "Personality")
        );
    }

    #[test]
    fn row_lookup_errors() {
        let store = TableStore::from_yaml_str(SAMPLE).unwrap();
        assert!(matches!(
            store.row("Hairstyle", 1),
            Err(TableError::MissingTable(ref t)) if t == "Hairstyle"
        ));
        assert!(matches!(
            store.row("Personality", 7),
            Err(TableError::MissingRow { roll: 7, .. })
        ));
        assert_eq!(
            store.row("Personality", 1).unwrap().text().unwrap(),
            "Shy and secretive"
        );
    }

    #[test]
    fn roll_hits_existing_rows_only() {
        let store = TableStore::new(["Solo"]).with_table(
            "Solo Gunning",
            Table::from_rows((1..=6).map(|k| (k, "a rival"))),
        );
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let row = store.roll("Solo Gunning", Die::D6, &mut rng).unwrap();
            assert!((1..=6).contains(&row.roll));
            assert_eq!(row.table, "Solo Gunning");
        }
    }

    #[test]
    fn roll_on_short_table_fails_with_missing_row() {
        let store = TableStore::new(["Solo"]).with_table("Tiny", Table::from_rows([(1, "only")]));
        let mut rng = StdRng::seed_from_u64(2);
        let failed = (0..50).any(|_| {
            matches!(
                store.roll("Tiny", Die::D10, &mut rng),
                Err(TableError::MissingRow { .. })
            )
        });
        assert!(failed);
    }

    #[test]
    fn missing_rows_lists_gaps() {
        let table = Table::from_rows([(1, "a"), (2, "b"), (4, "d")]);
        assert_eq!(table.missing_rows(6), vec![3, 5, 6]);
        assert!(table.missing_rows(2).is_empty());
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tables.yaml");
        fs::write(&path, SAMPLE).unwrap();
        let store = TableStore::load(&path).unwrap();
        assert_eq!(store.count_with_prefix("Personality"), 1);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = TableStore::load(Path::new("/nonexistent/tables.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tables.yaml"));
    }
}
