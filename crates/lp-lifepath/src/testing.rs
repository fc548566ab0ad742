//! Shared fixtures for unit tests.

use lp_tables::{OriginRow, Row, Table, TableStore};
use rand::rngs::StdRng;

use crate::character::COMMON_ATTRIBUTES;
use crate::names::NameService;
use crate::origin::CULTURAL_ORIGINS;
use crate::pronoun::Sex;
use crate::relations::{ENEMY_THROW, RELATION_TABLES};
use crate::resolver::{COMMON_DIE, common_table_name, table_key};
use crate::roles::RoleKind;

/// Name service that always returns `"Fixed <sex>"`.
pub(crate) struct FixedNames;

impl NameService for FixedNames {
    fn name(&self, sex: Sex, _rng: &mut StdRng) -> String {
        format!("Fixed {sex}")
    }
}

/// Rows `1..=sides` whose text names the table and speaks to "you".
fn text_table(name: &str, sides: u32) -> Table {
    Table::from_rows((1..=sides).map(|n| (n, Row::Text(format!("{name} {n}: you and your crew")))))
}

/// Every table every role needs, covering every face of its die.
pub(crate) fn fixture_store() -> TableStore {
    let mut store = TableStore::new(RoleKind::ALL.map(RoleKind::name));

    for attribute in COMMON_ATTRIBUTES {
        let name = common_table_name(attribute);
        store = store.with_table(&name, text_table(&name, COMMON_DIE));
    }
    store = store.with_table(
        "Family Background",
        Table::from_rows((1..=COMMON_DIE).map(|n| {
            (
                n,
                Row::List(vec![
                    format!("Fixture family {n}"),
                    format!("Family Background {n}: your parents raised you"),
                ]),
            )
        })),
    );
    store = store.with_table(
        "Family Crisis",
        Table::from_rows((1..=COMMON_DIE).map(|n| {
            (
                n,
                Row::Text(format!("Family Crisis {n}: your family turned on you and hurt you.")),
            )
        })),
    );
    store = store.with_table(
        CULTURAL_ORIGINS,
        Table::from_rows((1..=COMMON_DIE).map(|n| {
            (
                n,
                Row::Origin(OriginRow {
                    region: Some("Region/A/Region B".to_string()),
                    languages: Some(vec!["Lang A".to_string(), "Lang B".to_string()]),
                }),
            )
        })),
    );

    for table in RELATION_TABLES {
        store = store.with_table(*table, text_table(table, COMMON_DIE));
    }
    store = store.with_table(
        ENEMY_THROW,
        Table::from_rows((1..=COMMON_DIE).map(|n| (n, "can throw {1d6} crates"))),
    );

    for role in RoleKind::ALL {
        for table in role.tables() {
            let name = table_key(role, table.keyword);
            store = store.with_table(&name, text_table(&name, table.sides));
        }
    }
    store = store.with_table(
        "Exec Division",
        Table::from_rows((1..=6).map(|n| {
            let text = if n == 5 {
                "Legal/Gray/Black".to_string()
            } else {
                format!("Exec Division {n}")
            };
            (n, Row::Text(text))
        })),
    );
    store.with_table(
        "Solo Type",
        Table::from_rows((1..=6).map(|n| {
            (
                n,
                Row::Text(format!("Solo Type {n}: Bodyguard/Assassin for/with your crew")),
            )
        })),
    )
}
