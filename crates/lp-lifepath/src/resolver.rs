//! Attribute resolution: turning (role, keyword) pairs into table rows.
//!
//! Role tables are named `"<Role> <Keyword>"`. The keyword is title-cased
//! word by word, except when it contains a `/` (multi-option names such
//! as `Good/Bad`), in which case it is used verbatim and must match the
//! data file exactly. Common attribute tables are named after the
//! attribute with underscores turned into spaces and title-cased.

use lp_dice::{Die, coin_flip, pick, roll_expr};
use lp_tables::{RolledRow, TableStore};
use rand::rngs::StdRng;

use crate::error::GenResult;
use crate::roles::RoleKind;
use crate::text::title_words;

/// Die used by every common attribute and relationship table.
pub const COMMON_DIE: u32 = 10;

/// Table name for a role-specific keyword.
pub fn table_key(role: RoleKind, keyword: &str) -> String {
    if keyword.contains('/') {
        format!("{} {keyword}", role.name())
    } else {
        format!("{} {}", role.name(), title_words(keyword))
    }
}

/// Table name for a common attribute, e.g. `clothing_style` → `Clothing Style`.
pub fn common_table_name(attribute: &str) -> String {
    title_words(&attribute.replace('_', " "))
}

/// Rolls against the table store on behalf of one character.
///
/// Holds the store, the character's role, and the run's RNG so that
/// generators can ask for rows by keyword alone.
pub struct Resolver<'a, 'r> {
    tables: &'a TableStore,
    role: RoleKind,
    rng: &'r mut StdRng,
}

impl<'a, 'r> Resolver<'a, 'r> {
    /// Create a resolver for one character.
    pub fn new(tables: &'a TableStore, role: RoleKind, rng: &'r mut StdRng) -> Self {
        Self { tables, role, rng }
    }

    /// The role tables are keyed by.
    pub fn role(&self) -> RoleKind {
        self.role
    }

    /// The underlying RNG, for name generation and other non-table picks.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut *self.rng
    }

    /// Roll `1d{sides}` on a table by its full name.
    pub fn lookup(&mut self, table: &str, sides: u32) -> GenResult<RolledRow<'a>> {
        let die = Die::from_sides(sides)?;
        Ok(self.tables.roll(table, die, self.rng)?)
    }

    /// Read a row at a known roll from a table by its full name.
    pub fn row_at(&self, table: &str, roll: u32) -> GenResult<RolledRow<'a>> {
        Ok(self.tables.row(table, roll)?)
    }

    /// Roll `1d{sides}` on this role's `keyword` table.
    pub fn role_row(&mut self, keyword: &str, sides: u32) -> GenResult<RolledRow<'a>> {
        let key = table_key(self.role, keyword);
        self.lookup(&key, sides)
    }

    /// Roll on this role's `keyword` table and return the row text.
    pub fn role_text(&mut self, keyword: &str, sides: u32) -> GenResult<String> {
        Ok(self.role_row(keyword, sides)?.text()?.to_string())
    }

    /// Roll `1d10` on the table for a common attribute.
    pub fn common(&mut self, attribute: &str) -> GenResult<RolledRow<'a>> {
        let table = common_table_name(attribute);
        self.lookup(&table, COMMON_DIE)
    }

    /// Roll `1d10` on a common attribute table and return the row text.
    pub fn common_text(&mut self, attribute: &str) -> GenResult<String> {
        Ok(self.common(attribute)?.text()?.to_string())
    }

    /// Roll a bare `1d{sides}`.
    pub fn roll(&mut self, sides: u32) -> GenResult<u32> {
        self.roll_expr(&format!("1d{sides}t"))
    }

    /// Evaluate a dice expression.
    pub fn roll_expr(&mut self, expr: &str) -> GenResult<u32> {
        Ok(roll_expr(expr, self.rng)?)
    }

    /// Flip a fair coin.
    pub fn coin_flip(&mut self) -> bool {
        coin_flip(self.rng)
    }

    /// Pick one item uniformly.
    pub fn pick<'t, T>(&mut self, items: &'t [T]) -> Option<&'t T> {
        pick(items, self.rng)
    }
}
