//! Dice rolling for the lifepath generator.
//!
//! Provides polyhedral dice, pools, roll results, and a small dice
//! expression language (`1d10`, `2d6t`) evaluated against a seeded
//! [`rand::rngs::StdRng`]. Also hosts the coin flips and uniform picks
//! the table generators use for their non-table branches.

pub mod dice;
pub mod error;
pub mod random;

pub use dice::{DiceExpr, DicePool, Die, MAX_DICE, RollResult, roll_expr};
pub use error::{DiceError, DiceResult};
pub use random::{coin_flip, pick};
