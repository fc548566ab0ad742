//! Dice expressions of the form `NdM`, with an optional trailing `t`.
//!
//! The `t` suffix ("total") is how the table data marks a summed roll.
//! Every roll here is summed, so the suffix is accepted and ignored.
//!
//! Expressions come from table text, so their size is bounded: at most
//! [`MAX_DICE`] dice, and the highest possible total must fit in a `u32`.

use std::str::FromStr;

use rand::rngs::StdRng;

use super::Die;
use super::pool::DicePool;
use super::roll::RollResult;
use crate::error::{DiceError, DiceResult};

/// Most dice a single expression may roll.
pub const MAX_DICE: u32 = 100;

/// A parsed dice expression: roll `count` dice of one type and sum them.
///
/// `count * sides` always fits in a `u32`, so totals cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    count: u32,
    die: Die,
}

impl DiceExpr {
    /// A single die, the shape every table lookup uses.
    pub fn single(die: Die) -> Self {
        Self { count: 1, die }
    }

    /// Parse an expression like `1d10`, `d6`, `2d6t`.
    pub fn parse(input: &str) -> DiceResult<Self> {
        let invalid = || DiceError::InvalidExpression(input.to_string());

        let lowered = input.trim().to_lowercase();
        let body = lowered.strip_suffix('t').unwrap_or(&lowered);
        let (count, sides) = body.split_once('d').ok_or_else(invalid)?;

        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        if count == 0 {
            return Err(invalid());
        }

        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        let die = Die::from_sides(sides).map_err(|_| invalid())?;

        if count > MAX_DICE || count.checked_mul(sides).is_none() {
            return Err(DiceError::TooLarge(input.to_string()));
        }

        Ok(Self { count, die })
    }

    /// Number of dice rolled.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The die rolled.
    pub fn die(&self) -> Die {
        self.die
    }

    /// Highest total this expression can produce.
    pub fn max(&self) -> u32 {
        self.count.saturating_mul(self.die.sides())
    }

    /// The dice pool this expression rolls.
    pub fn pool(&self) -> DicePool {
        DicePool::new().add(self.die, self.count)
    }

    /// Roll the expression, keeping the individual dice.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        self.pool().roll(rng)
    }

    /// Roll the expression and return the sum.
    pub fn roll_total(&self, rng: &mut StdRng) -> u32 {
        self.roll(rng).total()
    }
}

impl FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}

/// Evaluate a dice expression string to its summed result.
pub fn roll_expr(expr: &str, rng: &mut StdRng) -> DiceResult<u32> {
    Ok(DiceExpr::parse(expr)?.roll_total(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn parse_plain_expressions() {
        assert_eq!(DiceExpr::parse("1d10").unwrap(), DiceExpr::single(Die::D10));
        assert_eq!(DiceExpr::parse("d6").unwrap(), DiceExpr::single(Die::D6));
        assert_eq!(
            DiceExpr::parse(" 3D6 ").unwrap(),
            DiceExpr {
                count: 3,
                die: Die::D6
            }
        );
    }

    #[test]
    fn parse_total_suffix() {
        assert_eq!(DiceExpr::parse("1d10t").unwrap(), DiceExpr::single(Die::D10));
        assert_eq!(
            DiceExpr::parse("1d3t").unwrap(),
            DiceExpr::single(Die::Custom(3))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "d", "10", "0d6", "1d1", "1d", "xd6", "1d6+2", "1dt"] {
            assert_eq!(
                DiceExpr::parse(bad),
                Err(DiceError::InvalidExpression(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_rejects_oversized_expressions() {
        for big in ["101d6", "5000000d2000", "2d4294967295"] {
            assert_eq!(
                DiceExpr::parse(big),
                Err(DiceError::TooLarge(big.to_string())),
                "{big:?} should be rejected"
            );
        }
        let most = DiceExpr::parse("100d10").unwrap();
        assert_eq!(most.count(), MAX_DICE);
        assert_eq!(most.max(), 1000);
        let wide = DiceExpr::parse("1d4294967295").unwrap();
        assert_eq!(wide.max(), u32::MAX);
    }

    #[test]
    fn display_round_trips_canonical_form() {
        assert_eq!(DiceExpr::parse("d10t").unwrap().to_string(), "1d10");
        assert_eq!(DiceExpr::parse("2d6").unwrap().to_string(), "2d6");
    }

    #[test]
    fn roll_expr_reports_bad_input() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(roll_expr("lots", &mut rng).is_err());
    }

    proptest! {
        #[test]
        fn rolls_stay_within_bounds(count in 1u32..6, sides in 2u32..30, seed in any::<u64>()) {
            let expr = DiceExpr::parse(&format!("{count}d{sides}t")).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let total = expr.roll_total(&mut rng);
            prop_assert!(total >= count);
            prop_assert!(total <= expr.max());
        }
    }
}
