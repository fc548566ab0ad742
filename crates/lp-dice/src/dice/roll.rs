//! Dice roll results and aggregation.

/// The result of rolling a dice pool: one value per die.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollResult {
    /// Individual die values, in pool order.
    pub values: Vec<u32>,
}

impl RollResult {
    /// Sum of all die values, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.values.iter().fold(0, |sum, v| sum.saturating_add(*v))
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
