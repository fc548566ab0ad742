//! Error types for dice handling.

/// Errors that can occur while parsing or rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A dice expression could not be parsed.
    #[error("invalid dice expression '{0}'")]
    InvalidExpression(String),

    /// A dice expression rolls too many dice or could total more than a `u32`.
    #[error("dice expression '{0}' is too large")]
    TooLarge(String),

    /// A die was requested with fewer than two sides.
    #[error("a die needs at least 2 sides, got {0}")]
    InvalidSides(u32),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
