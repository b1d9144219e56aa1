/// Validation failure raised by proportion and color constructors/arithmetic.
///
/// Out-of-range percentages are never reported here: clamping constructors
/// absorb them, and `Proportion::percent_or_none` reports them as `None`.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum NumberError {
    /// A numeric operand was NaN or infinite.
    #[error("{what} must be finite, got {value}")]
    InvalidNumber { what: &'static str, value: f64 },

    /// A scalar divisor was exactly zero.
    #[error("{what} must not be zero")]
    DivisionByZero { what: &'static str },
}
