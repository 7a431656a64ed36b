//! Error types for the incentive math library.

use thiserror::Error;

/// Errors that can occur during incentive calculations.
///
/// Most degenerate inputs (zero supply, unknown reward price, missing
/// reserves) resolve to a zero result instead of an error. The variants here
/// cover malformed state only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Explicit division by a zero divisor
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    /// Intermediate value exceeded the integer width
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Result does not fit a 96-bit decimal mantissa at any scale
    #[error("Value {value} is out of decimal range")]
    DecimalOutOfRange { value: String },
}

/// Result type alias for incentive math operations.
pub type Result<T> = std::result::Result<T, MathError>;
