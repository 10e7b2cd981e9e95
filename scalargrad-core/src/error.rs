use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Every variant is raised synchronously at the offending builder call.
/// Once a graph is built, backward is pure arithmetic and cannot fail.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid operand for {operation}: {value} is not a finite number")]
    InvalidOperand { operation: String, value: f64 },

    #[error("Unsupported operand for {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Value id {index} is out of bounds for a graph of {len} nodes during {operation}")]
    InvalidValueId {
        index: usize,
        len: usize,
        operation: String,
    },
}
