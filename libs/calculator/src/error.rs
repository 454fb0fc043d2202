//! Error types for calculator

use thiserror::Error;

/// Calculation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid argument count for {operation}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("No real root: {0}")]
    NegativeRoot(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl CalcError {
    pub fn argument_count(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidArgumentCount {
            operation,
            expected,
            actual,
        }
    }

    pub fn negative_root(msg: impl Into<String>) -> Self {
        Self::NegativeRoot(msg.into())
    }

    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::InvalidNumber(text.into())
    }

    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Inputs outside the operation's mathematical domain
    /// (division by zero, real root of a negative number).
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::NegativeRoot(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors() {
        assert!(CalcError::DivisionByZero.is_domain_error());
        assert!(CalcError::negative_root("sqrt(-4)").is_domain_error());
        assert!(!CalcError::argument_count("add", 2, 3).is_domain_error());
        assert!(!CalcError::invalid_number("abc").is_domain_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::argument_count("add", 2, 1).to_string(),
            "Invalid argument count for add: expected 2, got 1"
        );
        assert_eq!(
            CalcError::negative_root("sqrt(-4)").to_string(),
            "No real root: sqrt(-4)"
        );
    }
}
