//! calculator - integer/float aware arithmetic with a read-once memory slot
//!
//! # Features
//!
//! - **Arithmetic**: `add`, `subtract`, `multiply`, `divide`, `pow`, `sqrt`
//! - **Exact results**: integer inputs stay integers while the result is whole
//!   (`divide(12, 3)` is `4`, `divide(15, 6)` is `2.5`, `pow(9, 0.5)` is `3`)
//! - **Memory**: one slot, overwritten on store, cleared on read
//! - **Stringify mode**: every arithmetic result returned as text
//!
//! # Example
//!
//! ```rust
//! use calculator::{CalcError, Calculator, Number, Operation};
//!
//! let mut calc = Calculator::new();
//!
//! assert_eq!(calc.add(1, -3), -2_i64);
//! assert_eq!(calc.sqrt(30).unwrap(), 5.48);
//! assert!(calc.sqrt(16).unwrap().as_number().unwrap().is_int());
//! assert_eq!(calc.divide(12, 0).unwrap_err(), CalcError::DivisionByZero);
//!
//! // Variadic entry point with explicit arity check
//! let args = [Number::Int(1), Number::Int(2), Number::Int(3)];
//! assert!(matches!(
//!     calc.apply(Operation::Add, &args),
//!     Err(CalcError::InvalidArgumentCount { expected: 2, actual: 3, .. })
//! ));
//!
//! calc.set_memory(6);
//! assert_eq!(calc.memory(), Some(Number::Int(6)));
//! assert_eq!(calc.memory(), None);
//! ```
//!
//! # Operations
//!
//! | Operation | Arity | Result type |
//! |-----------|-------|-------------|
//! | `add` / `subtract` / `multiply` | 2 | Integer when both operands are integers |
//! | `divide` | 2 | Integer when the remainder is zero, float otherwise |
//! | `pow` | 2 | Integer for whole results of integer bases or roots |
//! | `sqrt` | 1 | Integer for perfect squares, float rounded to 2 places otherwise |

pub mod arithmetic;
pub mod calculator;
pub mod error;
pub mod mode;
pub mod number;
pub mod numfmt;
pub mod output;

// Re-exports for convenience
pub use calculator::{Calculator, Operation};
pub use error::{CalcError, Result};
pub use mode::OutputMode;
pub use number::Number;
pub use output::Output;
