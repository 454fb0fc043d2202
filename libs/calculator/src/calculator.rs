//! Calculator - arithmetic with a single-slot, read-once memory
//!
//! Provides:
//! - Arithmetic: add, subtract, multiply, divide, pow, sqrt
//! - Memory: `set_memory` overwrites the slot, `memory` takes and clears it
//! - Output mode: native numbers or their textual form
//!
//! The calculator is not synchronized. Memory access needs `&mut self`, so
//! sharing one instance across threads requires the caller's own locking.

use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::arithmetic;
use crate::error::{CalcError, Result};
use crate::mode::OutputMode;
use crate::number::Number;
use crate::output::Output;

/// Arithmetic operations reachable through [`Calculator::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
    Sqrt,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Pow,
        Operation::Sqrt,
    ];

    /// Number of operands the operation takes
    pub fn arity(&self) -> usize {
        match self {
            Operation::Sqrt => 1,
            _ => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Pow => "pow",
            Operation::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" | "sub" => Ok(Operation::Subtract),
            "multiply" | "mul" => Ok(Operation::Multiply),
            "divide" | "div" => Ok(Operation::Divide),
            "pow" | "power" => Ok(Operation::Pow),
            "sqrt" => Ok(Operation::Sqrt),
            _ => Err(CalcError::unknown_operation(s)),
        }
    }
}

/// Calculator with an output mode and one memory slot
///
/// # Example
/// ```
/// use calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(3, 4), 7_i64);
/// assert_eq!(calc.divide(15, 6).unwrap(), 2.5);
///
/// calc.set_memory(6);
/// assert_eq!(calc.memory(), Some(6.into()));
/// assert_eq!(calc.memory(), None);
///
/// let calc = Calculator::stringify();
/// assert_eq!(calc.add(3, 4), "7");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// Fixed at construction
    mode: OutputMode,
    /// Single slot, cleared on every read
    memory: Option<Number>,
}

impl Calculator {
    /// Create a calculator returning native numbers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self { mode, memory: None }
    }

    /// Create a calculator returning every result as text
    pub fn stringify() -> Self {
        Self::with_mode(OutputMode::Stringify)
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Output {
        let (a, b) = (a.into(), b.into());
        let result = arithmetic::add(a, b);
        debug!(%a, %b, %result, "add");
        self.render(result)
    }

    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Output {
        let (a, b) = (a.into(), b.into());
        let result = arithmetic::subtract(a, b);
        debug!(%a, %b, %result, "subtract");
        self.render(result)
    }

    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Output {
        let (a, b) = (a.into(), b.into());
        let result = arithmetic::multiply(a, b);
        debug!(%a, %b, %result, "multiply");
        self.render(result)
    }

    /// Divide `a` by `b`
    ///
    /// Fails with [`CalcError::DivisionByZero`] when `b` is zero.
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> Result<Output> {
        let (a, b) = (a.into(), b.into());
        let result = arithmetic::divide(a, b)
            .inspect_err(|e| debug!(%a, %b, error = %e, "divide rejected"))?;
        debug!(%a, %b, %result, "divide");
        Ok(self.render(result))
    }

    /// Raise `base` to `exponent`
    ///
    /// Negative exponents give a float reciprocal; fractional exponents give
    /// roots, integer-valued when the root is whole.
    pub fn pow(&self, base: impl Into<Number>, exponent: impl Into<Number>) -> Result<Output> {
        let (base, exponent) = (base.into(), exponent.into());
        let result = arithmetic::pow(base, exponent)
            .inspect_err(|e| debug!(%base, %exponent, error = %e, "pow rejected"))?;
        debug!(%base, %exponent, %result, "pow");
        Ok(self.render(result))
    }

    /// Square root of `x`
    ///
    /// Fails with [`CalcError::NegativeRoot`] for negative input.
    pub fn sqrt(&self, x: impl Into<Number>) -> Result<Output> {
        let x = x.into();
        let result =
            arithmetic::sqrt(x).inspect_err(|e| debug!(%x, error = %e, "sqrt rejected"))?;
        debug!(%x, %result, "sqrt");
        Ok(self.render(result))
    }

    /// Run `op` over a runtime-sized argument list
    ///
    /// The argument count must match [`Operation::arity`], otherwise this
    /// fails with [`CalcError::InvalidArgumentCount`] before any arithmetic.
    pub fn apply(&self, op: Operation, args: &[Number]) -> Result<Output> {
        match (op, args) {
            (Operation::Add, [a, b]) => Ok(self.add(*a, *b)),
            (Operation::Subtract, [a, b]) => Ok(self.subtract(*a, *b)),
            (Operation::Multiply, [a, b]) => Ok(self.multiply(*a, *b)),
            (Operation::Divide, [a, b]) => self.divide(*a, *b),
            (Operation::Pow, [base, exponent]) => self.pow(*base, *exponent),
            (Operation::Sqrt, [x]) => self.sqrt(*x),
            _ => {
                debug!(
                    operation = op.name(),
                    expected = op.arity(),
                    actual = args.len(),
                    "argument count rejected"
                );
                Err(CalcError::argument_count(op.name(), op.arity(), args.len()))
            },
        }
    }

    /// Store a value, replacing whatever was there
    pub fn set_memory(&mut self, value: impl Into<Number>) {
        let value = value.into();
        trace!(%value, replaced = self.memory.is_some(), "memory store");
        self.memory = Some(value);
    }

    /// Return the stored value and clear the slot
    pub fn memory(&mut self) -> Option<Number> {
        let value = self.memory.take();
        trace!(?value, "memory recall");
        value
    }

    fn render(&self, result: Number) -> Output {
        Output::render(result, self.mode)
    }
}
