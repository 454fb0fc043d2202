//! Batch mode - one command per line against a single calculator
//!
//! Line format:
//! - `<operation> <args...>`  e.g. `add 1 2`, `sqrt 30`
//! - `store <n>`              memory setter
//! - `recall`                 memory getter (prints `nil` when empty)
//!
//! Blank lines and lines starting with `#` are skipped.

use anyhow::{Context, Result};
use calculator::{CalcError, Calculator, Number, Operation};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::report;

/// One parsed batch line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Apply(Operation, Vec<Number>),
    Store(Number),
    Recall,
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(line: &str) -> Result<Self, CalcError> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args = words
            .map(str::parse::<Number>)
            .collect::<Result<Vec<_>, _>>()?;

        match name.to_lowercase().as_str() {
            "store" => match args.as_slice() {
                [value] => Ok(Command::Store(*value)),
                _ => Err(CalcError::argument_count("store", 1, args.len())),
            },
            "recall" => match args.len() {
                0 => Ok(Command::Recall),
                n => Err(CalcError::argument_count("recall", 0, n)),
            },
            _ => Ok(Command::Apply(name.parse()?, args)),
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Commands that ran successfully
    pub executed: usize,
    /// Failed lines as (1-based line number, error)
    pub failures: Vec<(usize, CalcError)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Execute every command in `input`, writing results to `out`
///
/// A failing line is recorded and processing continues. Only I/O errors
/// abort the run.
pub fn run<R: BufRead, W: Write>(
    calc: &mut Calculator,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match execute(calc, trimmed, json) {
            Ok(rendered) => {
                writeln!(out, "{}", rendered)?;
                summary.executed += 1;
            },
            Err(e) => {
                warn!(line = line_no, error = %e, "batch command failed");
                summary.failures.push((line_no, e));
            },
        }
    }

    debug!(
        executed = summary.executed,
        failed = summary.failures.len(),
        "batch finished"
    );
    Ok(summary)
}

fn execute(calc: &mut Calculator, line: &str, json: bool) -> Result<String, CalcError> {
    let rendered = match line.parse::<Command>()? {
        Command::Apply(op, args) => {
            let output = calc.apply(op, &args)?;
            report::format_result(op.name(), Some(&output), json)
        },
        Command::Store(value) => {
            calc.set_memory(value);
            report::format_result("store", Some(&value), json)
        },
        Command::Recall => {
            let value = calc.memory();
            report::format_result("recall", value.as_ref(), json)
        },
    };
    Ok(rendered)
}
