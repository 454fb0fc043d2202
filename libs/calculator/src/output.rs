//! Output - what the calculator hands back to callers
//!
//! Arithmetic always produces a [`Number`]; [`Output::render`] is the one
//! place where the output mode turns it into text.

use serde::Serialize;
use std::fmt;

use crate::mode::OutputMode;
use crate::number::Number;
use crate::numfmt;

/// Result of an arithmetic operation after output-mode processing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Number(Number),
    Text(String),
}

impl Output {
    /// Apply the output mode to a computed number
    pub fn render(number: Number, mode: OutputMode) -> Self {
        if !mode.is_stringify() {
            return Output::Number(number);
        }
        Output::Text(match number {
            Number::Int(i) => numfmt::format_i64(i),
            Number::Float(f) => numfmt::format_f64(f),
        })
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Output::Number(n) => Some(*n),
            Output::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Number(_) => None,
            Output::Text(s) => Some(s),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Output::Text(_))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Number(n) => fmt::Display::fmt(n, f),
            Output::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for Output {
    fn from(number: Number) -> Self {
        Output::Number(number)
    }
}

impl PartialEq<Number> for Output {
    fn eq(&self, other: &Number) -> bool {
        self.as_number().is_some_and(|n| n == *other)
    }
}

impl PartialEq<i64> for Output {
    fn eq(&self, other: &i64) -> bool {
        self.as_number().is_some_and(|n| n == *other)
    }
}

impl PartialEq<f64> for Output {
    fn eq(&self, other: &f64) -> bool {
        self.as_number().is_some_and(|n| n == *other)
    }
}

impl PartialEq<&str> for Output {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_keeps_number() {
        let out = Output::render(Number::Int(7), OutputMode::Default);
        assert_eq!(out, 7_i64);
        assert!(!out.is_text());
    }

    #[test]
    fn test_render_stringify() {
        let out = Output::render(Number::Int(7), OutputMode::Stringify);
        assert_eq!(out, "7");
        assert!(out.is_text());
        assert_eq!(out.as_number(), None);

        let out = Output::render(Number::Float(2.5), OutputMode::Stringify);
        assert_eq!(out.as_text(), Some("2.5"));

        let out = Output::render(Number::Float(f64::INFINITY), OutputMode::Stringify);
        assert_eq!(out.as_text(), Some("inf"));
    }

    #[test]
    fn test_display_matches_text_form() {
        let number = Number::Float(4.0);
        assert_eq!(
            Output::render(number, OutputMode::Default).to_string(),
            Output::render(number, OutputMode::Stringify).to_string()
        );
    }
}
