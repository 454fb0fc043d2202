//! Number formatting utilities
//!
//! Uses `itoa` for integers and `ryu` for floats. Both format into a stack
//! buffer, so the only allocation is the returned `String`.
//!
//! Float output keeps the shortest representation that round-trips and
//! never drops the fractional marker: `7.0` stays `7.0`, unlike
//! `f64::to_string()` which prints `7`.

use std::fmt;

/// Format an integer
#[inline]
pub fn format_i64(n: i64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(n).to_owned()
}

/// Format a float
///
/// Non-finite values render as `NaN`, `inf` and `-inf`.
#[inline]
pub fn format_f64(n: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format(n).to_owned()
}

/// Write an integer into a formatter without an intermediate `String`
#[inline]
pub(crate) fn write_i64(f: &mut fmt::Formatter<'_>, n: i64) -> fmt::Result {
    let mut buffer = itoa::Buffer::new();
    f.write_str(buffer.format(n))
}

/// Write a float into a formatter without an intermediate `String`
#[inline]
pub(crate) fn write_f64(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let mut buffer = ryu::Buffer::new();
    f.write_str(buffer.format(n))
}
