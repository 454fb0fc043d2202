//! Arithmetic kernel
//!
//! Pure functions over [`Number`]. Integer inputs stay integers while the
//! result is exact and fits in `i64`; everything else is computed in `f64`.
//! Integer overflow promotes to float rather than wrapping.

use crate::error::{CalcError, Result};
use crate::number::{whole_to_i64, Number};

/// Relative tolerance for treating a float-base root as a whole number
const WHOLE_TOLERANCE: f64 = 1e-12;

/// Tolerance when matching a float exponent to a fraction `p / q`
const EXPONENT_TOLERANCE: f64 = 1e-9;

/// Largest root index `q` tried when matching an exponent to `p / q`
const MAX_ROOT_INDEX: u32 = 64;

/// Decimal places kept for inexact square roots
pub const SQRT_DECIMALS: i32 = 2;

/// `a + b`
pub fn add(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map_or_else(|| Number::Float(x as f64 + y as f64), Number::Int),
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

/// `a - b`
pub fn subtract(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_sub(y)
            .map_or_else(|| Number::Float(x as f64 - y as f64), Number::Int),
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

/// `a * b`
pub fn multiply(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_mul(y)
            .map_or_else(|| Number::Float(x as f64 * y as f64), Number::Int),
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

/// `a / b`
///
/// Exact quotients are integers, inexact ones are floats. Exactness comes
/// from the remainder of the operands, not from the rounded quotient.
pub fn divide(a: Number, b: Number) -> Result<Number> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        // checked_rem/checked_div are None only for i64::MIN / -1
        return Ok(match (x.checked_rem(y), x.checked_div(y)) {
            (Some(0), Some(q)) => Number::Int(q),
            _ => Number::Float(x as f64 / y as f64),
        });
    }

    let (x, y) = (a.as_f64(), b.as_f64());
    let quotient = x / y;
    if x % y == 0.0 {
        if let Some(q) = whole_to_i64(quotient) {
            return Ok(Number::Int(q));
        }
    }
    Ok(Number::Float(quotient))
}

/// `base ** exponent`
///
/// - Non-negative integer exponent: repeated multiplication, integer for
///   integer bases.
/// - Negative integer exponent: `1 / base^|exponent|` as a float.
/// - Float exponent: `powf`. Fractional exponents are roots, and a root that
///   lands on a whole number is returned as an integer (`9 ** 0.5 == 3`).
pub fn pow(base: Number, exponent: Number) -> Result<Number> {
    match exponent {
        Number::Int(e) if e >= 0 => Ok(match base {
            Number::Int(b) => int_pow(b, e),
            Number::Float(b) => Number::Float(b.powf(e as f64)),
        }),
        Number::Int(e) => {
            if base.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            let denominator = base.as_f64().powf(e.unsigned_abs() as f64);
            Ok(Number::Float(1.0 / denominator))
        },
        Number::Float(e) => {
            let b = base.as_f64();
            let fractional = e.fract() != 0.0;
            if b == 0.0 && e < 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            if b < 0.0 && fractional {
                return Err(CalcError::negative_root(format!("{} ** {}", base, exponent)));
            }

            let value = b.powf(e);
            if fractional {
                let whole = match base {
                    Number::Int(b) => exact_root(b, e, value),
                    Number::Float(_) => snap_whole(value),
                };
                if let Some(whole) = whole {
                    return Ok(Number::Int(whole));
                }
            }
            Ok(Number::Float(value))
        },
    }
}

/// Integer power with a non-negative exponent
///
/// Bases 0, 1 and -1 stay exact for any exponent; others promote to float
/// once the result leaves `i64`.
fn int_pow(base: i64, exponent: i64) -> Number {
    match base {
        0 => Number::Int(if exponent == 0 { 1 } else { 0 }),
        1 => Number::Int(1),
        -1 => Number::Int(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|e| base.checked_pow(e))
            .map_or_else(
                || Number::Float((base as f64).powf(exponent as f64)),
                Number::Int,
            ),
    }
}

/// Whole root of an integer base, verified in integer arithmetic
///
/// `value` is `base.powf(exponent)`. With `exponent == p / q`, the nearest
/// integer `r` is accepted only when `r^q == base^p` holds exactly.
fn exact_root(base: i64, exponent: f64, value: f64) -> Option<i64> {
    let candidate = whole_to_i64(value.round())?;
    let (p, q) = as_fraction(exponent)?;
    let lhs = candidate.checked_pow(q)?;
    let rhs = base.checked_pow(u32::try_from(p.unsigned_abs()).ok()?)?;

    let exact = if p >= 0 {
        lhs == rhs
    } else {
        lhs.checked_mul(rhs)? == 1
    };
    exact.then_some(candidate)
}

/// `exponent` as `p / q` with `1 <= q <= MAX_ROOT_INDEX`, if it is one
fn as_fraction(exponent: f64) -> Option<(i64, u32)> {
    (1..=MAX_ROOT_INDEX).find_map(|q| {
        let scaled = exponent * f64::from(q);
        let p = scaled.round();
        ((scaled - p).abs() <= EXPONENT_TOLERANCE).then_some((p as i64, q))
    })
}

/// Non-negative square root
///
/// Whole roots are integers; others are floats rounded to
/// [`SQRT_DECIMALS`] places.
pub fn sqrt(x: Number) -> Result<Number> {
    if x.is_negative() {
        return Err(CalcError::negative_root(format!("sqrt({})", x)));
    }

    match x {
        Number::Int(i) => {
            let root = i.isqrt();
            if root * root == i {
                Ok(Number::Int(root))
            } else {
                Ok(Number::Float(round((i as f64).sqrt(), SQRT_DECIMALS)))
            }
        },
        Number::Float(f) => {
            let root = f.sqrt();
            Ok(whole_to_i64(root)
                .map_or_else(|| Number::Float(round(root, SQRT_DECIMALS)), Number::Int))
        },
    }
}

/// Round to specified decimal places
pub fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Whole number within [`WHOLE_TOLERANCE`] of `value`, if any
fn snap_whole(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let nearest = value.round();
    if (value - nearest).abs() <= WHOLE_TOLERANCE * nearest.abs().max(1.0) {
        whole_to_i64(nearest)
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    fn int(i: i64) -> Number {
        Number::Int(i)
    }

    fn float(f: f64) -> Number {
        Number::Float(f)
    }

    #[test]
    fn test_add_type_propagation() {
        assert!(add(int(1), int(2)).is_int());
        assert!(add(int(1), float(2.0)).is_float());
        assert!(add(float(1.0), int(2)).is_float());
        assert_eq!(add(int(1), int(-3)), -2_i64);
        assert_eq!(add(float(1.5), float(2.3)), 3.8);
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        let sum = add(int(i64::MAX), int(1));
        assert!(sum.is_float());
        assert_eq!(sum.as_f64(), i64::MAX as f64 + 1.0);

        assert!(subtract(int(i64::MIN), int(1)).is_float());
        assert!(multiply(int(i64::MAX), int(2)).is_float());
        assert!(pow(int(10), int(30)).unwrap().is_float());
    }

    #[test]
    fn test_subtract_and_multiply() {
        assert_eq!(subtract(int(5), int(-2)), 7_i64);
        assert_eq!(subtract(float(5.4), float(-2.3)), 7.7);
        assert_eq!(multiply(int(3), int(-4)), -12_i64);
        assert!((multiply(float(2.2), float(1.5)).as_f64() - 3.3).abs() < 0.001);
    }

    #[test]
    fn test_divide_exact_is_integer() {
        let q = divide(int(15), int(5)).unwrap();
        assert!(q.is_int());
        assert_eq!(q, 3_i64);

        let q = divide(int(-12), int(3)).unwrap();
        assert_eq!(q.as_i64(), Some(-4));
    }

    #[test]
    fn test_divide_inexact_is_float() {
        let q = divide(int(15), int(6)).unwrap();
        assert!(q.is_float());
        assert_eq!(q, 2.5);
    }

    #[test]
    fn test_divide_floats_by_remainder() {
        // 7.5 % 2.5 == 0 exactly
        let q = divide(float(7.5), float(2.5)).unwrap();
        assert_eq!(q.as_i64(), Some(3));

        // 0.3 % 0.1 != 0 in binary, so no integer even though 0.3 / 0.1 is close to 3
        assert!(divide(float(0.3), float(0.1)).unwrap().is_float());
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(int(12), int(0)), Err(CalcError::DivisionByZero));
        assert_eq!(divide(float(1.0), float(0.0)), Err(CalcError::DivisionByZero));
        assert_eq!(divide(int(1), float(-0.0)), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_min_by_minus_one() {
        let q = divide(int(i64::MIN), int(-1)).unwrap();
        assert!(q.is_float());
    }

    #[test]
    fn test_pow_integer_exponent() {
        let p = pow(int(4), int(3)).unwrap();
        assert!(p.is_int());
        assert_eq!(p, 64_i64);
        assert_eq!(pow(int(7), int(0)).unwrap(), 1_i64);
        assert!(pow(float(2.0), int(3)).unwrap().is_float());
    }

    #[test]
    fn test_pow_negative_exponent() {
        let p = pow(int(3), int(-2)).unwrap();
        assert!(p.is_float());
        assert!((p.as_f64() - 0.1111).abs() < 0.001);
        assert_eq!(pow(int(0), int(-1)), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_pow_fractional_exponent_roots() {
        let p = pow(int(9), float(0.5)).unwrap();
        assert!(p.is_int());
        assert_eq!(p, 3_i64);
        assert_eq!(pow(int(256), float(0.25)).unwrap().as_i64(), Some(4));
        assert_eq!(pow(int(1000), float(1.0 / 3.0)).unwrap().as_i64(), Some(10));

        let p = pow(int(2), float(0.5)).unwrap();
        assert!(p.is_float());
        assert!((p.as_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_pow_fractional_exponent_needs_exact_root() {
        // root of 10^12 + 1 is 1000000.0000005, not a whole number
        let n = int(1_000_000_000_001);
        assert!(pow(n, float(0.5)).unwrap().is_float());
        assert!(sqrt(n).unwrap().is_float());

        assert_eq!(pow(int(16), float(0.75)).unwrap().as_i64(), Some(8));
        assert!(pow(int(4), float(-0.5)).unwrap().is_float());
        assert!(pow(int(10), float(0.5)).unwrap().is_float());
    }

    #[test]
    fn test_pow_fractional_exponent_float_base() {
        assert_eq!(pow(float(9.0), float(0.5)).unwrap().as_i64(), Some(3));
        assert!(pow(float(2.0), float(0.5)).unwrap().is_float());
    }

    #[test]
    fn test_pow_unit_bases_with_huge_exponent() {
        assert_eq!(pow(int(1), int(5_000_000_000)).unwrap().as_i64(), Some(1));
        assert_eq!(pow(int(-1), int(5_000_000_001)).unwrap().as_i64(), Some(-1));
        assert_eq!(pow(int(-1), int(5_000_000_000)).unwrap().as_i64(), Some(1));
        assert_eq!(pow(int(0), int(5_000_000_000)).unwrap().as_i64(), Some(0));
        assert_eq!(pow(int(0), int(0)).unwrap().as_i64(), Some(1));
        assert!(pow(int(2), int(5_000_000_000)).unwrap().is_float());
    }

    #[test]
    fn test_pow_whole_float_exponent_stays_float() {
        assert!(pow(int(2), float(3.0)).unwrap().is_float());
    }

    #[test]
    fn test_pow_domain_errors() {
        assert!(matches!(
            pow(int(-8), float(0.5)),
            Err(CalcError::NegativeRoot(_))
        ));
        assert_eq!(pow(float(0.0), float(-0.5)), Err(CalcError::DivisionByZero));
        // whole float exponent on a negative base is fine
        assert!(pow(int(-2), float(2.0)).is_ok());
    }

    #[test]
    fn test_sqrt() {
        let r = sqrt(int(9)).unwrap();
        assert!(r.is_int());
        assert_eq!(r, 3_i64);
        assert!(sqrt(int(16)).unwrap().is_int());
        assert_eq!(sqrt(int(0)).unwrap(), 0_i64);

        let r = sqrt(int(30)).unwrap();
        assert!(r.is_float());
        assert_eq!(r, 5.48);
    }

    #[test]
    fn test_sqrt_float_input() {
        assert_eq!(sqrt(float(16.0)).unwrap().as_i64(), Some(4));
        assert_eq!(sqrt(float(2.0)).unwrap(), 1.41);
    }

    #[test]
    fn test_sqrt_large_perfect_square() {
        let n = 3_037_000_499_i64;
        assert_eq!(sqrt(int(n * n)).unwrap().as_i64(), Some(n));
        assert!(sqrt(int(n * n - 1)).unwrap().is_float());
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(
            sqrt(int(-4)),
            Err(CalcError::NegativeRoot("sqrt(-4)".to_string()))
        );
    }

    #[test]
    fn test_round() {
        assert_eq!(round(3.14159, 2), 3.14);
        assert_eq!(round(5.477225575051661, 2), 5.48);
        assert_eq!(round(3.14159, 0), 3.0);
    }
}
