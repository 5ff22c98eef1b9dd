//! Tests for the precision context and Gaussian primitives.
//!
//! These tests verify:
//! - Tolerance-to-digits mapping and default precision
//! - Half-up rounding and guarded division/square root
//! - Normalization constants and primitive evaluation
//!
//! ## Test Organization
//!
//! 1. **Precision Context** - Construction, rounding, guarded operations
//! 2. **Primitive** - Normalization constant, value, scaling

use approx::assert_relative_eq;
use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use std::f64::consts::PI;
use std::str::FromStr;

use basissculpt::internals::primitives::errors::SculptError;
use basissculpt::internals::primitives::gaussian::Primitive;
use basissculpt::internals::primitives::precision::{exp10, PrecisionContext};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn f(x: &BigDecimal) -> f64 {
    x.to_f64().unwrap()
}

// ============================================================================
// Precision Context Tests
// ============================================================================

/// Test the default digit count.
#[test]
fn test_default_precision() {
    assert_eq!(PrecisionContext::default().digits(), 42);
    assert_eq!(PrecisionContext::DEFAULT_DIGITS, 42);
}

/// Test that zero digits is rejected.
#[test]
fn test_zero_precision_rejected() {
    assert_eq!(
        PrecisionContext::new(0),
        Err(SculptError::InvalidPrecision(0))
    );
}

/// Test tolerance below one maps to its fractional digit count.
#[test]
fn test_tolerance_below_one() {
    let ctx = PrecisionContext::from_tolerance(&dec("1e-12")).unwrap();
    assert_eq!(ctx.digits(), 12);

    let ctx = PrecisionContext::from_tolerance(&dec("0.00001")).unwrap();
    assert_eq!(ctx.digits(), 5);
}

/// Test tolerance of one or more is rounded half-up and incremented.
#[test]
fn test_tolerance_at_least_one() {
    let ctx = PrecisionContext::from_tolerance(&dec("30")).unwrap();
    assert_eq!(ctx.digits(), 31);

    let ctx = PrecisionContext::from_tolerance(&dec("2.5")).unwrap();
    assert_eq!(ctx.digits(), 4);
}

/// Test that a tolerance too large for a digit count is rejected.
#[test]
fn test_huge_tolerance_rejected() {
    assert!(matches!(
        PrecisionContext::from_tolerance(&dec("1e20")),
        Err(SculptError::InvalidTolerance(_))
    ));
    assert!(matches!(
        PrecisionContext::from_tolerance(&dec("1e400")),
        Err(SculptError::InvalidTolerance(_))
    ));
}

/// Test non-positive tolerances are rejected.
#[test]
fn test_non_positive_tolerance_rejected() {
    assert!(matches!(
        PrecisionContext::from_tolerance(&dec("0")),
        Err(SculptError::InvalidTolerance(_))
    ));
    assert!(matches!(
        PrecisionContext::from_tolerance(&dec("-1e-5")),
        Err(SculptError::InvalidTolerance(_))
    ));
}

/// Test half-up rounding to significant digits.
#[test]
fn test_round_half_up() {
    let ctx = PrecisionContext::new(3).unwrap();
    assert_eq!(ctx.round(&dec("1.2345")), dec("1.23"));
    assert_eq!(ctx.round(&dec("1.235")), dec("1.24"));
    assert_eq!(ctx.round(&dec("-1.235")), dec("-1.24"));
    assert_eq!(ctx.mul(&dec("1.5"), &dec("1.5")), dec("2.25"));
    assert_eq!(ctx.add(&dec("100"), &dec("0.4")), dec("100"));
}

/// Test guarded division and square root.
#[test]
fn test_guarded_operations() {
    let ctx = PrecisionContext::new(20).unwrap();

    assert!(matches!(
        ctx.div(&dec("1"), &BigDecimal::zero()),
        Err(SculptError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        ctx.sqrt(&dec("-4")),
        Err(SculptError::InvalidNumericValue(_))
    ));

    assert_relative_eq!(f(&ctx.sqrt(&dec("2.25")).unwrap()), 1.5, epsilon = 1e-15);
    assert_relative_eq!(f(&ctx.div(&dec("1"), &dec("3")).unwrap()), 1.0 / 3.0, epsilon = 1e-15);
}

/// Test that contexts wider than 100 digits keep every digit.
#[test]
fn test_wide_context_division_and_sqrt() {
    let ctx = PrecisionContext::new(150).unwrap();

    let third = ctx.div(&dec("1"), &dec("3")).unwrap();
    let expected = dec(&format!("0.{}", "3".repeat(150)));
    assert_eq!(third, expected);

    let root = ctx.sqrt(&dec("2")).unwrap();
    let error = (&root * &root - dec("2")).abs();
    assert!(error < exp10(-145));

    // Tolerance-derived contexts get the same width
    let ctx = PrecisionContext::from_tolerance(&dec("1e-150")).unwrap();
    assert_eq!(ctx.digits(), 150);
    assert_eq!(ctx.div(&dec("1"), &dec("3")).unwrap(), expected);
}

/// Test pi beyond the tabulated digits.
#[test]
fn test_wide_context_pi() {
    let ctx = PrecisionContext::new(100).unwrap();
    let expected = dec(concat!(
        "3.14159265358979323846264338327950288419716939937510",
        "58209749445923078164062862089986280348253421170680"
    ));
    assert_eq!(ctx.pi(), expected);

    // Agrees with the table where both apply
    let wide = PrecisionContext::new(77).unwrap();
    assert_eq!(wide.round(&ctx.pi()), wide.pi());
}

/// Test pi at the configured precision.
#[test]
fn test_pi() {
    let ctx = PrecisionContext::new(50).unwrap();
    assert_relative_eq!(f(&ctx.pi()), PI, epsilon = 1e-15);

    let short = PrecisionContext::new(5).unwrap();
    assert_eq!(short.pi(), dec("3.1416"));
}

/// Test f64 lifting rejects non-finite values.
#[test]
fn test_from_f64() {
    let ctx = PrecisionContext::new(10).unwrap();
    assert_eq!(ctx.from_f64(0.0).unwrap(), BigDecimal::zero());
    assert_eq!(ctx.from_f64(0.25).unwrap(), dec("0.25"));
    assert!(ctx.from_f64(f64::NAN).is_err());
}

// ============================================================================
// Primitive Tests
// ============================================================================

/// Test N = (2 alpha / pi)^(3/4).
#[test]
fn test_normalization_constant() {
    let ctx = PrecisionContext::new(30).unwrap();

    for alpha in ["0.01", "1", "13.5", "10000"] {
        let a = dec(alpha);
        let n = Primitive::normalization_constant(&a, &ctx).unwrap();
        let expected = (2.0 * f(&a) / PI).powf(0.75);
        assert_relative_eq!(f(&n), expected, max_relative = 1e-13);
    }
}

/// Test N = 1 when alpha = pi / 2.
#[test]
fn test_normalization_constant_unit() {
    let ctx = PrecisionContext::new(30).unwrap();
    let alpha = ctx.div(&ctx.pi(), &dec("2")).unwrap();
    let n = Primitive::normalization_constant(&alpha, &ctx).unwrap();
    assert_relative_eq!(f(&n), 1.0, epsilon = 1e-20);
}

/// Test primitive value at the origin and away from it.
#[test]
fn test_primitive_value() {
    let ctx = PrecisionContext::new(30).unwrap();
    let p = Primitive::new(&dec("0.8"), &dec("-0.35"), &ctx).unwrap();
    let n = (1.6 / PI).powf(0.75);

    // r = 0: c * N
    let v0 = p.value(&BigDecimal::zero(), &ctx).unwrap();
    assert_relative_eq!(f(&v0), -0.35 * n, max_relative = 1e-14);
    assert_eq!(v0, *p.amplitude());

    // r = 1.5: c * N * exp(-0.8 * 2.25)
    let v = p.value(&dec("1.5"), &ctx).unwrap();
    assert_relative_eq!(f(&v), -0.35 * n * (-1.8f64).exp(), max_relative = 1e-14);

    // value_at_r2 agrees with value
    let v2 = p.value_at_r2(&dec("2.25"), &ctx).unwrap();
    assert_eq!(v, v2);
}

/// Test that the decay factor underflows to exactly zero far out.
#[test]
fn test_primitive_value_underflow() {
    let ctx = PrecisionContext::new(30).unwrap();
    let p = Primitive::new(&dec("100"), &dec("1"), &ctx).unwrap();
    let v = p.value(&dec("10"), &ctx).unwrap();
    assert!(v.is_zero());
}

/// Test scaling keeps alpha and N and multiplies c.
#[test]
fn test_primitive_scaled() {
    let ctx = PrecisionContext::new(30).unwrap();
    let p = Primitive::new(&dec("2.5"), &dec("0.4"), &ctx).unwrap();
    let s = p.scaled(&dec("-1.5"), &ctx);

    assert_eq!(s.alpha(), p.alpha());
    assert_eq!(s.norm_constant(), p.norm_constant());
    assert_eq!(*s.coefficient(), dec("-0.6"));
    assert_eq!(*s.amplitude(), ctx.mul(&dec("-0.6"), p.norm_constant()));

    // Original untouched
    assert_eq!(*p.coefficient(), dec("0.4"));
}
