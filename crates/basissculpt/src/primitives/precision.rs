//! Arbitrary-precision arithmetic context.
//!
//! ## Purpose
//!
//! This module provides the [`PrecisionContext`], the single numeric
//! configuration shared by every computation in a run: a significant-digit
//! count and a round-half-up rounding rule. Every decimal operation performed
//! by the crate is routed through a context so that results are rounded
//! consistently.
//!
//! ## Design notes
//!
//! * **Explicit**: The context is a `Copy` value passed into each component;
//!   there is no process-wide instance.
//! * **Immutable**: Once created, a context never changes.
//! * **Guarded**: Division and square root report failures instead of panicking.
//! * **Full width**: Division, square root and pi are evaluated with guard
//!   digits through a `bigdecimal::Context`, so contexts wider than the
//!   `bigdecimal` default of 100 digits keep every digit.
//!
//! ## Key concepts
//!
//! * **Digits**: Number of significant decimal digits kept after each operation.
//! * **Tolerance mapping**: A user tolerance such as `1e-30` maps to 30 digits.
//!
//! ## Invariants
//!
//! * Digit count is always >= 1.
//! * Rounding is always `RoundingMode::HalfUp`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate transcendental functions other than pi;
//!   exponentials are evaluated in `f64` by the Gaussian primitive.

// External dependencies
use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::num::NonZeroU64;

// Internal dependencies
use crate::primitives::errors::SculptError;

/// Leading 39 digits of pi, scaled by 10^38.
const PI_HEAD: u128 = 314_159_265_358_979_323_846_264_338_327_950_288_419;

/// Next 38 digits of pi, scaled by 10^76.
const PI_TAIL: u128 = 71_693_993_751_058_209_749_445_923_078_164_062_862;

/// Significant digits covered by `PI_HEAD + PI_TAIL`.
const PI_TABLE_DIGITS: u64 = 77;

/// Extra digits carried by intermediate results that are rounded again.
const GUARD_DIGITS: u64 = 10;

const DEFAULT_NONZERO_DIGITS: NonZeroU64 = match NonZeroU64::new(PrecisionContext::DEFAULT_DIGITS) {
    Some(digits) => digits,
    None => panic!("default precision must be non-zero"),
};

// ============================================================================
// Precision Context
// ============================================================================

/// Significant-digit budget and rounding rule for decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrecisionContext {
    digits: NonZeroU64,
}

impl Default for PrecisionContext {
    fn default() -> Self {
        Self {
            digits: DEFAULT_NONZERO_DIGITS,
        }
    }
}

impl PrecisionContext {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Digit count used when no tolerance is supplied.
    pub const DEFAULT_DIGITS: u64 = 42;

    /// Rounding rule applied after every operation.
    pub const ROUNDING: RoundingMode = RoundingMode::HalfUp;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a context keeping `digits` significant digits.
    pub fn new(digits: u64) -> Result<Self, SculptError> {
        NonZeroU64::new(digits)
            .map(|digits| Self { digits })
            .ok_or(SculptError::InvalidPrecision(digits))
    }

    /// Derive a context from a user tolerance.
    ///
    /// A tolerance below one keeps as many digits as the tolerance has
    /// fractional digits (`1e-12` keeps 12). A tolerance of one or more is
    /// rounded half-up to an integer and one digit is added.
    pub fn from_tolerance(tolerance: &BigDecimal) -> Result<Self, SculptError> {
        if *tolerance <= BigDecimal::zero() {
            return Err(SculptError::InvalidTolerance(tolerance.to_string()));
        }

        if *tolerance < BigDecimal::one() {
            let (_, scale) = tolerance.as_bigint_and_exponent();
            return Self::new(scale.max(1) as u64);
        }

        let invalid = || SculptError::InvalidTolerance(tolerance.to_string());
        let whole = tolerance
            .to_f64()
            .filter(|v| v.is_finite() && v.round() < u64::MAX as f64)
            .ok_or_else(invalid)?;
        let digits = (whole.round() as u64).checked_add(1).ok_or_else(invalid)?;
        Self::new(digits)
    }

    /// Number of significant digits kept.
    pub fn digits(&self) -> u64 {
        self.digits.get()
    }

    /// The equivalent `bigdecimal` context.
    pub fn context(&self) -> Context {
        Context::new(self.digits, Self::ROUNDING)
    }

    // Same rounding rule with `GUARD_DIGITS` more digits.
    fn guarded(&self) -> Self {
        Self {
            digits: self.digits.saturating_add(GUARD_DIGITS),
        }
    }

    // `a / b` for a non-zero `b`, correct to the context digit count.
    fn quotient(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        let inverse = b.inverse_with_context(&self.guarded().context());
        self.round(&(a * inverse))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Round `value` to the configured number of significant digits.
    #[inline]
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        value.with_precision_round(self.digits, Self::ROUNDING)
    }

    #[inline]
    pub fn add(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a + b))
    }

    #[inline]
    pub fn sub(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a - b))
    }

    #[inline]
    pub fn mul(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a * b))
    }

    /// Divide `a` by `b`, failing on an exactly zero denominator.
    pub fn div(&self, a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal, SculptError> {
        if b.is_zero() {
            return Err(SculptError::InvalidNumericValue(format!(
                "division of {a} by zero"
            )));
        }
        Ok(self.quotient(a, b))
    }

    /// Square root of a non-negative value.
    pub fn sqrt(&self, value: &BigDecimal) -> Result<BigDecimal, SculptError> {
        value
            .sqrt_with_context(&self.guarded().context())
            .map(|root| self.round(&root))
            .ok_or_else(|| SculptError::InvalidNumericValue(format!("sqrt({value})")))
    }

    /// Lift a machine-precision value into the context.
    pub fn from_f64(&self, value: f64) -> Result<BigDecimal, SculptError> {
        BigDecimal::from_f64(value)
            .map(|v| self.round(&v))
            .ok_or_else(|| SculptError::InvalidNumericValue(format!("{value}")))
    }

    /// pi rounded to the context.
    ///
    /// Up to 77 digits come from a table; longer contexts evaluate Machin's
    /// formula `pi = 16 atan(1/5) - 4 atan(1/239)`.
    pub fn pi(&self) -> BigDecimal {
        if self.digits() <= PI_TABLE_DIGITS {
            let head = BigDecimal::new(BigInt::from(PI_HEAD), 38);
            let tail = BigDecimal::new(BigInt::from(PI_TAIL), 76);
            return self.round(&(head + tail));
        }

        let work = self.guarded();
        let machin = work.sub(
            &work.mul(&BigDecimal::from(16), &work.atan_inverse(5)),
            &work.mul(&BigDecimal::from(4), &work.atan_inverse(239)),
        );
        self.round(&machin)
    }

    // atan(1/x) = sum_k (-1)^k / ((2k + 1) x^(2k + 1)), for x >= 2.
    fn atan_inverse(&self, x: u32) -> BigDecimal {
        let cutoff = exp10(-(self.digits() as i64) - 1);
        let x_squared = BigDecimal::from(u64::from(x) * u64::from(x));

        let mut power = self.quotient(&BigDecimal::one(), &BigDecimal::from(x));
        let mut sum = BigDecimal::zero();
        let mut k: u64 = 0;
        while power.abs() > cutoff {
            let term = self.quotient(&power, &BigDecimal::from(2 * k + 1));
            sum = if k % 2 == 0 {
                self.add(&sum, &term)
            } else {
                self.sub(&sum, &term)
            };
            power = self.quotient(&power, &x_squared);
            k += 1;
        }
        sum
    }
}

/// `10^exponent` as an exact decimal.
pub fn exp10(exponent: i64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), -exponent)
}
