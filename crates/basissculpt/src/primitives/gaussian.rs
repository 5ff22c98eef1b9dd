//! Primitive Gaussian terms.
//!
//! ## Purpose
//!
//! This module defines [`Primitive`], a single radial Gaussian
//! `c * N * exp(-alpha * r^2)` with its normalization constant
//! `N = (2 * alpha / pi)^(3/4)`.
//!
//! ## Design notes
//!
//! * **Mixed precision**: `c` and `N` are held at full context precision, but
//!   the decaying factor `exp(-alpha * r^2)` is evaluated in `f64`. Results
//!   depend on this split; do not move the exponential to decimal arithmetic.
//! * **Immutable**: Rescaling returns a new primitive; `alpha` and `N` are kept.
//!
//! ## Invariants
//!
//! * `alpha > 0` (checked by the validator before a primitive is built).
//! * `N` is a pure function of `alpha`.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

// Internal dependencies
use crate::primitives::errors::SculptError;
use crate::primitives::precision::PrecisionContext;

/// One Gaussian term of a contracted function.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    alpha: BigDecimal,
    coefficient: BigDecimal,
    norm_constant: BigDecimal,
    amplitude: BigDecimal,
}

impl Primitive {
    /// Build a primitive, deriving its normalization constant.
    pub fn new(
        alpha: &BigDecimal,
        coefficient: &BigDecimal,
        ctx: &PrecisionContext,
    ) -> Result<Self, SculptError> {
        let alpha = ctx.round(alpha);
        let coefficient = ctx.round(coefficient);
        let norm_constant = Self::normalization_constant(&alpha, ctx)?;
        let amplitude = ctx.mul(&coefficient, &norm_constant);

        Ok(Self {
            alpha,
            coefficient,
            norm_constant,
            amplitude,
        })
    }

    /// `(2 * alpha / pi)^(3/4)`, computed as `sqrt(x * sqrt(x))`.
    pub fn normalization_constant(
        alpha: &BigDecimal,
        ctx: &PrecisionContext,
    ) -> Result<BigDecimal, SculptError> {
        let ratio = ctx.div(&ctx.mul(&BigDecimal::from(2), alpha), &ctx.pi())?;
        let root = ctx.sqrt(&ratio)?;
        ctx.sqrt(&ctx.mul(&ratio, &root))
    }

    pub fn alpha(&self) -> &BigDecimal {
        &self.alpha
    }

    pub fn coefficient(&self) -> &BigDecimal {
        &self.coefficient
    }

    pub fn norm_constant(&self) -> &BigDecimal {
        &self.norm_constant
    }

    /// `c * N`, the peak amplitude of the term.
    pub fn amplitude(&self) -> &BigDecimal {
        &self.amplitude
    }

    /// Value at radius `r`: `c * N * exp(-alpha * r^2)`.
    pub fn value(&self, r: &BigDecimal, ctx: &PrecisionContext) -> Result<BigDecimal, SculptError> {
        self.value_at_r2(&ctx.mul(r, r), ctx)
    }

    /// Same as [`Primitive::value`] with `r^2` already computed.
    ///
    /// The exponential is taken in `f64`; an argument that underflows
    /// contributes exactly zero.
    pub fn value_at_r2(
        &self,
        r2: &BigDecimal,
        ctx: &PrecisionContext,
    ) -> Result<BigDecimal, SculptError> {
        let exponent = -ctx.mul(&self.alpha, r2);
        let decay = exponent
            .to_f64()
            .map(f64::exp)
            .ok_or_else(|| SculptError::InvalidNumericValue(format!("exp({exponent})")))?;
        Ok(ctx.mul(&self.amplitude, &ctx.from_f64(decay)?))
    }

    /// Copy of this primitive with `c` multiplied by `factor`.
    pub fn scaled(&self, factor: &BigDecimal, ctx: &PrecisionContext) -> Self {
        let coefficient = ctx.mul(&self.coefficient, factor);
        let amplitude = ctx.mul(&coefficient, &self.norm_constant);
        Self {
            alpha: self.alpha.clone(),
            coefficient,
            norm_constant: self.norm_constant.clone(),
            amplitude,
        }
    }
}
