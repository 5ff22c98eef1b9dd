//! Radial quadrature for norm and overlap integrals.
//!
//! ## Purpose
//!
//! This module provides the integration interval [`QuadratureDomain`] and the
//! composite rule used for every norm and overlap integral in the crate:
//!
//! ```text
//! I = sum_{i=0..=steps} 4*pi * r_i^2 * g(r_i) * dr,   r_i = r_min + i*dr
//! ```
//!
//! ## Design notes
//!
//! * **Fixed rule**: `steps + 1` samples, each weighted by the full `dr`. This
//!   is neither the left rule nor the trapezoidal rule; it over-counts the two
//!   end samples by `dr/2`. At `r_min = 0` the first sample vanishes (r^2 = 0)
//!   and for a well-chosen `r_max` the last one is negligible, so in practice
//!   it tracks the trapezoidal value.
//! * **Deterministic**: The loop runs exactly `steps + 1` times.
//!
//! ## Invariants
//!
//! * `0 <= r_min < r_max` and `steps >= 1`.
//!
//! ## Non-goals
//!
//! * This module does not choose `r_max` or `steps` (see `algorithms::domain`).
//! * This module does not provide adaptive or error-controlled quadrature.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::fmt::{Display, Formatter};

// Internal dependencies
use crate::primitives::errors::SculptError;
use crate::primitives::precision::PrecisionContext;

// ============================================================================
// Quadrature Domain
// ============================================================================

/// Radial integration interval and resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureDomain {
    r_min: BigDecimal,
    r_max: BigDecimal,
    steps: usize,
}

impl QuadratureDomain {
    /// Create a validated domain.
    pub fn new(r_min: BigDecimal, r_max: BigDecimal, steps: usize) -> Result<Self, SculptError> {
        if steps == 0 {
            return Err(SculptError::InvalidDomain(
                "steps must be at least 1".to_string(),
            ));
        }
        if r_min < BigDecimal::zero() {
            return Err(SculptError::InvalidDomain(format!(
                "r_min = {r_min} is negative"
            )));
        }
        if r_max <= r_min {
            return Err(SculptError::InvalidDomain(format!(
                "r_max = {r_max} must exceed r_min = {r_min}"
            )));
        }
        Ok(Self {
            r_min,
            r_max,
            steps,
        })
    }

    /// Domain starting at the origin.
    pub fn from_origin(r_max: BigDecimal, steps: usize) -> Result<Self, SculptError> {
        Self::new(BigDecimal::zero(), r_max, steps)
    }

    pub fn r_min(&self) -> &BigDecimal {
        &self.r_min
    }

    pub fn r_max(&self) -> &BigDecimal {
        &self.r_max
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Subinterval width `(r_max - r_min) / steps`.
    pub fn step_width(&self, ctx: &PrecisionContext) -> Result<BigDecimal, SculptError> {
        ctx.div(
            &ctx.sub(&self.r_max, &self.r_min),
            &BigDecimal::from(self.steps as u64),
        )
    }
}

impl Display for QuadratureDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] in {} steps", self.r_min, self.r_max, self.steps)
    }
}

// ============================================================================
// Composite Rule
// ============================================================================

/// Integrate `4*pi * r^2 * g(r)` over `domain`.
///
/// `integrand` receives `r^2` for each sample and returns `g(r)`.
pub fn integrate_radial<F>(
    domain: &QuadratureDomain,
    ctx: &PrecisionContext,
    mut integrand: F,
) -> Result<BigDecimal, SculptError>
where
    F: FnMut(&BigDecimal) -> Result<BigDecimal, SculptError>,
{
    let dr = domain.step_width(ctx)?;
    let four_pi = ctx.mul(&BigDecimal::from(4), &ctx.pi());

    let mut sum = BigDecimal::zero();
    for i in 0..=domain.steps {
        let r = ctx.add(&domain.r_min, &ctx.mul(&dr, &BigDecimal::from(i as u64)));
        let r2 = ctx.mul(&r, &r);
        let g = integrand(&r2)?;

        let term = ctx.mul(&ctx.mul(&ctx.mul(&g, &four_pi), &r2), &dr);
        sum = ctx.add(&sum, &term);
    }

    Ok(sum)
}
