//! Quadrature domain selection.
//!
//! ## Purpose
//!
//! This module decides `r_max` and the number of steps used to integrate a
//! given contracted set. Callers plug in a [`DomainHeuristic`]; the analyzer
//! and the normalizer ask it for a domain per set they integrate.
//!
//! ## Design notes
//!
//! * **Tail bound**: The most diffuse primitive (smallest alpha) sets the
//!   radial extent: `phi^2` decays like `exp(-2 * alpha_min * r^2)`, so
//!   `r_max = sqrt(ln(1/tail) / (2 * alpha_min))` truncates below `tail`.
//! * **Resolution**: The tightest primitive (largest alpha) sets the sample
//!   spacing: a fixed number of samples per width `1/sqrt(2 * alpha_max)`.
//! * **Bounded cost**: Step counts are clamped to `[min_steps, max_steps]`.
//!
//! ## Non-goals
//!
//! * This module does not estimate the achieved quadrature error.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

// Internal dependencies
use crate::algorithms::contracted::ContractedSet;
use crate::math::quadrature::QuadratureDomain;
use crate::primitives::errors::SculptError;
use crate::primitives::precision::PrecisionContext;

// ============================================================================
// Heuristic Trait
// ============================================================================

/// Chooses the integration domain for a contracted set.
pub trait DomainHeuristic {
    /// Domain to use when integrating `set`.
    fn suggest(
        &self,
        set: &ContractedSet,
        ctx: &PrecisionContext,
    ) -> Result<QuadratureDomain, SculptError>;
}

/// Always returns the same domain.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDomain(pub QuadratureDomain);

impl DomainHeuristic for FixedDomain {
    fn suggest(
        &self,
        _set: &ContractedSet,
        _ctx: &PrecisionContext,
    ) -> Result<QuadratureDomain, SculptError> {
        Ok(self.0.clone())
    }
}

// ============================================================================
// Tail-Bound Heuristic
// ============================================================================

/// Domain sized from the smallest and largest exponents of a set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailBoundDomain {
    /// Relative size of `phi^2` accepted at `r_max`.
    pub tail: f64,

    /// Samples per characteristic width of the tightest primitive.
    pub samples_per_width: f64,

    /// Lower clamp on the step count.
    pub min_steps: usize,

    /// Upper clamp on the step count.
    pub max_steps: usize,
}

impl Default for TailBoundDomain {
    fn default() -> Self {
        Self {
            tail: 1e-20,
            samples_per_width: 24.0,
            min_steps: 400,
            max_steps: 20_000,
        }
    }
}

impl TailBoundDomain {
    /// `sqrt(ln(1/tail) / (2 * alpha_min))`.
    pub fn suggest_r_max(&self, alpha_min: f64) -> f64 {
        ((1.0 / self.tail).ln() / (2.0 * alpha_min)).sqrt()
    }

    /// `ceil(r_max * sqrt(2 * alpha_max) * samples_per_width)`, clamped.
    pub fn suggest_steps(&self, r_max: f64, alpha_max: f64) -> usize {
        let raw = (r_max * (2.0 * alpha_max).sqrt() * self.samples_per_width).ceil();
        if !raw.is_finite() {
            return self.max_steps;
        }
        (raw as usize).clamp(self.min_steps, self.max_steps)
    }
}

impl DomainHeuristic for TailBoundDomain {
    fn suggest(
        &self,
        set: &ContractedSet,
        ctx: &PrecisionContext,
    ) -> Result<QuadratureDomain, SculptError> {
        let to_f64 = |alpha: Option<&BigDecimal>| {
            alpha
                .ok_or(SculptError::EmptyInput)?
                .to_f64()
                .filter(|a| a.is_finite() && *a > 0.0)
                .ok_or_else(|| {
                    SculptError::InvalidNumericValue("exponent outside f64 range".to_string())
                })
        };
        let alpha_min = to_f64(set.min_alpha())?;
        let alpha_max = to_f64(set.max_alpha())?;

        let r_max = self.suggest_r_max(alpha_min);
        let steps = self.suggest_steps(r_max, alpha_max);
        log::debug!("suggested domain: r_max = {r_max}, steps = {steps}");

        QuadratureDomain::from_origin(ctx.from_f64(r_max)?, steps)
    }
}
