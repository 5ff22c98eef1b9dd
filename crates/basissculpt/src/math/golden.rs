//! Golden-section search for one-dimensional minimization.
//!
//! ## Purpose
//!
//! This module provides a derivative-free minimizer over a closed bracket.
//! It is the fallback used by projection normalization when the quadratic
//! for the negative-group scale has no real root.
//!
//! ## Design notes
//!
//! * **Bracket shrinking**: Each iteration keeps the sub-bracket holding the
//!   lower of the two interior samples; one new sample is evaluated per step.
//! * **Best-so-far**: The returned point is the lowest objective value seen,
//!   not merely the last interior point.
//!
//! ## Invariants
//!
//! * Terminates after at most `max_iterations` shrink steps.
//! * Stops early once the bracket width falls below `tolerance`.
//!
//! ## Non-goals
//!
//! * This module does not verify unimodality of the objective.

// External dependencies
use bigdecimal::BigDecimal;

// Internal dependencies
use crate::primitives::errors::SculptError;
use crate::primitives::precision::{exp10, PrecisionContext};

// ============================================================================
// Search Configuration
// ============================================================================

/// Bracket and stopping rule for a golden-section search.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenSection {
    /// Left end of the bracket.
    pub lower: BigDecimal,

    /// Right end of the bracket.
    pub upper: BigDecimal,

    /// Stop once `upper - lower` drops below this width.
    pub tolerance: BigDecimal,

    /// Hard cap on shrink steps.
    pub max_iterations: usize,
}

impl Default for GoldenSection {
    /// `[-10, 10]`, width tolerance `1e-6`, at most 100 iterations.
    fn default() -> Self {
        Self {
            lower: BigDecimal::from(-10),
            upper: BigDecimal::from(10),
            tolerance: exp10(-6),
            max_iterations: 100,
        }
    }
}

/// Result of a golden-section search.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenMinimum {
    /// Abscissa of the lowest sample.
    pub x: BigDecimal,

    /// Objective value at `x`.
    pub value: BigDecimal,

    /// Shrink steps performed.
    pub iterations: usize,
}

impl GoldenSection {
    /// `(sqrt(5) - 1) / 2`.
    fn inverse_phi(ctx: &PrecisionContext) -> Result<BigDecimal, SculptError> {
        let sqrt5 = ctx.sqrt(&BigDecimal::from(5))?;
        ctx.div(
            &ctx.sub(&sqrt5, &BigDecimal::from(1)),
            &BigDecimal::from(2),
        )
    }

    /// Minimize `objective` over the bracket.
    pub fn minimize<F>(
        &self,
        ctx: &PrecisionContext,
        mut objective: F,
    ) -> Result<GoldenMinimum, SculptError>
    where
        F: FnMut(&BigDecimal) -> Result<BigDecimal, SculptError>,
    {
        let inv_phi = Self::inverse_phi(ctx)?;
        let mut left = self.lower.clone();
        let mut right = self.upper.clone();

        let interior = |left: &BigDecimal, right: &BigDecimal| {
            let span = ctx.mul(&inv_phi, &ctx.sub(right, left));
            (ctx.sub(right, &span), ctx.add(left, &span))
        };

        let (mut x1, mut x2) = interior(&left, &right);
        let mut f1 = objective(&x1)?;
        let mut f2 = objective(&x2)?;

        let mut best = if f1 < f2 {
            (x1.clone(), f1.clone())
        } else {
            (x2.clone(), f2.clone())
        };

        let mut iterations = 0;
        while iterations < self.max_iterations {
            iterations += 1;

            if f1 < f2 {
                right = x2;
                x2 = x1;
                f2 = f1;
                x1 = interior(&left, &right).0;
                f1 = objective(&x1)?;
                if f1 < best.1 {
                    best = (x1.clone(), f1.clone());
                }
            } else {
                left = x1;
                x1 = x2;
                f1 = f2;
                x2 = interior(&left, &right).1;
                f2 = objective(&x2)?;
                if f2 < best.1 {
                    best = (x2.clone(), f2.clone());
                }
            }

            if ctx.sub(&right, &left).abs() < self.tolerance {
                break;
            }
        }

        Ok(GoldenMinimum {
            x: best.0,
            value: best.1,
            iterations,
        })
    }
}
