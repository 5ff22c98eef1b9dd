//! Real roots of `a*x^2 + b*x + c = 0`.
//!
//! Used by projection normalization to solve for the scale of the negative
//! coefficient group. Only the root closest to zero is of interest.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::SculptError;
use crate::primitives::precision::PrecisionContext;

/// Outcome of solving a quadratic.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadraticSolution {
    /// Two real roots (possibly equal); `smaller` has the smaller magnitude.
    Real {
        smaller: BigDecimal,
        larger: BigDecimal,
        discriminant: BigDecimal,
    },

    /// `b^2 - 4ac < 0`.
    Complex { discriminant: BigDecimal },

    /// Leading coefficient is zero; the quadratic formula does not apply.
    Degenerate,
}

/// `b^2 - 4ac`.
pub fn discriminant(
    a: &BigDecimal,
    b: &BigDecimal,
    c: &BigDecimal,
    ctx: &PrecisionContext,
) -> BigDecimal {
    let four_ac = ctx.mul(&ctx.mul(a, c), &BigDecimal::from(4));
    ctx.sub(&ctx.mul(b, b), &four_ac)
}

/// Solve `a*x^2 + b*x + c = 0` and order the real roots by magnitude.
pub fn solve(
    a: &BigDecimal,
    b: &BigDecimal,
    c: &BigDecimal,
    ctx: &PrecisionContext,
) -> Result<QuadraticSolution, SculptError> {
    if a.is_zero() {
        return Ok(QuadraticSolution::Degenerate);
    }

    let discriminant = discriminant(a, b, c, ctx);
    if discriminant < BigDecimal::zero() {
        return Ok(QuadraticSolution::Complex { discriminant });
    }

    let sqrt_d = ctx.sqrt(&discriminant)?;
    let two_a = ctx.mul(a, &BigDecimal::from(2));
    let neg_b = -b.clone();

    let root_plus = ctx.div(&ctx.add(&neg_b, &sqrt_d), &two_a)?;
    let root_minus = ctx.div(&ctx.sub(&neg_b, &sqrt_d), &two_a)?;

    // Ties go to the minus root.
    let (smaller, larger) = if root_plus.abs() < root_minus.abs() {
        (root_plus, root_minus)
    } else {
        (root_minus, root_plus)
    };

    Ok(QuadraticSolution::Real {
        smaller,
        larger,
        discriminant,
    })
}
