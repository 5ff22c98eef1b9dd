//! Renormalization of contracted sets to unit norm.
//!
//! ## Purpose
//!
//! This module rescales a [`ContractedSet`] so that `<phi|phi> = 1`. Two
//! strategies are chosen from the sign pattern of the coefficients:
//!
//! * **Uniform**: all coefficients non-negative; multiply every coefficient by
//!   `1/sqrt(norm)`.
//! * **Projection**: at least one negative coefficient; split into the
//!   non-negative group `P` and the negative group `M`, keep `P` fixed
//!   (`s1 = 1`) and solve for the scale `s2` of `M`.
//!
//! ## Design notes
//!
//! * **Quadratic**: With `A = <P|P>`, `B = <M|M>`, `C = <P|M>` the constraint
//!   `|P + s2*M|^2 = 1` becomes `B*s2^2 + 2C*s2 + (A - 1) = 0`. The root with
//!   the smaller magnitude is taken so that `M` is perturbed as little as
//!   possible.
//! * **Fallback**: When the discriminant is negative (or `B` vanishes) a
//!   golden-section search over `s2` minimizes `|norm - 1|` instead.
//! * **Cleanup**: `A`, `B`, `C` are themselves quadrature results, so the
//!   projected set is passed through one more `1/sqrt(norm)` correction when
//!   it misses unit norm by more than `1e-10`.
//! * **Order**: The projection result is returned in original input order.
//!
//! ## Invariants
//!
//! * A single-sign set reaching the projection branch is returned unchanged
//!   with [`NormalizationPath::SkippedSingleSign`].
//! * Exponents are never modified.
//!
//! ## Non-goals
//!
//! * This module does not choose the quadrature domain.
//! * This module does not format or print coefficients.

// External dependencies
use bigdecimal::BigDecimal;

// Internal dependencies
use crate::algorithms::contracted::ContractedSet;
use crate::math::golden::GoldenSection;
use crate::math::quadratic::{solve, QuadraticSolution};
use crate::math::quadrature::QuadratureDomain;
use crate::primitives::errors::SculptError;
use crate::primitives::precision::PrecisionContext;

// ============================================================================
// Outcome Types
// ============================================================================

/// Which strategy produced a normalized set.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizationPath {
    /// Every coefficient multiplied by `scale`.
    Uniform {
        /// `1/sqrt(norm)` of the input.
        scale: BigDecimal,
    },

    /// Negative group scaled by the smaller-magnitude quadratic root.
    ProjectionRoot {
        /// Scale applied to the negative group.
        s2: BigDecimal,
        /// Discriminant of the projection quadratic.
        discriminant: BigDecimal,
    },

    /// Negative group scaled by the golden-section minimizer of `|norm - 1|`.
    GoldenSection {
        /// Scale applied to the negative group.
        s2: BigDecimal,
        /// `|norm - 1|` at `s2` before cleanup.
        residual: BigDecimal,
        /// Search iterations used.
        iterations: usize,
        /// Discriminant of the projection quadratic, absent when `B` vanished.
        discriminant: Option<BigDecimal>,
    },

    /// Only one sign group present; input returned unchanged.
    SkippedSingleSign {
        /// Number of primitives with `c >= 0`.
        non_negative: usize,
        /// Number of primitives with `c < 0`.
        negative: usize,
    },
}

impl NormalizationPath {
    /// `true` unless normalization was skipped.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::SkippedSingleSign { .. })
    }

    /// Short label for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform { .. } => "uniform rescale",
            Self::ProjectionRoot { .. } => "projection (quadratic root)",
            Self::GoldenSection { .. } => "projection (golden-section fallback)",
            Self::SkippedSingleSign { .. } => "skipped (single sign group)",
        }
    }
}

/// A normalized set with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Rescaled primitives in original input order.
    pub set: ContractedSet,

    /// Strategy taken.
    pub path: NormalizationPath,

    /// Whether the final `1/sqrt(norm)` correction was applied.
    pub cleanup_applied: bool,

    /// Norm of `set`, recomputed over the same domain.
    pub achieved_norm: BigDecimal,
}

// ============================================================================
// Normalizer
// ============================================================================

/// Two-branch normalizer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Normalizer {
    /// Fallback search used when the projection quadratic has no real root.
    pub search: GoldenSection,
}

impl Normalizer {
    pub fn new(search: GoldenSection) -> Self {
        Self { search }
    }

    /// Normalize `set`, picking the branch from its coefficient signs.
    pub fn normalize(
        &self,
        set: &ContractedSet,
        domain: &QuadratureDomain,
        ctx: &PrecisionContext,
    ) -> Result<Normalized, SculptError> {
        let (normalized, path, cleanup_applied) = if set.has_negative_coefficient() {
            self.projection(set, domain, ctx)?
        } else {
            let (normalized, scale) = Self::uniform(set, domain, ctx)?;
            (normalized, NormalizationPath::Uniform { scale }, false)
        };

        let achieved_norm = normalized.norm(domain, ctx)?;
        log::debug!("{}: achieved norm = {achieved_norm}", path.name());

        Ok(Normalized {
            set: normalized,
            path,
            cleanup_applied,
            achieved_norm,
        })
    }

    /// Branch A: scale every coefficient by `1/sqrt(norm)`.
    pub fn uniform(
        set: &ContractedSet,
        domain: &QuadratureDomain,
        ctx: &PrecisionContext,
    ) -> Result<(ContractedSet, BigDecimal), SculptError> {
        let norm = set.norm(domain, ctx)?;
        let scale = ctx.div(&BigDecimal::from(1), &ctx.sqrt(&norm)?)?;
        log::debug!("uniform: norm = {norm}, scale = {scale}");
        Ok((set.scaled(&scale, ctx), scale))
    }

    /// Branch B: sign-partitioned projection with golden-section fallback.
    pub fn projection(
        &self,
        set: &ContractedSet,
        domain: &QuadratureDomain,
        ctx: &PrecisionContext,
    ) -> Result<(ContractedSet, NormalizationPath, bool), SculptError> {
        let (plus, minus) = set.partition_by_sign();
        if plus.is_empty() || minus.is_empty() {
            log::warn!(
                "projection normalization needs both sign groups ({} non-negative, {} negative); set left unchanged",
                plus.len(),
                minus.len()
            );
            let path = NormalizationPath::SkippedSingleSign {
                non_negative: plus.len(),
                negative: minus.len(),
            };
            return Ok((set.clone(), path, false));
        }

        let a = plus.norm(domain, ctx)?;
        let b = minus.norm(domain, ctx)?;
        let c = plus.overlap_with(&minus, domain, ctx)?;
        log::debug!("projection: A = {a}, B = {b}, C = {c}");

        let one = BigDecimal::from(1);
        let linear = ctx.mul(&c, &BigDecimal::from(2));
        let constant = ctx.sub(&a, &one);

        let (s2, path) = match solve(&b, &linear, &constant, ctx)? {
            QuadraticSolution::Real {
                smaller,
                discriminant,
                ..
            } => {
                log::debug!("projection: D = {discriminant}, s2 = {smaller}");
                let path = NormalizationPath::ProjectionRoot {
                    s2: smaller.clone(),
                    discriminant,
                };
                (smaller, path)
            }
            QuadraticSolution::Complex { discriminant } => {
                log::warn!(
                    "projection quadratic has no real root (D = {discriminant}); falling back to golden-section search"
                );
                self.search_s2(&plus, &minus, domain, ctx, Some(discriminant))?
            }
            QuadraticSolution::Degenerate => {
                log::warn!("negative group has vanishing norm; falling back to golden-section search");
                self.search_s2(&plus, &minus, domain, ctx, None)?
            }
        };

        let projected = plus.merged(&minus.scaled(&s2, ctx));
        let (cleaned, cleanup_applied) = projected.renormalized_if_needed(domain, ctx)?;

        Ok((cleaned.in_original_order(), path, cleanup_applied))
    }

    // Golden-section search for s2 minimizing |<P + s2*M|P + s2*M> - 1|.
    fn search_s2(
        &self,
        plus: &ContractedSet,
        minus: &ContractedSet,
        domain: &QuadratureDomain,
        ctx: &PrecisionContext,
        discriminant: Option<BigDecimal>,
    ) -> Result<(BigDecimal, NormalizationPath), SculptError> {
        let one = BigDecimal::from(1);
        let found = self.search.minimize(ctx, |s2| {
            let trial = plus.merged(&minus.scaled(s2, ctx));
            Ok(ctx.sub(&trial.norm(domain, ctx)?, &one).abs())
        })?;

        log::warn!(
            "optimized s2 = {} (|norm - 1| = {}, {} iterations)",
            found.x,
            found.value,
            found.iterations
        );

        let path = NormalizationPath::GoldenSection {
            s2: found.x.clone(),
            residual: found.value,
            iterations: found.iterations,
            discriminant,
        };
        Ok((found.x, path))
    }
}
