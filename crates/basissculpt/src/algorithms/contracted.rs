//! Contracted Gaussian functions and their radial integrals.
//!
//! ## Purpose
//!
//! This module defines [`ContractedSet`], an ordered linear combination of
//! [`Primitive`] terms forming one basis function `phi(r)`. It evaluates
//! `phi`, integrates its norm `<phi|phi>` and the overlap `<phi|chi>` with
//! another set, and provides the value-level transforms used by normalization
//! (scaling, exclusion, sign partitioning, merging).
//!
//! ## Design notes
//!
//! * **Value semantics**: Every transform returns a new set.
//! * **Position tags**: Each primitive carries the index it had in the input
//!   list. Partitioning and merging keep the tags, so the original order is
//!   restored exactly by sorting on them.
//! * **Quadrature**: All integrals go through `math::quadrature`.
//!
//! ## Invariants
//!
//! * `primitives.len() == positions.len()`.
//! * Tags are unique within a set built by this module.
//!
//! ## Non-goals
//!
//! * This module does not choose integration domains.
//! * This module does not compute analytic overlap integrals.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::Zero;

// Internal dependencies
use crate::math::quadrature::{integrate_radial, QuadratureDomain};
use crate::primitives::errors::SculptError;
use crate::primitives::gaussian::Primitive;
use crate::primitives::precision::{exp10, PrecisionContext};

// ============================================================================
// Contracted Set
// ============================================================================

/// Ordered set of primitives forming one contracted function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractedSet {
    primitives: Vec<Primitive>,
    positions: Vec<usize>,
}

impl ContractedSet {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Exponent match window used by [`ContractedSet::primitives_in_exponent_order`].
    pub const EXPONENT_MATCH_EXP10: i64 = -12;

    /// A norm within `1e-10` of one is left alone by the renormalization pass.
    pub const RENORMALIZE_EXP10: i64 = -10;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap primitives, tagging each with its position in `primitives`.
    pub fn new(primitives: Vec<Primitive>) -> Self {
        let positions = (0..primitives.len()).collect();
        Self {
            primitives,
            positions,
        }
    }

    /// Build from `(alpha, c)` pairs.
    pub fn from_pairs(
        pairs: &[(BigDecimal, BigDecimal)],
        ctx: &PrecisionContext,
    ) -> Result<Self, SculptError> {
        let primitives = pairs
            .iter()
            .map(|(alpha, c)| Primitive::new(alpha, c, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(primitives))
    }

    fn tagged(primitives: Vec<Primitive>, positions: Vec<usize>) -> Self {
        debug_assert_eq!(primitives.len(), positions.len());
        Self {
            primitives,
            positions,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Original input position of each primitive, in current order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Exponents in the order the primitives were originally supplied.
    pub fn original_exponent_order(&self) -> Vec<BigDecimal> {
        self.in_original_order()
            .primitives
            .iter()
            .map(|p| p.alpha().clone())
            .collect()
    }

    /// `true` if any coefficient is strictly negative.
    pub fn has_negative_coefficient(&self) -> bool {
        self.primitives
            .iter()
            .any(|p| *p.coefficient() < BigDecimal::zero())
    }

    /// Smallest exponent (most diffuse primitive).
    pub fn min_alpha(&self) -> Option<&BigDecimal> {
        self.primitives.iter().map(Primitive::alpha).min()
    }

    /// Largest exponent (tightest primitive).
    pub fn max_alpha(&self) -> Option<&BigDecimal> {
        self.primitives.iter().map(Primitive::alpha).max()
    }

    /// `(alpha, c)` pairs in current order.
    pub fn to_pairs(&self) -> Vec<(BigDecimal, BigDecimal)> {
        self.primitives
            .iter()
            .map(|p| (p.alpha().clone(), p.coefficient().clone()))
            .collect()
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// `phi(r) = sum_i c_i N_i exp(-alpha_i r^2)`.
    pub fn phi(&self, r: &BigDecimal, ctx: &PrecisionContext) -> Result<BigDecimal, SculptError> {
        self.phi_at_r2(&ctx.mul(r, r), ctx)
    }

    fn phi_at_r2(&self, r2: &BigDecimal, ctx: &PrecisionContext) -> Result<BigDecimal, SculptError> {
        self.primitives
            .iter()
            .try_fold(BigDecimal::zero(), |acc, p| {
                Ok(ctx.add(&acc, &p.value_at_r2(r2, ctx)?))
            })
    }

    /// `integral 4*pi r^2 phi(r)^2 dr` over `domain`.
    pub fn norm(
        &self,
        domain: &QuadratureDomain,
        ctx: &PrecisionContext,
    ) -> Result<BigDecimal, SculptError> {
        integrate_radial(domain, ctx, |r2| {
            let value = self.phi_at_r2(r2, ctx)?;
            Ok(ctx.mul(&value, &value))
        })
    }

    /// `integral 4*pi r^2 phi(r) chi(r) dr` over `domain`.
    pub fn overlap_with(
        &self,
        other: &ContractedSet,
        domain: &QuadratureDomain,
        ctx: &PrecisionContext,
    ) -> Result<BigDecimal, SculptError> {
        integrate_radial(domain, ctx, |r2| {
            let mine = self.phi_at_r2(r2, ctx)?;
            let theirs = other.phi_at_r2(r2, ctx)?;
            Ok(ctx.mul(&mine, &theirs))
        })
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Multiply every coefficient by `factor`.
    pub fn scaled(&self, factor: &BigDecimal, ctx: &PrecisionContext) -> Self {
        Self::tagged(
            self.primitives
                .iter()
                .map(|p| p.scaled(factor, ctx))
                .collect(),
            self.positions.clone(),
        )
    }

    /// The set with primitive `index` removed.
    pub fn excluding(&self, index: usize) -> Result<Self, SculptError> {
        if index >= self.len() {
            return Err(SculptError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        let (primitives, positions) = self
            .primitives
            .iter()
            .zip(&self.positions)
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, (p, &pos))| (p.clone(), pos))
            .unzip();
        Ok(Self::tagged(primitives, positions))
    }

    /// Split into `(c >= 0, c < 0)` groups, keeping relative order and tags.
    pub fn partition_by_sign(&self) -> (Self, Self) {
        let zero = BigDecimal::zero();
        let mut plus = Self::default();
        let mut minus = Self::default();

        for (p, &pos) in self.primitives.iter().zip(&self.positions) {
            let group = if *p.coefficient() >= zero {
                &mut plus
            } else {
                &mut minus
            };
            group.primitives.push(p.clone());
            group.positions.push(pos);
        }

        (plus, minus)
    }

    /// Concatenate two sets, keeping tags.
    pub fn merged(&self, other: &ContractedSet) -> Self {
        let mut out = self.clone();
        out.primitives.extend(other.primitives.iter().cloned());
        out.positions.extend(other.positions.iter().copied());
        out
    }

    /// Reorder by original position tag.
    pub fn in_original_order(&self) -> Self {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&i| self.positions[i]);

        Self::tagged(
            order.iter().map(|&i| self.primitives[i].clone()).collect(),
            order.iter().map(|&i| self.positions[i]).collect(),
        )
    }

    /// Reorder to follow `alpha_order`, matching exponents within `1e-12`.
    ///
    /// Each primitive is claimed at most once. Exponents without a match are
    /// skipped, so the result can be shorter than `alpha_order`. Prefer
    /// [`ContractedSet::in_original_order`] when the set came from this crate.
    pub fn primitives_in_exponent_order(
        &self,
        alpha_order: &[BigDecimal],
        ctx: &PrecisionContext,
    ) -> Vec<Primitive> {
        let window = exp10(Self::EXPONENT_MATCH_EXP10);
        let mut claimed = vec![false; self.len()];
        let mut ordered = Vec::with_capacity(alpha_order.len());

        for alpha in alpha_order {
            let hit = self.primitives.iter().enumerate().find(|(i, p)| {
                !claimed[*i] && ctx.sub(p.alpha(), alpha).abs() < window
            });
            if let Some((i, p)) = hit {
                claimed[i] = true;
                ordered.push(p.clone());
            }
        }

        ordered
    }

    /// Rescale by `1/sqrt(norm)` unless the norm is already within `1e-10` of one.
    ///
    /// Returns the (possibly unchanged) set and whether a rescale was applied.
    pub fn renormalized_if_needed(
        &self,
        domain: &QuadratureDomain,
        ctx: &PrecisionContext,
    ) -> Result<(Self, bool), SculptError> {
        let norm = self.norm(domain, ctx)?;
        let deviation = ctx.sub(&norm, &BigDecimal::from(1)).abs();
        if deviation <= exp10(Self::RENORMALIZE_EXP10) {
            return Ok((self.clone(), false));
        }

        let scale = ctx.div(&BigDecimal::from(1), &ctx.sqrt(&norm)?)?;
        log::debug!("renormalizing: norm = {norm}, scale = {scale}");
        Ok((self.scaled(&scale, ctx), true))
    }
}
