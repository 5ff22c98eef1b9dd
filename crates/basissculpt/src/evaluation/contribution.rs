//! Leave-one-out contribution analysis.
//!
//! ## Purpose
//!
//! This module ranks the primitives of a contracted set by how much they
//! matter. For each primitive `i` it integrates the norm of the set with `i`
//! removed and reports two percentages:
//!
//! * **Loss**: `(full - partial_i) / full * 100`, the relative norm lost by
//!   dropping `i`.
//! * **Contribution**: `|c_i N_i| / sum_j |c_j N_j| * 100`, the share of the
//!   total peak amplitude carried by `i`.
//!
//! ## Design notes
//!
//! * **Two metrics**: Contribution ignores interference between primitives
//!   and is a cheap ranking proxy. Loss is the integrated quantity. They are
//!   reported side by side and are not expected to agree.
//! * **Per-set domains**: Every reduced set gets its own domain from the
//!   heuristic, since dropping the most diffuse primitive shrinks the extent.
//! * **Structured output**: Results are returned as records; formatting lives
//!   in `engine::output`.
//!
//! ## Invariants
//!
//! * Loss is 0 when the full norm is below `1e-12`.
//! * Contribution is 0 when the total amplitude is zero.
//! * Sets with at most one primitive perform no quadrature.
//! * The partial norm of an emptied set is zero.
//!
//! ## Non-goals
//!
//! * This module does not remove primitives from the basis.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::Zero;

// Internal dependencies
use crate::algorithms::contracted::ContractedSet;
use crate::algorithms::domain::DomainHeuristic;
use crate::primitives::errors::SculptError;
use crate::primitives::precision::{exp10, PrecisionContext};

// ============================================================================
// Report Types
// ============================================================================

/// Leave-one-out result for a single primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionRecord {
    /// One-based position in the set.
    pub index: usize,

    /// Exponent of the removed primitive.
    pub alpha: BigDecimal,

    /// Norm of the set without this primitive.
    pub partial_norm: BigDecimal,

    /// Percentage of the full norm lost by removing it.
    pub loss_percent: BigDecimal,

    /// Amplitude share of this primitive, in percent.
    pub contribution_percent: BigDecimal,
}

/// Outcome of a full leave-one-out pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ContributionReport {
    /// The set has zero or one primitive; nothing can be removed.
    NothingToReduce {
        /// Number of primitives in the set.
        size: usize,
    },

    /// Full norm and one record per primitive, in set order.
    Analysis {
        full_norm: BigDecimal,
        records: Vec<ContributionRecord>,
    },
}

impl ContributionReport {
    pub fn records(&self) -> &[ContributionRecord] {
        match self {
            Self::NothingToReduce { .. } => &[],
            Self::Analysis { records, .. } => records,
        }
    }

    pub fn full_norm(&self) -> Option<&BigDecimal> {
        match self {
            Self::NothingToReduce { .. } => None,
            Self::Analysis { full_norm, .. } => Some(full_norm),
        }
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Leave-one-out analyzer over one contracted set.
pub struct ContributionAnalyzer<'a, H: DomainHeuristic + ?Sized> {
    set: &'a ContractedSet,
    heuristic: &'a H,
    ctx: PrecisionContext,
}

impl<'a, H: DomainHeuristic + ?Sized> ContributionAnalyzer<'a, H> {
    /// Norms below this are treated as zero when computing loss.
    pub const MIN_FULL_NORM_EXP10: i64 = -12;

    pub fn new(set: &'a ContractedSet, heuristic: &'a H, ctx: PrecisionContext) -> Self {
        Self {
            set,
            heuristic,
            ctx,
        }
    }

    /// Norm of the complete set.
    pub fn full_norm(&self) -> Result<BigDecimal, SculptError> {
        let domain = self.heuristic.suggest(self.set, &self.ctx)?;
        self.set.norm(&domain, &self.ctx)
    }

    /// Norm of the set with primitive `index` (zero-based) removed.
    ///
    /// Removing the only primitive leaves the empty sum, whose norm is zero.
    pub fn partial_norm_excluding(&self, index: usize) -> Result<BigDecimal, SculptError> {
        let reduced = self.set.excluding(index)?;
        if reduced.is_empty() {
            return Ok(BigDecimal::zero());
        }
        let domain = self.heuristic.suggest(&reduced, &self.ctx)?;
        let norm = reduced.norm(&domain, &self.ctx)?;
        log::debug!("partial norm without #{}: {norm}", index + 1);
        Ok(norm)
    }

    /// Amplitude share `|c_i N_i| / sum_j |c_j N_j| * 100` of every primitive.
    pub fn contributions(&self) -> Result<Vec<BigDecimal>, SculptError> {
        let ctx = &self.ctx;
        let amplitudes: Vec<BigDecimal> = self
            .set
            .primitives()
            .iter()
            .map(|p| p.amplitude().abs())
            .collect();
        let total = amplitudes
            .iter()
            .fold(BigDecimal::zero(), |acc, a| ctx.add(&acc, a));

        if total.is_zero() {
            return Ok(vec![BigDecimal::zero(); amplitudes.len()]);
        }

        amplitudes
            .iter()
            .map(|a| Ok(ctx.mul(&ctx.div(a, &total)?, &BigDecimal::from(100))))
            .collect()
    }

    /// Relative loss `(full - partial) / full * 100`, zero for a vanishing full norm.
    pub fn loss_percent(
        &self,
        full_norm: &BigDecimal,
        partial_norm: &BigDecimal,
    ) -> Result<BigDecimal, SculptError> {
        if *full_norm < exp10(Self::MIN_FULL_NORM_EXP10) {
            return Ok(BigDecimal::zero());
        }
        let ctx = &self.ctx;
        let ratio = ctx.div(&ctx.sub(full_norm, partial_norm), full_norm)?;
        Ok(ctx.mul(&ratio, &BigDecimal::from(100)))
    }

    /// Full norm plus one leave-one-out record per primitive.
    pub fn all_partial_norms(&self) -> Result<ContributionReport, SculptError> {
        if self.set.len() <= 1 {
            log::debug!("set of {} primitive(s): nothing to reduce", self.set.len());
            return Ok(ContributionReport::NothingToReduce {
                size: self.set.len(),
            });
        }

        let contributions = self.contributions()?;
        let full_norm = self.full_norm()?;
        log::debug!("full norm: {full_norm}");

        let records = self
            .set
            .primitives()
            .iter()
            .zip(contributions)
            .enumerate()
            .map(|(i, (p, contribution_percent))| {
                let partial_norm = self.partial_norm_excluding(i)?;
                Ok(ContributionRecord {
                    index: i + 1,
                    alpha: p.alpha().clone(),
                    loss_percent: self.loss_percent(&full_norm, &partial_norm)?,
                    partial_norm,
                    contribution_percent,
                })
            })
            .collect::<Result<Vec<_>, SculptError>>()?;

        Ok(ContributionReport::Analysis { full_norm, records })
    }
}
