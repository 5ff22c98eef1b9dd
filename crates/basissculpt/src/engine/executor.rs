//! Execution of analysis and normalization requests.
//!
//! ## Purpose
//!
//! This module provides [`Sculptor`], the configured entry point produced by
//! the builder. It validates raw `(alpha, c)` pairs, builds the contracted set,
//! obtains integration domains, and runs the analyzer or the normalizer.
//!
//! ## Design notes
//!
//! * **Stateless runs**: A `Sculptor` holds only read-only configuration, so
//!   one instance can serve any number of blocks.
//! * **Domain strategy**: Either a fixed domain or the tail-bound heuristic;
//!   both implement `DomainHeuristic`.
//!
//! ## Non-goals
//!
//! * This module does not split basis files into blocks or shells.

// External dependencies
use bigdecimal::BigDecimal;

// Internal dependencies
use crate::algorithms::contracted::ContractedSet;
use crate::algorithms::domain::{DomainHeuristic, FixedDomain, TailBoundDomain};
use crate::algorithms::normalization::Normalizer;
use crate::engine::output::NormalizationOutcome;
use crate::engine::validator::Validator;
use crate::evaluation::contribution::{ContributionAnalyzer, ContributionReport};
use crate::math::quadrature::QuadratureDomain;
use crate::primitives::errors::SculptError;
use crate::primitives::precision::PrecisionContext;

// ============================================================================
// Domain Strategy
// ============================================================================

/// How integration domains are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainStrategy {
    /// Same domain for every set.
    Fixed(FixedDomain),

    /// Sized per set from its exponents.
    TailBound(TailBoundDomain),
}

impl Default for DomainStrategy {
    fn default() -> Self {
        Self::TailBound(TailBoundDomain::default())
    }
}

impl DomainHeuristic for DomainStrategy {
    fn suggest(
        &self,
        set: &ContractedSet,
        ctx: &PrecisionContext,
    ) -> Result<QuadratureDomain, SculptError> {
        match self {
            Self::Fixed(fixed) => fixed.suggest(set, ctx),
            Self::TailBound(tail) => tail.suggest(set, ctx),
        }
    }
}

// ============================================================================
// Sculptor
// ============================================================================

/// Configured analyzer/normalizer for contracted Gaussian functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Sculptor {
    pub(crate) ctx: PrecisionContext,
    pub(crate) domain: DomainStrategy,
    pub(crate) normalizer: Normalizer,
}

impl Sculptor {
    pub fn precision(&self) -> &PrecisionContext {
        &self.ctx
    }

    pub fn domain_strategy(&self) -> &DomainStrategy {
        &self.domain
    }

    /// Validate `pairs` and build a contracted set at the configured precision.
    pub fn contracted(
        &self,
        pairs: &[(BigDecimal, BigDecimal)],
    ) -> Result<ContractedSet, SculptError> {
        Validator::validate_pairs(pairs)?;
        ContractedSet::from_pairs(pairs, &self.ctx)
    }

    /// Domain the configured strategy picks for `set`.
    pub fn suggest_domain(&self, set: &ContractedSet) -> Result<QuadratureDomain, SculptError> {
        self.domain.suggest(set, &self.ctx)
    }

    /// Norm of the full contracted function.
    pub fn full_norm(&self, pairs: &[(BigDecimal, BigDecimal)]) -> Result<BigDecimal, SculptError> {
        let set = self.contracted(pairs)?;
        ContributionAnalyzer::new(&set, &self.domain, self.ctx).full_norm()
    }

    /// Norm with primitive `index` (zero-based) left out.
    pub fn partial_norm_excluding(
        &self,
        pairs: &[(BigDecimal, BigDecimal)],
        index: usize,
    ) -> Result<BigDecimal, SculptError> {
        let set = self.contracted(pairs)?;
        ContributionAnalyzer::new(&set, &self.domain, self.ctx).partial_norm_excluding(index)
    }

    /// Leave-one-out analysis of every primitive.
    pub fn analyze(
        &self,
        pairs: &[(BigDecimal, BigDecimal)],
    ) -> Result<ContributionReport, SculptError> {
        let set = self.contracted(pairs)?;
        ContributionAnalyzer::new(&set, &self.domain, self.ctx).all_partial_norms()
    }

    /// Rescale to unit norm; result pairs are in input order.
    pub fn normalize(
        &self,
        pairs: &[(BigDecimal, BigDecimal)],
    ) -> Result<NormalizationOutcome, SculptError> {
        let set = self.contracted(pairs)?;
        let domain = self.suggest_domain(&set)?;
        let normalized = self.normalizer.normalize(&set, &domain, &self.ctx)?;

        Ok(NormalizationOutcome {
            pairs: normalized.set.in_original_order().to_pairs(),
            achieved_norm: normalized.achieved_norm,
            path: normalized.path,
            cleanup_applied: normalized.cleanup_applied,
            domain,
        })
    }
}
