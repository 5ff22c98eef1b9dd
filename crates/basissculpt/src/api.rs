//! High-level API for basis-function norm analysis.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the arithmetic precision and the quadrature domain
//! strategy, ending in `.build()` which yields a validated [`Sculptor`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Deferred errors**: Setting a parameter twice, or setting two parameters
//!   that configure the same thing, is recorded and reported by `.build()`.
//!   `.precision()` conflicts with `.tolerance()`, and `.domain()` conflicts
//!   with every tail-bound setting.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SculptBuilder`] via `Sculpt::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.domain()`, etc.).
//! 3. Call `.build()` and run `.analyze()` / `.normalize()` on the result.

// External dependencies
use bigdecimal::BigDecimal;

// Internal dependencies
use crate::algorithms::domain::{FixedDomain, TailBoundDomain};
use crate::algorithms::normalization::Normalizer;
use crate::engine::executor::DomainStrategy;
use crate::engine::validator::Validator;
use crate::math::golden::GoldenSection;

// Publicly re-exported types
pub use crate::algorithms::contracted::ContractedSet;
pub use crate::algorithms::domain::DomainHeuristic;
pub use crate::algorithms::normalization::NormalizationPath;
pub use crate::engine::executor::Sculptor;
pub use crate::engine::output::NormalizationOutcome;
pub use crate::evaluation::contribution::{ContributionRecord, ContributionReport};
pub use crate::math::quadrature::QuadratureDomain;
pub use crate::primitives::errors::SculptError;
pub use crate::primitives::gaussian::Primitive;
pub use crate::primitives::precision::PrecisionContext;

/// Fluent builder for configuring precision and integration domains.
#[derive(Debug, Clone, Default)]
pub struct SculptBuilder {
    /// Significant digits kept by every decimal operation.
    pub precision: Option<u64>,

    /// Tolerance from which the digit count is derived.
    pub tolerance: Option<BigDecimal>,

    /// Fixed integration domain; disables the tail-bound heuristic.
    pub domain: Option<QuadratureDomain>,

    /// Tail fraction accepted at `r_max` (tail-bound heuristic).
    pub tail: Option<f64>,

    /// Samples per width of the tightest primitive (tail-bound heuristic).
    pub samples_per_width: Option<f64>,

    /// Lower step clamp (tail-bound heuristic).
    pub min_steps: Option<usize>,

    /// Upper step clamp (tail-bound heuristic).
    pub max_steps: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SculptBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `digits` significant digits. Conflicts with `.tolerance()`.
    pub fn precision(mut self, digits: u64) -> Self {
        if self.precision.is_some() || self.tolerance.is_some() {
            self.duplicate_param = Some("precision");
        }
        self.precision = Some(digits);
        self
    }

    /// Derive the digit count from a tolerance (`1e-30` keeps 30 digits).
    pub fn tolerance(mut self, tolerance: BigDecimal) -> Self {
        if self.tolerance.is_some() || self.precision.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Integrate every set over the same domain. Conflicts with the tail-bound settings.
    pub fn domain(mut self, domain: QuadratureDomain) -> Self {
        if self.domain.is_some() || self.tail_bound_configured() {
            self.duplicate_param = Some("domain");
        }
        self.domain = Some(domain);
        self
    }

    /// Set the tail fraction of the tail-bound heuristic.
    pub fn tail_bound(mut self, tail: f64) -> Self {
        if self.tail.is_some() || self.domain.is_some() {
            self.duplicate_param = Some("tail_bound");
        }
        self.tail = Some(tail);
        self
    }

    /// Set the sampling density of the tail-bound heuristic.
    pub fn samples_per_width(mut self, samples: f64) -> Self {
        if self.samples_per_width.is_some() || self.domain.is_some() {
            self.duplicate_param = Some("samples_per_width");
        }
        self.samples_per_width = Some(samples);
        self
    }

    /// Set the lower step clamp of the tail-bound heuristic.
    pub fn min_steps(mut self, steps: usize) -> Self {
        if self.min_steps.is_some() || self.domain.is_some() {
            self.duplicate_param = Some("min_steps");
        }
        self.min_steps = Some(steps);
        self
    }

    /// Set the upper step clamp of the tail-bound heuristic.
    pub fn max_steps(mut self, steps: usize) -> Self {
        if self.max_steps.is_some() || self.domain.is_some() {
            self.duplicate_param = Some("max_steps");
        }
        self.max_steps = Some(steps);
        self
    }

    fn tail_bound_configured(&self) -> bool {
        self.tail.is_some()
            || self.samples_per_width.is_some()
            || self.min_steps.is_some()
            || self.max_steps.is_some()
    }

    /// Validate the configuration and produce a [`Sculptor`].
    pub fn build(self) -> Result<Sculptor, SculptError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let ctx = match (self.precision, &self.tolerance) {
            (Some(digits), _) => PrecisionContext::new(digits)?,
            (None, Some(tolerance)) => PrecisionContext::from_tolerance(tolerance)?,
            (None, None) => PrecisionContext::default(),
        };

        let mut heuristic = TailBoundDomain::default();
        if let Some(tail) = self.tail {
            Validator::validate_tail(tail)?;
            heuristic.tail = tail;
        }
        if let Some(samples) = self.samples_per_width {
            Validator::validate_samples_per_width(samples)?;
            heuristic.samples_per_width = samples;
        }
        if let Some(min_steps) = self.min_steps {
            heuristic.min_steps = min_steps;
        }
        if let Some(max_steps) = self.max_steps {
            heuristic.max_steps = max_steps;
        }
        Validator::validate_step_bounds(heuristic.min_steps, heuristic.max_steps)?;

        let domain = match self.domain {
            Some(fixed) => DomainStrategy::Fixed(FixedDomain(fixed)),
            None => DomainStrategy::TailBound(heuristic),
        };

        Ok(Sculptor {
            ctx,
            domain,
            normalizer: Normalizer::new(GoldenSection::default()),
        })
    }
}
