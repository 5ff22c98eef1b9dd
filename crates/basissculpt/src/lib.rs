//! # basissculpt: norm control for contracted Gaussian basis functions
//!
//! A contracted Gaussian basis function is a weighted sum of primitives
//!
//! ```text
//! phi(r) = sum_i c_i * N_i * exp(-alpha_i * r^2),   N_i = (2 alpha_i / pi)^(3/4)
//! ```
//!
//! This crate integrates its radial norm `integral 4 pi r^2 phi(r)^2 dr` in
//! arbitrary-precision decimal arithmetic, ranks each primitive by how much
//! norm is lost when it is left out, and rescales the coefficients back to
//! unit norm, including the mixed-sign case where a single scale factor is
//! not enough.
//!
//! ## Quick Start
//!
//! ```rust
//! use basissculpt::prelude::*;
//! use std::str::FromStr;
//!
//! let pairs = vec![
//!     (BigDecimal::from_str("0.5")?, BigDecimal::from_str("0.6")?),
//!     (BigDecimal::from_str("0.1")?, BigDecimal::from_str("0.4")?),
//! ];
//!
//! let sculptor = Sculpt::new()
//!     .precision(30)
//!     .max_steps(600)
//!     .build()?;
//!
//! // Leave-one-out analysis
//! let report = sculptor.analyze(&pairs)?;
//! println!("{}", report);
//!
//! // Rescale to unit norm
//! let outcome = sculptor.normalize(&pairs)?;
//! println!("{}", outcome);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Normalization strategies
//!
//! * All coefficients non-negative: every coefficient is multiplied by
//!   `1/sqrt(norm)`.
//! * Mixed signs: the negative group is rescaled by the smaller root of a
//!   quadratic in its scale; if the quadratic has no real root a
//!   golden-section search takes over. A final correction pass removes the
//!   residual quadrature bias.
//!
//! The strategy taken is reported in [`prelude::NormalizationPath`].
//!
//! ## Precision
//!
//! Coefficients, normalization constants and all sums are held in
//! [`bigdecimal::BigDecimal`] rounded half-up to the configured digit count
//! (42 by default). The Gaussian decay factor `exp(-alpha r^2)` is evaluated
//! in `f64`.
//!
//! ## Logging
//!
//! Intermediate numerics are emitted through the [`log`] facade at `debug`
//! level; fallbacks and skipped normalizations at `warn` level.
//!
//! ## License
//!
//! BSD 3-Clause. See the repository for details.

// Layer 1: Primitives - value types and the precision context.
mod primitives;

// Layer 2: Math - quadrature, quadratic roots, golden-section search.
mod math;

// Layer 3: Algorithms - contracted sets, domains, normalization.
mod algorithms;

// Layer 4: Evaluation - leave-one-out diagnostics.
mod evaluation;

// Layer 5: Engine - validation, execution, output.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        ContractedSet, ContributionRecord, ContributionReport, DomainHeuristic,
        NormalizationOutcome, NormalizationPath, PrecisionContext, Primitive, QuadratureDomain,
        SculptBuilder as Sculpt, SculptError, Sculptor,
    };
    pub use bigdecimal::BigDecimal;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for the integration tests.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
