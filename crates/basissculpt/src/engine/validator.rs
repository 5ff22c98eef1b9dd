//! Input validation for basis-set analysis.
//!
//! ## Purpose
//!
//! This module checks primitive lists and builder parameters before any
//! quadrature is run.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Key concepts
//!
//! * **Exponents**: Every alpha must be strictly positive.
//! * **Heuristic bounds**: Tail fraction in (0, 1), positive sampling density,
//!   `1 <= min_steps <= max_steps`.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not parse basis-set files.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::SculptError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for primitive lists and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate `(alpha, c)` pairs: non-empty, every alpha > 0.
    pub fn validate_pairs(pairs: &[(BigDecimal, BigDecimal)]) -> Result<(), SculptError> {
        if pairs.is_empty() {
            return Err(SculptError::EmptyInput);
        }

        let zero = BigDecimal::zero();
        for (index, (alpha, _)) in pairs.iter().enumerate() {
            if *alpha <= zero {
                return Err(SculptError::InvalidExponent {
                    index,
                    value: alpha.to_string(),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the accepted tail fraction of the domain heuristic.
    pub fn validate_tail(tail: f64) -> Result<(), SculptError> {
        if !tail.is_finite() || tail <= 0.0 || tail >= 1.0 {
            return Err(SculptError::InvalidDomain(format!(
                "tail = {tail} (must be > 0 and < 1)"
            )));
        }
        Ok(())
    }

    /// Validate the sampling density of the domain heuristic.
    pub fn validate_samples_per_width(samples: f64) -> Result<(), SculptError> {
        if !samples.is_finite() || samples <= 0.0 {
            return Err(SculptError::InvalidDomain(format!(
                "samples_per_width = {samples} (must be > 0)"
            )));
        }
        Ok(())
    }

    /// Validate the step clamp of the domain heuristic.
    pub fn validate_step_bounds(min_steps: usize, max_steps: usize) -> Result<(), SculptError> {
        if min_steps == 0 || min_steps > max_steps {
            return Err(SculptError::InvalidDomain(format!(
                "step bounds [{min_steps}, {max_steps}] (need 1 <= min_steps <= max_steps)"
            )));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SculptError> {
        if let Some(param) = duplicate_param {
            return Err(SculptError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
