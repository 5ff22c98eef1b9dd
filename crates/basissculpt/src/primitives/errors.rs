//! Error types for basis-set norm analysis.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! contracted set, configuring the arithmetic precision, choosing a quadrature
//! domain, or running a leave-one-out analysis.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (index, exponent, digits).
//! * **Deferred**: Builder misuse (duplicate parameters) is recorded and
//!   reported when `.build()` is called.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty primitive lists, non-positive exponents.
//! 2. **Configuration validation**: Precision digits, tolerance, domain bounds.
//! 3. **Contract violations**: Out-of-range exclusion index.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric degeneracies (near-zero norm, single-sign group, negative
//!   discriminant) are *not* errors; they surface as diagnostics instead.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for norm analysis and normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum SculptError {
    /// The primitive list is empty.
    EmptyInput,

    /// A Gaussian exponent is not strictly positive.
    InvalidExponent {
        /// Zero-based position of the primitive in the input list.
        index: usize,
        /// The rejected exponent, rendered as text.
        value: String,
    },

    /// A value could not be represented (NaN, infinity, failed square root).
    InvalidNumericValue(String),

    /// Precision must be at least one significant digit.
    InvalidPrecision(u64),

    /// Tolerance used to derive the precision must be strictly positive.
    InvalidTolerance(String),

    /// Quadrature domain is malformed (empty interval, zero steps, negative radius).
    InvalidDomain(String),

    /// Exclusion index lies outside `[0, len)`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of primitives in the set.
        len: usize,
    },

    /// Parameter was set multiple times in the builder, or conflicts with one
    /// already set (`precision`/`tolerance`, `domain`/tail-bound settings).
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SculptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Primitive list is empty"),
            Self::InvalidExponent { index, value } => {
                write!(f, "Invalid exponent at primitive {index}: {value} (must be > 0)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidPrecision(digits) => {
                write!(f, "Invalid precision: {digits} digits (must be >= 1)")
            }
            Self::InvalidTolerance(tol) => write!(f, "Invalid tolerance: {tol} (must be > 0)"),
            Self::InvalidDomain(msg) => write!(f, "Invalid quadrature domain: {msg}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Invalid index to ignore: {index} (set has {len} primitives)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times or conflicts with an earlier setting. Each setting can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SculptError {}
