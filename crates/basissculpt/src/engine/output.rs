//! Output types for norm analysis and normalization.
//!
//! ## Purpose
//!
//! This module defines [`NormalizationOutcome`] and the human-readable
//! `Display` implementations for normalization and contribution results.
//!
//! ## Design notes
//!
//! * **Full precision kept**: Structured fields hold `BigDecimal` values; only
//!   `Display` reduces them to `f64` for printing.
//! * **Plain text**: Tables use fixed-width scientific notation. Basis-set
//!   file conventions (D exponents, shell headers) are left to callers.
//!
//! ## Invariants
//!
//! * `pairs` are in original input order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores and prints results.
//! * This module does not write files.

// External dependencies
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::normalization::NormalizationPath;
use crate::evaluation::contribution::ContributionReport;
use crate::math::quadrature::QuadratureDomain;

// ============================================================================
// Result Structure
// ============================================================================

/// Rescaled primitives plus normalization diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationOutcome {
    /// Rescaled `(alpha, c)` pairs in original input order.
    pub pairs: Vec<(BigDecimal, BigDecimal)>,

    /// Norm of the rescaled set over `domain`.
    pub achieved_norm: BigDecimal,

    /// Strategy taken.
    pub path: NormalizationPath,

    /// Whether the final `1/sqrt(norm)` correction was applied.
    pub cleanup_applied: bool,

    /// Domain used for every integral of this normalization.
    pub domain: QuadratureDomain,
}

impl NormalizationOutcome {
    /// `true` unless normalization was skipped for a single-sign set.
    pub fn is_applied(&self) -> bool {
        self.path.is_applied()
    }

    /// Rescaled coefficients in original order.
    pub fn coefficients(&self) -> impl Iterator<Item = &BigDecimal> {
        self.pairs.iter().map(|(_, c)| c)
    }
}

fn approx(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Display Implementations
// ============================================================================

impl Display for NormalizationPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Uniform { scale } => write!(f, "{} (scale {:.6e})", self.name(), approx(scale)),
            Self::ProjectionRoot { s2, discriminant } => write!(
                f,
                "{} (s2 {:.6e}, D {:.6e})",
                self.name(),
                approx(s2),
                approx(discriminant)
            ),
            Self::GoldenSection {
                s2,
                residual,
                iterations,
                ..
            } => write!(
                f,
                "{} (s2 {:.6e}, |norm - 1| {:.3e}, {} iterations)",
                self.name(),
                approx(s2),
                approx(residual),
                iterations
            ),
            Self::SkippedSingleSign {
                non_negative,
                negative,
            } => write!(
                f,
                "{} ({} non-negative, {} negative)",
                self.name(),
                non_negative,
                negative
            ),
        }
    }
}

impl Display for NormalizationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Normalization:")?;
        writeln!(f, "  Path:          {}", self.path)?;
        writeln!(f, "  Domain:        {}", self.domain)?;
        writeln!(f, "  Cleanup:       {}", if self.cleanup_applied { "applied" } else { "not needed" })?;
        writeln!(f, "  Achieved norm: {:.12}", approx(&self.achieved_norm))?;
        writeln!(f)?;

        writeln!(f, "{:>16} {:>16}", "Alpha", "Coefficient")?;
        writeln!(f, "{:-<33}", "")?;
        for (alpha, c) in &self.pairs {
            writeln!(f, "{:>16.6e} {:>16.6e}", approx(alpha), approx(c))?;
        }

        Ok(())
    }
}

impl Display for ContributionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (full_norm, records) = match self {
            Self::NothingToReduce { size } => {
                return writeln!(f, "Set has {size} primitive(s); nothing to reduce.");
            }
            Self::Analysis { full_norm, records } => (full_norm, records),
        };

        writeln!(f, "Full norm: {:.12}", approx(full_norm))?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>4} {:>14} {:>16} {:>10} {:>14}",
            "#", "Alpha", "Partial_Norm", "Loss_%", "Contribution_%"
        )?;
        writeln!(f, "{:-<62}", "")?;
        for r in records {
            writeln!(
                f,
                "{:>4} {:>14.6e} {:>16.10} {:>10.4} {:>14.4}",
                r.index,
                approx(&r.alpha),
                approx(&r.partial_norm),
                approx(&r.loss_percent),
                approx(&r.contribution_percent)
            )?;
        }

        Ok(())
    }
}
