//! Tests for the fluent builder and the configured executor.
//!
//! These tests verify:
//! - Builder validation (duplicates, precision, heuristic bounds)
//! - Input validation of `(alpha, c)` pairs
//! - End-to-end analysis and normalization through `Sculptor`
//! - Report formatting

use approx::{assert_abs_diff_eq, assert_relative_eq};
use num_traits::{ToPrimitive, Zero};
use std::str::FromStr;

use basissculpt::internals::engine::executor::DomainStrategy;
use basissculpt::prelude::*;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn f(x: &BigDecimal) -> f64 {
    x.to_f64().unwrap()
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(BigDecimal, BigDecimal)> {
    raw.iter().map(|(a, c)| (dec(a), dec(c))).collect()
}

// ============================================================================
// Builder Validation
// ============================================================================

/// Test the defaults.
#[test]
fn test_builder_defaults() {
    let sculptor = Sculpt::new().build().unwrap();
    assert_eq!(sculptor.precision().digits(), 42);
    assert!(matches!(
        sculptor.domain_strategy(),
        DomainStrategy::TailBound(_)
    ));
}

/// Test that parameters may be set only once.
#[test]
fn test_duplicate_parameters() {
    let err = Sculpt::new().precision(20).precision(30).build().unwrap_err();
    assert_eq!(
        err,
        SculptError::DuplicateParameter {
            parameter: "precision"
        }
    );

    // Precision and tolerance configure the same thing
    let err = Sculpt::new()
        .precision(20)
        .tolerance(dec("1e-10"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SculptError::DuplicateParameter {
            parameter: "tolerance"
        }
    );

    let err = Sculpt::new().max_steps(500).max_steps(600).build().unwrap_err();
    assert_eq!(
        err,
        SculptError::DuplicateParameter {
            parameter: "max_steps"
        }
    );
}

/// Test that a fixed domain conflicts with the tail-bound settings.
#[test]
fn test_domain_conflicts_with_tail_bound() {
    let domain = QuadratureDomain::from_origin(dec("20"), 400).unwrap();

    let err = Sculpt::new()
        .domain(domain.clone())
        .max_steps(10)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SculptError::DuplicateParameter {
            parameter: "max_steps"
        }
    );

    let err = Sculpt::new()
        .tail_bound(1e-10)
        .domain(domain.clone())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SculptError::DuplicateParameter {
            parameter: "domain"
        }
    );

    for builder in [
        Sculpt::new().domain(domain.clone()).samples_per_width(5.0),
        Sculpt::new().min_steps(50).domain(domain.clone()),
    ] {
        assert!(matches!(
            builder.build(),
            Err(SculptError::DuplicateParameter { .. })
        ));
    }

    // Either route on its own is fine
    assert!(Sculpt::new().domain(domain).precision(20).build().is_ok());
    assert!(Sculpt::new().tail_bound(1e-10).max_steps(900).build().is_ok());
}

/// Test precision configuration.
#[test]
fn test_precision_configuration() {
    assert_eq!(
        Sculpt::new().precision(0).build().unwrap_err(),
        SculptError::InvalidPrecision(0)
    );

    let sculptor = Sculpt::new().tolerance(dec("1e-25")).build().unwrap();
    assert_eq!(sculptor.precision().digits(), 25);

    assert!(matches!(
        Sculpt::new().tolerance(dec("0")).build(),
        Err(SculptError::InvalidTolerance(_))
    ));
}

/// Test tail-bound parameter validation.
#[test]
fn test_heuristic_validation() {
    assert!(matches!(
        Sculpt::new().tail_bound(1.5).build(),
        Err(SculptError::InvalidDomain(_))
    ));
    assert!(matches!(
        Sculpt::new().tail_bound(0.0).build(),
        Err(SculptError::InvalidDomain(_))
    ));
    assert!(matches!(
        Sculpt::new().samples_per_width(-2.0).build(),
        Err(SculptError::InvalidDomain(_))
    ));
    assert!(matches!(
        Sculpt::new().min_steps(500).max_steps(100).build(),
        Err(SculptError::InvalidDomain(_))
    ));
    assert!(matches!(
        Sculpt::new().min_steps(0).build(),
        Err(SculptError::InvalidDomain(_))
    ));
}

/// Test input pair validation.
#[test]
fn test_pair_validation() {
    let sculptor = Sculpt::new().precision(20).build().unwrap();

    assert_eq!(sculptor.analyze(&[]).unwrap_err(), SculptError::EmptyInput);
    assert_eq!(
        sculptor
            .normalize(&pairs(&[("1", "0.5"), ("-0.5", "0.5")]))
            .unwrap_err(),
        SculptError::InvalidExponent {
            index: 1,
            value: "-0.5".to_string()
        }
    );
    assert!(matches!(
        sculptor.full_norm(&pairs(&[("0", "1")])),
        Err(SculptError::InvalidExponent { index: 0, .. })
    ));
}

// ============================================================================
// End-to-End
// ============================================================================

/// Test full and partial norms through the executor.
#[test]
fn test_norms() {
    let sculptor = Sculpt::new().precision(30).build().unwrap();
    let input = pairs(&[("0.5", "0.6"), ("0.1", "0.4")]);

    let full = sculptor.full_norm(&input).unwrap();
    assert_relative_eq!(f(&full), 0.8289, max_relative = 1e-4);

    let partial = sculptor.partial_norm_excluding(&input, 0).unwrap();
    assert_relative_eq!(f(&partial), 0.16, max_relative = 1e-10);

    assert!(matches!(
        sculptor.partial_norm_excluding(&input, 5),
        Err(SculptError::IndexOutOfRange { index: 5, len: 2 })
    ));

    // Nothing left after removing a lone primitive
    let lone = pairs(&[("1", "1")]);
    assert!(sculptor.partial_norm_excluding(&lone, 0).unwrap().is_zero());
}

/// Test normalization with a fixed domain.
#[test]
fn test_normalize_fixed_domain() {
    let domain = QuadratureDomain::from_origin(dec("40"), 800).unwrap();
    let sculptor = Sculpt::new()
        .precision(30)
        .domain(domain.clone())
        .build()
        .unwrap();
    let input = pairs(&[("1", "0.8"), ("0.3", "-0.3"), ("0.1", "0.5")]);

    let outcome = sculptor.normalize(&input).unwrap();
    assert_eq!(outcome.domain, domain);
    assert!(outcome.is_applied());
    assert_abs_diff_eq!(f(&outcome.achieved_norm), 1.0, epsilon = 1e-8);

    let alphas: Vec<BigDecimal> = outcome.pairs.iter().map(|(a, _)| a.clone()).collect();
    assert_eq!(alphas, vec![dec("1"), dec("0.3"), dec("0.1")]);
    assert_eq!(outcome.coefficients().count(), 3);
}

/// Test that the single-sign skip is reported, not raised.
#[test]
fn test_normalize_single_sign() {
    let sculptor = Sculpt::new().precision(20).build().unwrap();
    let input = pairs(&[("1", "-0.5"), ("0.2", "-0.3")]);

    let outcome = sculptor.normalize(&input).unwrap();
    assert!(!outcome.is_applied());
    assert_eq!(outcome.pairs, input);
}

// ============================================================================
// Formatting
// ============================================================================

/// Test report and outcome text.
#[test]
fn test_display() {
    let sculptor = Sculpt::new().precision(20).max_steps(600).build().unwrap();
    let input = pairs(&[("0.5", "0.6"), ("0.1", "0.4")]);

    let report = sculptor.analyze(&input).unwrap().to_string();
    assert!(report.starts_with("Full norm:"));
    assert!(report.contains("Partial_Norm"));
    assert!(report.contains("Contribution_%"));

    let single = sculptor.analyze(&input[..1]).unwrap().to_string();
    assert_eq!(single, "Set has 1 primitive(s); nothing to reduce.\n");

    let outcome = sculptor.normalize(&input).unwrap().to_string();
    assert!(outcome.starts_with("Normalization:"));
    assert!(outcome.contains("uniform rescale"));
    assert!(outcome.contains("Coefficient"));

    let err = SculptError::IndexOutOfRange { index: 4, len: 2 };
    assert_eq!(
        err.to_string(),
        "Invalid index to ignore: 4 (set has 2 primitives)"
    );
}
