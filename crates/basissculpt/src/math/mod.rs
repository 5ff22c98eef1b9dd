//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical building blocks:
//! - Radial composite quadrature
//! - Quadratic root selection
//! - Golden-section minimization
//!
//! None of these know about Gaussians or basis sets.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Radial quadrature over `[r_min, r_max]`.
pub mod quadrature;

/// Quadratic equation solver.
pub mod quadratic;

/// Golden-section search.
pub mod golden;
