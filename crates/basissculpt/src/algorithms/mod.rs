//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the basis-function algorithms:
//! - Contracted sets and their norm/overlap integrals
//! - Quadrature domain selection
//! - Uniform and projection normalization
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Contracted sets.
pub mod contracted;

/// Quadrature domain heuristics.
pub mod domain;

/// Unit-norm rescaling.
pub mod normalization;
