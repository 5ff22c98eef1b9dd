//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer computes diagnostics about a contracted set without changing
//! it: leave-one-out norms, relative loss, and amplitude contributions.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Leave-one-out contribution analysis.
pub mod contribution;
