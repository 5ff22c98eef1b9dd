//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a run: it validates input, picks integration
//! domains, dispatches to the analyzer or the normalizer, and packages the
//! results.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configured executor.
pub mod executor;

/// Result types and formatting.
pub mod output;

/// Input and parameter validation.
pub mod validator;
