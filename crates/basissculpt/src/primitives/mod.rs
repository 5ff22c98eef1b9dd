//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value types used throughout the crate: the
//! arbitrary-precision context, the Gaussian primitive, and the shared error
//! type. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Arbitrary-precision arithmetic context.
pub mod precision;

/// Primitive Gaussian terms.
pub mod gaussian;
