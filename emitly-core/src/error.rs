//! Error types for Emitly.
//!
//! This module provides the structured error hierarchy using `thiserror`:
//!
//! - [`EmitlyError`] - Top-level error type for all Emitly operations
//! - [`BoxError`] - Opaque errors raised by user handlers during dispatch
//!
//! Absence is not failure in this model: emitting an unregistered type,
//! removing an unknown handler, or clearing an empty category are all
//! defined no-ops and never produce an error.

use thiserror::Error;

/// A boxed error type for errors raised by user handlers.
///
/// Handler errors are propagated to the `emit` caller unwrapped; the
/// dispatcher never converts or swallows them.
pub type BoxError = Box<dyn std::error::Error + 'static>;

/// Top-level error type for all Emitly operations.
#[derive(Error, Debug)]
pub enum EmitlyError {
    /// A category name that is neither `literal` nor `pattern`.
    #[error("unknown handler category: {0}")]
    UnknownCategory(String),

    /// A pattern source that failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
