//! Error types for state tree operations.
//!
//! This module defines structured error types for the tree data model,
//! providing context for absent-value reads, cross-type assignments, and
//! broken structural invariants encountered during traversal.

use thiserror::Error;

use super::value::ValueKind;

/// Structured error types for state tree operations.
///
/// All variants are contract violations on the caller's side rather than
/// recoverable runtime conditions; no operation in this crate catches or
/// retries them internally.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// A leaf was read, or used as an interpolation source, while absent
    #[error("leaf of type {kind} read without a value")]
    WithoutValue { kind: ValueKind },

    /// Two nodes of different concrete types were merged, assigned, or zipped
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// The traversal engine encountered a tree violating a shape invariant
    #[error("structural violation: {reason}")]
    StructuralViolation { reason: String },
}

impl TreeError {
    /// Check if this error is an absent-value read
    pub fn is_without_value(&self) -> bool {
        matches!(self, TreeError::WithoutValue { .. })
    }

    /// Check if this error is a type mismatch between two nodes
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, TreeError::TypeMismatch { .. })
    }

    /// Check if this error is a broken structural invariant
    pub fn is_structural_violation(&self) -> bool {
        matches!(self, TreeError::StructuralViolation { .. })
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
