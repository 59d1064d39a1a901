//!
//! Snapstate: versioned, partially-populated state trees for simulation
//! and replay. This library provides an in-memory tree data model plus the
//! generic zipped traversal that drives all of its per-tick operations.
//!
//! ## Core Concepts
//!
//! * **Elements (`tree::Element`)**: The polymorphic tree node. Every node is exactly one of leaf, record, slot, or array.
//! * **Leaves (`tree::Leaf`)**: Typed optional values with explicit presence tracking; reading an absent leaf is an error, never a default.
//! * **Schemas (`tree::schema`)**: Each record type declares its ordered child slots once; the layout is cached per type and shared by every instance.
//! * **Navigation (`tree::navigate`)**: One depth-first engine walks up to three congruent trees in lockstep, allocation-free, with prefix truncation when child types diverge.
//! * **Operations (`tree::ops`)**: Reset, zero, clone, structural equality, presence-gated merge, and snapshot interpolation, each a thin visitor over the engine.
//! * **Wire format (`tree::wire`)**: Schema-agreed binary encoding, one presence byte plus a fixed-width value per leaf, with no composite framing.
//!
//! The model is single-threaded and synchronous: trees are long-lived,
//! mutated in place, and never shared between concurrent callers.

pub mod tree;

/// Re-export the `Element` node type for easier access.
pub use tree::Element;

/// Result type used throughout the snapstate library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the snapstate library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured data-model errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured decode errors from the wire module
    #[error(transparent)]
    Wire(tree::wire::WireError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Wire(_) => "wire",
        }
    }

    /// Check if this error is an absent-value read.
    pub fn is_without_value(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_without_value(),
            _ => false,
        }
    }

    /// Check if this error is a type mismatch between two nodes.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is a broken structural invariant.
    pub fn is_structural_violation(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_structural_violation(),
            _ => false,
        }
    }

    /// Check if this error is wire-decoding related.
    pub fn is_wire_error(&self) -> bool {
        matches!(self, Error::Wire(_))
    }

    /// Check if this error means wire input was truncated.
    pub fn is_truncated_input(&self) -> bool {
        match self {
            Error::Wire(wire_err) => wire_err.is_truncated(),
            _ => false,
        }
    }
}
