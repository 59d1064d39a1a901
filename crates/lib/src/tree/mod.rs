//! Tree-structured, partially-populated state for simulation and replay.
//!
//! This module implements a hierarchy of typed leaf values grouped into
//! fixed-schema records, variant slots, and fixed-length arrays. The same
//! tree shape is instantiated on every peer from a statically declared
//! schema, then repeatedly reset, merged, interpolated, and shipped over
//! the wire each tick.
//!
//! # Core Types
//!
//! - [`Element`] - The polymorphic node: every node is a leaf, record, slot, or array
//! - [`Leaf`] - A typed slot that either holds a [`Value`] or holds nothing
//! - [`Record`] - A fixed, ordered sequence of child elements
//! - [`Slot`] - A record whose child types can be replaced wholesale
//! - [`Array`] - A fixed-length homogeneous sequence of elements
//!
//! # Traversal and Operations
//!
//! All derived operations ([`ops::reset`], [`ops::zero`], [`ops::clone_tree`],
//! [`ops::structural_eq`], [`ops::merge_from`], [`ops::interpolate_from`]) are
//! thin visitors over the zipped traversal engine in [`navigate`], which walks
//! up to three congruent trees in lockstep without allocating per node.

// Value first, everything else builds on it
pub mod value;

pub mod array;
pub mod element;
pub mod errors;
pub mod leaf;
pub mod navigate;
pub mod ops;
pub mod record;
pub mod schema;
pub mod slot;
pub mod wire;

pub use array::Array;
pub use element::{Element, ElementKind};
pub use errors::TreeError;
pub use leaf::{InterpolationPolicy, Leaf};
pub use navigate::{Step, navigate, navigate_mut};
pub use record::Record;
pub use schema::{ElementSchema, FieldSchema, RecordBuilder, RecordSchema, RecordType};
pub use slot::Slot;
pub use value::{F32_TOLERANCE, F64_TOLERANCE, Value, ValueKind};
