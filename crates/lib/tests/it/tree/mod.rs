//! State tree integration tests
//!
//! This module tests the tree data model end to end: leaf presence
//! semantics, schema declaration and caching, the zipped traversal engine,
//! the derived operations, and the wire format.

mod leaf_tests;
mod navigate_tests;
mod value_tests;
