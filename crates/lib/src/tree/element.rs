//! The polymorphic tree node.

use std::{fmt, sync::Arc};

use super::{array::Array, leaf::Leaf, record::Record, slot::Slot};

/// The four node shapes a tree is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Optional-value leaf
    Leaf,
    /// Fixed-schema record
    Record,
    /// Variant slot
    Slot,
    /// Fixed-length array
    Array,
}

impl ElementKind {
    /// Returns the kind name as a string
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Leaf => "leaf",
            ElementKind::Record => "record",
            ElementKind::Slot => "slot",
            ElementKind::Array => "array",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any node in a state tree.
///
/// Every concrete node is exactly one of the four shapes; a node is owned
/// by exactly one parent position and is never shared between trees. The
/// borrow checker enforces the no-aliasing discipline: zipped operations
/// take the mutated tree by `&mut` and the sources by `&`, so a tree can
/// never be zipped against itself while being written.
#[derive(Debug, Clone)]
pub enum Element {
    /// Optional-value leaf
    Leaf(Leaf),
    /// Fixed-schema record
    Record(Record),
    /// Variant slot
    Slot(Slot),
    /// Fixed-length array
    Array(Array),
}

impl Element {
    /// Returns the shape of this node.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Leaf(_) => ElementKind::Leaf,
            Element::Record(_) => ElementKind::Record,
            Element::Slot(_) => ElementKind::Slot,
            Element::Array(_) => ElementKind::Array,
        }
    }

    /// Returns the concrete type name: the value kind for leaves, the
    /// schema name for records and slots, `"array"` for arrays.
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Leaf(l) => l.kind().as_str(),
            Element::Record(r) => r.name(),
            Element::Slot(s) => s.name(),
            Element::Array(_) => "array",
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf(_))
    }

    /// Whether this node can contain other nodes.
    pub fn is_composite(&self) -> bool {
        !self.is_leaf()
    }

    /// Attempts to view this node as a leaf
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Element::Leaf(l) => Some(l),
            _ => None,
        }
    }

    /// Attempts to view this node as a mutable leaf
    pub fn as_leaf_mut(&mut self) -> Option<&mut Leaf> {
        match self {
            Element::Leaf(l) => Some(l),
            _ => None,
        }
    }

    /// Attempts to view this node as a record
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Element::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Attempts to view this node as a mutable record
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Element::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Attempts to view this node as a slot
    pub fn as_slot(&self) -> Option<&Slot> {
        match self {
            Element::Slot(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view this node as a mutable slot
    pub fn as_slot_mut(&mut self) -> Option<&mut Slot> {
        match self {
            Element::Slot(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view this node as an array
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Element::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to view this node as a mutable array
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Element::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The node's children; empty for leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Leaf(_) => &[],
            Element::Record(r) => r.children(),
            Element::Slot(s) => s.children(),
            Element::Array(a) => a.children(),
        }
    }

    /// Mutable access to the node's children; empty for leaves.
    pub fn children_mut(&mut self) -> &mut [Element] {
        match self {
            Element::Leaf(_) => &mut [],
            Element::Record(r) => r.children_mut(),
            Element::Slot(s) => s.children_mut(),
            Element::Array(a) => a.children_mut(),
        }
    }

    /// Number of children; zero for leaves.
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Whether two nodes are of the same concrete type.
    ///
    /// Leaves compare by value kind, records by schema identity, slots by
    /// their declared default type (the active variant is content, not
    /// type), arrays by length and element type.
    pub fn same_type(&self, other: &Element) -> bool {
        match (self, other) {
            (Element::Leaf(a), Element::Leaf(b)) => a.kind() == b.kind(),
            (Element::Record(a), Element::Record(b)) => {
                Arc::ptr_eq(a.schema(), b.schema()) || a.name() == b.name()
            }
            (Element::Slot(a), Element::Slot(b)) => {
                Arc::ptr_eq(a.default_schema(), b.default_schema()) || a.name() == b.name()
            }
            (Element::Array(a), Element::Array(b)) => {
                a.len() == b.len() && a.element_schema().same_type(b.element_schema())
            }
            _ => false,
        }
    }

    /// Builds a fresh, cleared tree of the same declared type as this one.
    ///
    /// Slots come up with their default child layout; carrying an active
    /// variant across is the clone operation's adoption pass.
    pub fn fresh_default(&self) -> Element {
        match self {
            Element::Leaf(l) => Element::Leaf(
                Leaf::new(l.kind())
                    .with_policy(l.policy())
                    .with_suppress_serialize(l.suppress_serialize()),
            ),
            Element::Record(r) => Element::Record(Record::new(r.schema())),
            Element::Slot(s) => Element::Slot(Slot::new(s.default_schema())),
            Element::Array(a) => Element::Array(Array::new(a.len(), a.element_schema())),
        }
    }
}
