//! Variant slot nodes.

use std::sync::Arc;

use super::{element::Element, schema::RecordSchema};

/// A record whose child types can be replaced wholesale.
///
/// A slot starts out with the child layout of its declared default record
/// type. At runtime the active layout can be swapped for another record
/// type's, either directly ([`Slot::set_child_types`]) or from another
/// slot instance during cloning ([`Slot::adopt_child_types`]). The current
/// schema acts as the tag of a tagged union; swapping it rebuilds the
/// children cleared.
#[derive(Debug, Clone)]
pub struct Slot {
    default: Arc<RecordSchema>,
    current: Arc<RecordSchema>,
    children: Vec<Element>,
}

impl Slot {
    /// Instantiates a slot holding cleared children of its default type.
    pub fn new(default: &Arc<RecordSchema>) -> Self {
        let children = default.fields.iter().map(|f| f.element.instantiate()).collect();
        Self {
            default: default.clone(),
            current: default.clone(),
            children,
        }
    }

    /// The declared default type name; this is the slot's nominal identity
    /// regardless of which variant is currently active.
    pub fn name(&self) -> &'static str {
        self.default.name
    }

    /// The declared default child layout.
    pub fn default_schema(&self) -> &Arc<RecordSchema> {
        &self.default
    }

    /// The currently active child layout.
    pub fn current_schema(&self) -> &Arc<RecordSchema> {
        &self.current
    }

    /// Number of children under the active layout.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the active layout has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The children, in the active layout's declaration order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Looks up a child by field name in the active layout.
    pub fn child(&self, name: &str) -> Option<&Element> {
        let idx = self.current.fields.iter().position(|f| f.name == name)?;
        self.children.get(idx)
    }

    /// Mutable lookup of a child by field name in the active layout.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        let idx = self.current.fields.iter().position(|f| f.name == name)?;
        self.children.get_mut(idx)
    }

    /// Replaces the active child layout, rebuilding all children cleared.
    ///
    /// Existing child values are discarded; callers that need them must
    /// merge them back from another tree afterwards.
    pub fn set_child_types(&mut self, schema: &Arc<RecordSchema>) {
        self.current = schema.clone();
        self.children = schema.fields.iter().map(|f| f.element.instantiate()).collect();
    }

    /// Adopts the other slot's active child types into this slot.
    ///
    /// The adoption is shallow: nested slots inside the adopted layout come
    /// up with their own defaults, and a zipped walk (such as the clone
    /// operation) carries their active types across when it descends.
    pub fn adopt_child_types(&mut self, other: &Slot) {
        if Arc::ptr_eq(&self.current, &other.current) {
            return;
        }
        tracing::trace!(slot = self.name(), variant = other.current.name, "adopting child types");
        self.set_child_types(&other.current);
    }
}
