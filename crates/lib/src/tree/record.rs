//! Fixed-schema record nodes.

use std::sync::Arc;

use super::{element::Element, schema::RecordSchema};

/// A fixed, ordered sequence of child elements.
///
/// A record's child count and per-position child types are determined by
/// its cached [`RecordSchema`] and never change after construction; only
/// the leaf values inside the children mutate.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<RecordSchema>,
    children: Vec<Element>,
}

impl Record {
    /// Instantiates a cleared record from its schema, children in
    /// declaration order.
    pub fn new(schema: &Arc<RecordSchema>) -> Self {
        let children = schema.fields.iter().map(|f| f.element.instantiate()).collect();
        Self {
            schema: schema.clone(),
            children,
        }
    }

    /// The record type name.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// The shared schema this record was instantiated from.
    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the record has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The children, in declaration order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Looks up a child by its declared field name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        let idx = self.schema.fields.iter().position(|f| f.name == name)?;
        self.children.get(idx)
    }

    /// Mutable lookup of a child by its declared field name.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        let idx = self.schema.fields.iter().position(|f| f.name == name)?;
        self.children.get_mut(idx)
    }
}
