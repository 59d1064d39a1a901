//! Fixed-length homogeneous array nodes.

use super::{element::Element, schema::ElementSchema};

/// A fixed-length sequence of independently-owned elements of one
/// declared type.
///
/// The length is fixed for the lifetime of the array and identical across
/// all instances of the same declared field.
#[derive(Debug, Clone)]
pub struct Array {
    element: ElementSchema,
    children: Vec<Element>,
}

impl Array {
    /// Instantiates an array of `len` cleared elements.
    pub fn new(len: usize, element: &ElementSchema) -> Self {
        let children = (0..len).map(|_| element.instantiate()).collect();
        Self {
            element: element.clone(),
            children,
        }
    }

    /// The declared element shape.
    pub fn element_schema(&self) -> &ElementSchema {
        &self.element
    }

    /// The fixed length.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the array has zero length.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    /// Mutable access to the element at `index`, if in bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    /// The elements in index order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to the elements.
    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Iterates the elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }
}
