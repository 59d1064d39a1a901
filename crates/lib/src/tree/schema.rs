//! Static schema declaration and the per-type schema cache.
//!
//! Every concrete record type declares its ordered child slots exactly once
//! through [`RecordType::declare`]. The first use of a type computes its
//! [`RecordSchema`] and caches it forever, keyed by `TypeId`; repeated
//! lookups return the same shared schema. The cache guarantees the
//! discovery contract the rest of the crate relies on: same field order
//! every declaration, no silently skipped fields, idempotent caching.

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, LazyLock, RwLock},
};

use super::{
    array::Array,
    element::Element,
    leaf::{InterpolationPolicy, Leaf},
    record::Record,
    slot::Slot,
    value::ValueKind,
};

/// The declared shape of one child position inside a record.
#[derive(Debug, Clone)]
pub enum ElementSchema {
    /// A typed optional-value leaf
    Leaf {
        kind: ValueKind,
        policy: InterpolationPolicy,
        suppress_serialize: bool,
    },
    /// A nested record of a fixed concrete type
    Record(Arc<RecordSchema>),
    /// A slot whose child types default to the given record type but can be
    /// replaced wholesale at runtime
    Slot(Arc<RecordSchema>),
    /// A fixed-length homogeneous array
    Array { len: usize, element: Box<ElementSchema> },
}

impl ElementSchema {
    /// Declares a leaf with default interpolation and serialization flags.
    pub fn leaf(kind: ValueKind) -> Self {
        ElementSchema::Leaf {
            kind,
            policy: InterpolationPolicy::default(),
            suppress_serialize: false,
        }
    }

    /// Declares a leaf with explicit per-field flags.
    pub fn leaf_with(kind: ValueKind, policy: InterpolationPolicy, suppress_serialize: bool) -> Self {
        ElementSchema::Leaf {
            kind,
            policy,
            suppress_serialize,
        }
    }

    /// Declares a nested record of type `T`.
    pub fn record<T: RecordType>() -> Self {
        ElementSchema::Record(schema_of::<T>())
    }

    /// Declares a slot defaulting to the child types of `T`.
    pub fn slot<T: RecordType>() -> Self {
        ElementSchema::Slot(schema_of::<T>())
    }

    /// Declares a fixed-length array of the given element shape.
    pub fn array(len: usize, element: ElementSchema) -> Self {
        ElementSchema::Array {
            len,
            element: Box::new(element),
        }
    }

    /// Builds a fresh, cleared element of this declared shape.
    pub fn instantiate(&self) -> Element {
        match self {
            ElementSchema::Leaf {
                kind,
                policy,
                suppress_serialize,
            } => Element::Leaf(
                Leaf::new(*kind)
                    .with_policy(*policy)
                    .with_suppress_serialize(*suppress_serialize),
            ),
            ElementSchema::Record(schema) => Element::Record(Record::new(schema)),
            ElementSchema::Slot(default) => Element::Slot(Slot::new(default)),
            ElementSchema::Array { len, element } => Element::Array(Array::new(*len, element)),
        }
    }

    /// Whether two declared shapes denote the same element type.
    ///
    /// Leaves compare by value kind, records and slots by schema identity,
    /// arrays by length and element type. Per-field flags are not part of
    /// the type.
    pub fn same_type(&self, other: &ElementSchema) -> bool {
        match (self, other) {
            (ElementSchema::Leaf { kind: a, .. }, ElementSchema::Leaf { kind: b, .. }) => a == b,
            (ElementSchema::Record(a), ElementSchema::Record(b))
            | (ElementSchema::Slot(a), ElementSchema::Slot(b)) => {
                Arc::ptr_eq(a, b) || a.name == b.name
            }
            (
                ElementSchema::Array { len: a, element: ea },
                ElementSchema::Array { len: b, element: eb },
            ) => a == b && ea.same_type(eb),
            _ => false,
        }
    }
}

/// One named child position of a record.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Field name, unique within its record
    pub name: &'static str,
    /// Declared shape of the child at this position
    pub element: ElementSchema,
}

/// The fixed, ordered child layout of a concrete record type.
///
/// Two records of the same concrete type always share one cached
/// `RecordSchema`, so they invariantly agree on child count and
/// per-position child types.
#[derive(Debug)]
pub struct RecordSchema {
    /// Record type name
    pub name: &'static str,
    /// Ordered child declarations
    pub fields: Vec<FieldSchema>,
}

/// Ordered builder for a record type's child declarations.
///
/// Handed to [`RecordType::declare`] exactly once per concrete type.
/// Fields are instantiated in declaration order, and every declared field
/// is part of the schema; there is no skipping.
#[derive(Debug)]
pub struct RecordBuilder {
    name: &'static str,
    fields: Vec<FieldSchema>,
}

impl RecordBuilder {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Declares a child of an explicit shape.
    pub fn field(&mut self, name: &'static str, element: ElementSchema) -> &mut Self {
        debug_assert!(
            self.fields.iter().all(|f| f.name != name),
            "duplicate field name {name:?} in record {:?}",
            self.name
        );
        self.fields.push(FieldSchema { name, element });
        self
    }

    /// Declares a leaf child with default flags.
    pub fn leaf(&mut self, name: &'static str, kind: ValueKind) -> &mut Self {
        self.field(name, ElementSchema::leaf(kind))
    }

    /// Declares a leaf child with explicit interpolation policy and
    /// serialization suppression.
    pub fn leaf_with(
        &mut self,
        name: &'static str,
        kind: ValueKind,
        policy: InterpolationPolicy,
        suppress_serialize: bool,
    ) -> &mut Self {
        self.field(name, ElementSchema::leaf_with(kind, policy, suppress_serialize))
    }

    /// Declares a nested record child of type `T`.
    pub fn record<T: RecordType>(&mut self, name: &'static str) -> &mut Self {
        self.field(name, ElementSchema::record::<T>())
    }

    /// Declares a slot child defaulting to the child types of `T`.
    pub fn slot<T: RecordType>(&mut self, name: &'static str) -> &mut Self {
        self.field(name, ElementSchema::slot::<T>())
    }

    /// Declares a fixed-length array child.
    pub fn array(&mut self, name: &'static str, len: usize, element: ElementSchema) -> &mut Self {
        self.field(name, ElementSchema::array(len, element))
    }

    fn build(self) -> RecordSchema {
        RecordSchema {
            name: self.name,
            fields: self.fields,
        }
    }
}

/// A concrete record type with a statically declared child layout.
///
/// # Examples
///
/// ```
/// use snapstate::tree::{RecordBuilder, RecordType, ValueKind, schema};
///
/// struct Position;
///
/// impl RecordType for Position {
///     const NAME: &'static str = "Position";
///
///     fn declare(b: &mut RecordBuilder) {
///         b.leaf("x", ValueKind::F32).leaf("y", ValueKind::F32);
///     }
/// }
///
/// let root = schema::instance::<Position>();
/// assert_eq!(root.child_count(), 2);
/// ```
pub trait RecordType: 'static {
    /// Stable type name, used for schema identity across versions.
    const NAME: &'static str;

    /// Declares the ordered child slots of this record type.
    ///
    /// Called exactly once per process for each concrete type; the result
    /// is cached. Must declare the same fields in the same order on every
    /// call.
    fn declare(b: &mut RecordBuilder);
}

static SCHEMAS: LazyLock<RwLock<HashMap<TypeId, Arc<RecordSchema>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the cached schema of `T`, computing it on first use.
///
/// Lookups after the first are a read-locked map hit; the returned `Arc`
/// is the same shared instance every time.
pub fn schema_of<T: RecordType>() -> Arc<RecordSchema> {
    let id = TypeId::of::<T>();
    if let Some(schema) = SCHEMAS.read().unwrap().get(&id) {
        return schema.clone();
    }
    // Compute outside the lock: declare() recurses into schema_of for
    // nested record and slot fields.
    let mut builder = RecordBuilder::new(T::NAME);
    T::declare(&mut builder);
    let schema = Arc::new(builder.build());
    tracing::debug!(record = T::NAME, fields = schema.fields.len(), "declared record schema");
    SCHEMAS
        .write()
        .unwrap()
        .entry(id)
        .or_insert(schema)
        .clone()
}

/// Builds a fresh, cleared tree rooted at a record of type `T`.
pub fn instance<T: RecordType>() -> Element {
    Element::Record(Record::new(&schema_of::<T>()))
}
