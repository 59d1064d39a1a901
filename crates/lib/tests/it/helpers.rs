//! Shared schema fixtures and tree accessors for the test suite.

use snapstate::tree::{
    Element, InterpolationPolicy, Leaf, RecordBuilder, RecordType, Value, ValueKind,
};

/// Two-float position record, the canonical interpolation fixture.
pub struct Position;

impl RecordType for Position {
    const NAME: &'static str = "Position";

    fn declare(b: &mut RecordBuilder) {
        b.leaf("x", ValueKind::F32).leaf("y", ValueKind::F32);
    }
}

/// Default weapon variant.
pub struct Fists;

impl RecordType for Fists {
    const NAME: &'static str = "Fists";

    fn declare(b: &mut RecordBuilder) {
        b.leaf("damage", ValueKind::I32);
    }
}

/// Alternate weapon variant with an extra field.
pub struct Sword;

impl RecordType for Sword {
    const NAME: &'static str = "Sword";

    fn declare(b: &mut RecordBuilder) {
        b.leaf("damage", ValueKind::I32).leaf("durability", ValueKind::U32);
    }
}

/// Weapon variant that itself contains slots, for nested-adoption tests.
pub struct DualWield;

impl RecordType for DualWield {
    const NAME: &'static str = "DualWield";

    fn declare(b: &mut RecordBuilder) {
        b.slot::<Fists>("main").slot::<Fists>("off");
    }
}

/// A player's replicated state: leaves of several kinds, a nested record,
/// per-field interpolation policies, a suppressed leaf, a variant slot,
/// and a fixed-length array.
pub struct PlayerState;

impl RecordType for PlayerState {
    const NAME: &'static str = "PlayerState";

    fn declare(b: &mut RecordBuilder) {
        use snapstate::tree::ElementSchema;

        b.leaf("health", ValueKind::I32)
            .record::<Position>("position")
            .leaf_with("facing", ValueKind::F32, InterpolationPolicy::TakeSecond, false)
            .leaf_with("aim", ValueKind::F32, InterpolationPolicy::Custom, false)
            .leaf_with("session_token", ValueKind::U64, InterpolationPolicy::Default, true)
            .slot::<Fists>("weapon")
            .array("ammo", 3, ElementSchema::leaf(ValueKind::U32));
    }
}

/// Three-leaf record for truncation tests.
pub struct Wide;

impl RecordType for Wide {
    const NAME: &'static str = "Wide";

    fn declare(b: &mut RecordBuilder) {
        b.leaf("a", ValueKind::F32).leaf("b", ValueKind::F32).leaf("c", ValueKind::F32);
    }
}

/// Same prefix as [`Wide`] but the child type at index 2 differs.
pub struct WidePrefix;

impl RecordType for WidePrefix {
    const NAME: &'static str = "WidePrefix";

    fn declare(b: &mut RecordBuilder) {
        b.leaf("a", ValueKind::F32).leaf("b", ValueKind::F32).leaf("c", ValueKind::I64);
    }
}

/// Two-leaf prefix of [`Wide`].
pub struct Narrow;

impl RecordType for Narrow {
    const NAME: &'static str = "Narrow";

    fn declare(b: &mut RecordBuilder) {
        b.leaf("a", ValueKind::F32).leaf("b", ValueKind::F32);
    }
}

/// Named child of a record or slot element.
pub fn child<'a>(e: &'a Element, name: &str) -> &'a Element {
    match e {
        Element::Record(r) => r.child(name),
        Element::Slot(s) => s.child(name),
        other => panic!("expected record or slot, got {}", other.kind()),
    }
    .unwrap_or_else(|| panic!("no field named {name:?}"))
}

/// Mutable named child of a record or slot element.
pub fn child_mut<'a>(e: &'a mut Element, name: &str) -> &'a mut Element {
    match e {
        Element::Record(r) => r.child_mut(name),
        Element::Slot(s) => s.child_mut(name),
        other => panic!("expected record or slot, got {}", other.kind()),
    }
    .unwrap_or_else(|| panic!("no field named {name:?}"))
}

/// Named leaf child.
pub fn leaf<'a>(e: &'a Element, name: &str) -> &'a Leaf {
    child(e, name).as_leaf().expect("field is not a leaf")
}

/// Mutable named leaf child.
pub fn leaf_mut<'a>(e: &'a mut Element, name: &str) -> &'a mut Leaf {
    child_mut(e, name).as_leaf_mut().expect("field is not a leaf")
}

/// Sets a named leaf child's value.
pub fn set_leaf(e: &mut Element, name: &str, value: impl Into<Value>) {
    leaf_mut(e, name).set(value).expect("set failed");
}

/// Reads a named leaf child's value, panicking if absent.
pub fn leaf_value(e: &Element, name: &str) -> Value {
    leaf(e, name).get().expect("leaf is absent")
}
