//! Leaf presence, equality, and merge semantics.

use snapstate::tree::{F32_TOLERANCE, InterpolationPolicy, Leaf, Value, ValueKind};

#[test]
fn test_presence_round_trip() {
    let mut l = Leaf::new(ValueKind::F32);

    // Absent leaves fail to read, they never default
    assert!(!l.is_present());
    let err = l.get().unwrap_err();
    assert!(err.is_without_value());
    assert_eq!(err.module(), "tree");

    l.set(4.5f32).unwrap();
    assert!(l.is_present());
    assert_eq!(l.get().unwrap(), Value::F32(4.5));

    l.clear();
    assert!(!l.is_present());
    assert!(l.get().unwrap_err().is_without_value());
}

#[test]
fn test_get_or_never_fails() {
    let mut l = Leaf::new(ValueKind::I32);
    assert_eq!(l.get_or(Value::I32(-1)), Value::I32(-1));
    l.set(7i32).unwrap();
    assert_eq!(l.get_or(Value::I32(-1)), Value::I32(7));
}

#[test]
fn test_zeroed_is_a_present_default() {
    let mut l = Leaf::new(ValueKind::U64);
    l.zeroed();
    // Distinct from clear(): the zero value is present and readable
    assert!(l.is_present());
    assert_eq!(l.get().unwrap(), Value::U64(0));

    l.set(9u64).unwrap();
    l.clear();
    assert!(!l.is_present());
}

#[test]
fn test_set_rejects_wrong_kind() {
    let mut l = Leaf::new(ValueKind::F32);
    let err = l.set(1i32).unwrap_err();
    assert!(err.is_type_mismatch());
    // The failed set leaves the leaf untouched
    assert!(!l.is_present());
}

#[test]
fn test_leaf_equality_rules() {
    let mut a = Leaf::new(ValueKind::F32);
    let mut b = Leaf::new(ValueKind::F32);

    // Both absent compare equal
    assert!(a.leaf_eq(&b));

    // Present vs absent compare unequal
    a.set(1.0f32).unwrap();
    assert!(!a.leaf_eq(&b));

    // Present values compare with tolerance
    b.set(1.0f32 + F32_TOLERANCE / 2.0).unwrap();
    assert!(a.leaf_eq(&b));
    b.set(1.1f32).unwrap();
    assert!(!a.leaf_eq(&b));

    // Kind mismatch is inequality, not an error
    let other_kind = Leaf::new(ValueKind::F64);
    assert!(!a.leaf_eq(&other_kind));
}

#[test]
fn test_merge_is_presence_gated() {
    let mut dest = Leaf::new(ValueKind::I32);
    let mut src = Leaf::new(ValueKind::I32);

    // Absent source never clears a present destination
    dest.set(5i32).unwrap();
    dest.merge_from(&src).unwrap();
    assert_eq!(dest.get().unwrap(), Value::I32(5));

    // Present source overwrites
    src.set(9i32).unwrap();
    dest.merge_from(&src).unwrap();
    assert_eq!(dest.get().unwrap(), Value::I32(9));

    // Kind mismatch fails immediately
    let alien = Leaf::new(ValueKind::U32);
    assert!(dest.merge_from(&alien).unwrap_err().is_type_mismatch());
}

#[test]
fn test_interpolate_requires_both_sources_present() {
    let mut dest = Leaf::new(ValueKind::F32);
    let mut p1 = Leaf::new(ValueKind::F32);
    let mut p2 = Leaf::new(ValueKind::F32);

    p1.set(1.0f32).unwrap();
    assert!(dest.interpolate_from(&p1, &p2, 0.5).unwrap_err().is_without_value());

    p2.set(3.0f32).unwrap();
    dest.interpolate_from(&p1, &p2, 0.5).unwrap();
    assert_eq!(dest.get().unwrap(), Value::F32(2.0));
}

#[test]
fn test_leaf_builder_flags() {
    let l = Leaf::new(ValueKind::F32)
        .with_policy(InterpolationPolicy::TakeSecond)
        .with_suppress_serialize(true);
    assert_eq!(l.policy(), InterpolationPolicy::TakeSecond);
    assert!(l.suppress_serialize());
}
