//! Value accessors, display, and diagnostics serialization.

use snapstate::tree::{Value, ValueKind};

#[test]
fn test_value_accessors_are_kind_strict() {
    let v = Value::from(42u32);
    assert_eq!(v.kind(), ValueKind::U32);
    assert_eq!(v.as_u32(), Some(42));
    assert_eq!(v.as_i32(), None);
    assert_eq!(v.as_f32(), None);

    let v = Value::from([1.0f32, 2.0, 3.0]);
    assert_eq!(v.as_vec3(), Some([1.0, 2.0, 3.0]));
    assert_eq!(v.as_f32(), None);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::I64(-3).to_string(), "-3");
    assert_eq!(Value::Vec3([1.0, 2.5, 0.0]).to_string(), "(1, 2.5, 0)");
    assert_eq!(ValueKind::F64.to_string(), "f64");
}

#[test]
fn test_value_serializes_for_diagnostics() {
    // Hosts dump snapshot values as JSON when inspecting replicated state
    let json = serde_json::to_string(&Value::F32(1.5)).unwrap();
    assert_eq!(json, r#"{"F32":1.5}"#);

    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Value::F32(1.5));

    let kind: ValueKind = serde_json::from_str(r#""Vec3""#).unwrap();
    assert_eq!(kind, ValueKind::Vec3);
}
