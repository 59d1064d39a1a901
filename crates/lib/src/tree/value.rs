//! Leaf value types for state trees.
//!
//! This module provides the closed set of plain value types a [`Leaf`]
//! can hold, together with the per-type behavior the rest of the crate
//! builds on: tolerance-based equality for floating-point kinds, linear
//! interpolation, zero representations, and the fixed-width little-endian
//! encoding used by the wire format.
//!
//! [`Leaf`]: super::leaf::Leaf

use std::fmt;

/// Comparison tolerance for `f32` leaf values.
pub const F32_TOLERANCE: f32 = 1e-5;

/// Comparison tolerance for `f64` leaf values.
pub const F64_TOLERANCE: f64 = 1e-9;

/// The declared type of a leaf value.
///
/// Every leaf is bound to one kind at schema declaration time and keeps it
/// for the lifetime of the tree. The kind determines the value's zero
/// representation, its wire width, and how two snapshots of it compare
/// and interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ValueKind {
    /// Boolean flag
    Bool,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Three-component 32-bit float vector
    Vec3,
}

impl ValueKind {
    /// Returns the zero representation for this kind.
    ///
    /// This is the value a cleared or zeroed leaf holds.
    pub fn zero(self) -> Value {
        match self {
            ValueKind::Bool => Value::Bool(false),
            ValueKind::I32 => Value::I32(0),
            ValueKind::I64 => Value::I64(0),
            ValueKind::U32 => Value::U32(0),
            ValueKind::U64 => Value::U64(0),
            ValueKind::F32 => Value::F32(0.0),
            ValueKind::F64 => Value::F64(0.0),
            ValueKind::Vec3 => Value::Vec3([0.0; 3]),
        }
    }

    /// Returns the fixed wire width of a value of this kind, in bytes.
    ///
    /// The width excludes the presence byte, which the wire layer owns.
    pub fn width(self) -> usize {
        match self {
            ValueKind::Bool => 1,
            ValueKind::I32 | ValueKind::U32 | ValueKind::F32 => 4,
            ValueKind::I64 | ValueKind::U64 | ValueKind::F64 => 8,
            ValueKind::Vec3 => 12,
        }
    }

    /// Returns the type name as a string
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Vec3 => "vec3",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plain leaf value.
///
/// `Value` is a small `Copy` type: numeric kinds, booleans, and the
/// three-component float vector used for positions and directions. It
/// carries no presence information of its own; presence lives on the
/// owning [`Leaf`].
///
/// # Examples
///
/// ```
/// use snapstate::tree::{Value, ValueKind};
///
/// let v = Value::from(3.5f32);
/// assert_eq!(v.kind(), ValueKind::F32);
/// assert_eq!(v.as_f32(), Some(3.5));
/// assert_eq!(v.as_i32(), None);
/// ```
///
/// [`Leaf`]: super::leaf::Leaf
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// Boolean flag
    Bool(bool),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// Three-component 32-bit float vector
    Vec3([f32; 3]),
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Vec3(_) => ValueKind::Vec3,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an `i32`
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to an `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a `u32`
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U32(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a `u64`
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to an `f32`
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::F32(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to convert to an `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to convert to a three-component vector
    pub fn as_vec3(&self) -> Option<[f32; 3]> {
        match self {
            Value::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Compares two values using the per-kind equality of their type.
    ///
    /// Returns `false` if the kinds differ. Floating-point kinds compare
    /// within [`F32_TOLERANCE`] / [`F64_TOLERANCE`] so that interpolated
    /// snapshots and wire round-trips compare equal.
    pub fn approx_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => (a - b).abs() < F32_TOLERANCE,
            (Value::F64(a), Value::F64(b)) => (a - b).abs() < F64_TOLERANCE,
            (Value::Vec3(a), Value::Vec3(b)) => {
                a.iter().zip(b).all(|(x, y)| (x - y).abs() < F32_TOLERANCE)
            }
            _ => false,
        }
    }

    /// Blends two values of the same kind at parameter `t`.
    ///
    /// Floating-point kinds interpolate linearly (`a + (b - a) * t`,
    /// component-wise for vectors). All other kinds take the second value
    /// regardless of `t`. Callers are responsible for checking that the
    /// kinds match; on a kind mismatch the second value wins.
    pub fn lerp(self, other: Value, t: f32) -> Value {
        match (self, other) {
            (Value::F32(a), Value::F32(b)) => Value::F32(a + (b - a) * t),
            (Value::F64(a), Value::F64(b)) => Value::F64(a + (b - a) * f64::from(t)),
            (Value::Vec3(a), Value::Vec3(b)) => {
                let mut out = [0.0f32; 3];
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = a[i] + (b[i] - a[i]) * t;
                }
                Value::Vec3(out)
            }
            (_, second) => second,
        }
    }

    /// Appends the fixed-width little-endian encoding of this value.
    pub fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Value::Bool(b) => out.push(u8::from(*b)),
            Value::I32(n) => out.extend_from_slice(&n.to_le_bytes()),
            Value::I64(n) => out.extend_from_slice(&n.to_le_bytes()),
            Value::U32(n) => out.extend_from_slice(&n.to_le_bytes()),
            Value::U64(n) => out.extend_from_slice(&n.to_le_bytes()),
            Value::F32(x) => out.extend_from_slice(&x.to_le_bytes()),
            Value::F64(x) => out.extend_from_slice(&x.to_le_bytes()),
            Value::Vec3(v) => {
                for x in v {
                    out.extend_from_slice(&x.to_le_bytes());
                }
            }
        }
    }

    /// Decodes a value of the given kind from the front of `bytes`.
    ///
    /// Returns `None` if `bytes` is shorter than [`ValueKind::width`].
    pub fn decode(kind: ValueKind, bytes: &[u8]) -> Option<Value> {
        if bytes.len() < kind.width() {
            return None;
        }
        let v = match kind {
            ValueKind::Bool => Value::Bool(bytes[0] != 0),
            ValueKind::I32 => Value::I32(i32::from_le_bytes(bytes[..4].try_into().ok()?)),
            ValueKind::I64 => Value::I64(i64::from_le_bytes(bytes[..8].try_into().ok()?)),
            ValueKind::U32 => Value::U32(u32::from_le_bytes(bytes[..4].try_into().ok()?)),
            ValueKind::U64 => Value::U64(u64::from_le_bytes(bytes[..8].try_into().ok()?)),
            ValueKind::F32 => Value::F32(f32::from_le_bytes(bytes[..4].try_into().ok()?)),
            ValueKind::F64 => Value::F64(f64::from_le_bytes(bytes[..8].try_into().ok()?)),
            ValueKind::Vec3 => {
                let mut v = [0.0f32; 3];
                for (i, slot) in v.iter_mut().enumerate() {
                    *slot = f32::from_le_bytes(bytes[i * 4..i * 4 + 4].try_into().ok()?);
                }
                Value::Vec3(v)
            }
        };
        Some(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::I32(n) => write!(f, "{n}"),
            Value::I64(n) => write!(f, "{n}"),
            Value::U32(n) => write!(f, "{n}"),
            Value::U64(n) => write!(f, "{n}"),
            Value::F32(x) => write!(f, "{x}"),
            Value::F64(x) => write!(f, "{x}"),
            Value::Vec3(v) => write!(f, "({}, {}, {})", v[0], v[1], v[2]),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::U32(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::F32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::F64(x)
    }
}

impl From<[f32; 3]> for Value {
    fn from(v: [f32; 3]) -> Self {
        Value::Vec3(v)
    }
}
