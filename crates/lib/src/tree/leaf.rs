//! The optional-value leaf.
//!
//! A [`Leaf`] is the only node with no children: a typed slot that either
//! holds a [`Value`] of its declared kind or holds nothing, with explicit
//! presence tracking. Reading an absent leaf is a contract violation and
//! surfaces as [`TreeError::WithoutValue`], never a silent default.

use super::{
    errors::TreeError,
    value::{Value, ValueKind},
};
use crate::Result;

/// How a leaf participates in snapshot interpolation.
///
/// The policy is declared per field at schema declaration time and
/// consulted by [`ops::interpolate_from`] at every zipped leaf triple.
///
/// [`ops::interpolate_from`]: super::ops::interpolate_from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpolationPolicy {
    /// Interpolate by the value type's own rule: floating-point kinds blend
    /// linearly, every other kind takes the second snapshot's value.
    #[default]
    Default,
    /// Skip the leaf entirely; some other mechanism writes the destination.
    Custom,
    /// Take the second snapshot's value regardless of the blend parameter.
    TakeSecond,
}

/// A typed leaf that either holds a value or holds nothing.
///
/// Setting a value always marks the leaf present; clearing marks it absent
/// and resets the stored bytes to the kind's zero representation (the reset
/// is not observable through the presence-checked API, it only avoids
/// carrying stale state).
///
/// # Examples
///
/// ```
/// use snapstate::tree::{Leaf, Value, ValueKind};
///
/// let mut hp = Leaf::new(ValueKind::I32);
/// assert!(!hp.is_present());
/// assert!(hp.get().is_err());
///
/// hp.set(100i32).unwrap();
/// assert_eq!(hp.get().unwrap(), Value::I32(100));
///
/// hp.clear();
/// assert_eq!(hp.get_or(Value::I32(-1)), Value::I32(-1));
/// ```
#[derive(Debug, Clone)]
pub struct Leaf {
    kind: ValueKind,
    value: Value,
    present: bool,
    policy: InterpolationPolicy,
    suppress_serialize: bool,
}

impl Leaf {
    /// Creates an absent leaf of the given kind with default flags.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            value: kind.zero(),
            present: false,
            policy: InterpolationPolicy::default(),
            suppress_serialize: false,
        }
    }

    /// Builder method to set the interpolation policy
    pub fn with_policy(mut self, policy: InterpolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method to exclude this leaf from the wire format
    pub fn with_suppress_serialize(mut self, suppress: bool) -> Self {
        self.suppress_serialize = suppress;
        self
    }

    /// The declared value kind of this leaf.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The declared interpolation policy of this leaf.
    pub fn policy(&self) -> InterpolationPolicy {
        self.policy
    }

    /// Whether this leaf is skipped by the wire format.
    ///
    /// Writer and reader must agree on this flag out-of-band; it is part of
    /// the schema, never of the stream.
    pub fn suppress_serialize(&self) -> bool {
        self.suppress_serialize
    }

    /// Whether this leaf currently holds a value.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WithoutValue`] if the leaf is absent.
    pub fn get(&self) -> Result<Value> {
        if self.present {
            Ok(self.value)
        } else {
            Err(TreeError::WithoutValue { kind: self.kind }.into())
        }
    }

    /// Returns the held value, or `default` if the leaf is absent.
    pub fn get_or(&self, default: Value) -> Value {
        if self.present { self.value } else { default }
    }

    /// Stores a value and marks the leaf present.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TypeMismatch`] if the value's kind differs from
    /// the leaf's declared kind.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.kind() != self.kind {
            return Err(TreeError::TypeMismatch {
                expected: self.kind.as_str().to_string(),
                actual: value.type_name().to_string(),
            }
            .into());
        }
        self.value = value;
        self.present = true;
        Ok(())
    }

    /// Marks the leaf absent and resets the stored value to zero.
    pub fn clear(&mut self) {
        self.present = false;
        self.value = self.kind.zero();
    }

    /// Stores the kind's zero representation and marks the leaf present.
    ///
    /// Distinct from [`Leaf::clear`]: this produces a present default, not
    /// an absent value.
    pub fn zeroed(&mut self) {
        self.value = self.kind.zero();
        self.present = true;
    }

    /// Compares two leaves by presence and per-kind value equality.
    ///
    /// Returns `false` if the kinds differ, `true` if both leaves are
    /// absent, and otherwise compares the values with [`Value::approx_eq`].
    pub fn leaf_eq(&self, other: &Leaf) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match (self.present, other.present) {
            (false, false) => true,
            (true, true) => self.value.approx_eq(&other.value),
            _ => false,
        }
    }

    /// Copies the other leaf's value into this one if the other is present.
    ///
    /// An absent source is a no-op; a merge never clears a present value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TypeMismatch`] if the leaf kinds differ.
    pub fn merge_from(&mut self, other: &Leaf) -> Result<()> {
        if self.kind != other.kind {
            return Err(TreeError::TypeMismatch {
                expected: self.kind.as_str().to_string(),
                actual: other.kind.as_str().to_string(),
            }
            .into());
        }
        if other.present {
            self.value = other.value;
            self.present = true;
        }
        Ok(())
    }

    /// Writes the blend of two source leaves at parameter `t` into this one.
    ///
    /// Interpolation is only defined between two present sources; floats
    /// blend linearly, every other kind takes the second value (see
    /// [`Value::lerp`]).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WithoutValue`] if either source is absent and
    /// [`TreeError::TypeMismatch`] if any of the three kinds disagree.
    pub fn interpolate_from(&mut self, p1: &Leaf, p2: &Leaf, t: f32) -> Result<()> {
        if p1.kind != self.kind || p2.kind != self.kind {
            let actual = if p1.kind != self.kind { p1.kind } else { p2.kind };
            return Err(TreeError::TypeMismatch {
                expected: self.kind.as_str().to_string(),
                actual: actual.as_str().to_string(),
            }
            .into());
        }
        if !p1.present || !p2.present {
            return Err(TreeError::WithoutValue { kind: self.kind }.into());
        }
        self.value = p1.value.lerp(p2.value, t);
        self.present = true;
        Ok(())
    }
}
