//! Binary wire encoding for state trees.
//!
//! The format is schema-agreed and carries no framing of its own: it is
//! the concatenation, in declaration order, of each leaf's encoding. A
//! leaf contributes one presence byte, then the value's fixed-width
//! little-endian bytes iff present. A leaf flagged suppress-serialize
//! contributes zero bytes on both sides; writer and reader must agree on
//! that flag out-of-band. Composite nodes contribute nothing, so a reader
//! must walk the identical schema the writer used.

use thiserror::Error;

use super::{
    element::Element,
    navigate::{Step, navigate, navigate_mut},
    value::Value,
};
use crate::Result;

/// Presence byte for an absent leaf.
const ABSENT: u8 = 0;
/// Presence byte for a present leaf.
const PRESENT: u8 = 1;

/// Structured error types for wire decoding.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WireError {
    /// The input ended before the schema's leaves were exhausted
    #[error("unexpected end of input: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A presence byte held something other than 0 or 1
    #[error("invalid presence byte {value:#04x}")]
    InvalidPresence { value: u8 },
}

impl WireError {
    /// Check if this error means the input was truncated
    pub fn is_truncated(&self) -> bool {
        matches!(self, WireError::UnexpectedEof { .. })
    }

    /// Check if this error means the input bytes are corrupt
    pub fn is_corrupt(&self) -> bool {
        matches!(self, WireError::InvalidPresence { .. })
    }
}

// Conversion from WireError to the main Error type
impl From<WireError> for crate::Error {
    fn from(err: WireError) -> Self {
        crate::Error::Wire(err)
    }
}

/// Serializes a tree into a fresh buffer.
///
/// # Examples
///
/// ```
/// use snapstate::tree::{RecordBuilder, RecordType, ValueKind, ops, schema, wire};
///
/// struct Position;
/// impl RecordType for Position {
///     const NAME: &'static str = "Position";
///     fn declare(b: &mut RecordBuilder) {
///         b.leaf("x", ValueKind::F32).leaf("y", ValueKind::F32);
///     }
/// }
///
/// let mut tree = schema::instance::<Position>();
/// tree.as_record_mut().unwrap().child_mut("x").unwrap().as_leaf_mut().unwrap().set(2.5f32)?;
///
/// let bytes = wire::serialize(&tree)?;
/// // x: presence + 4 value bytes; y: presence only
/// assert_eq!(bytes.len(), 6);
///
/// let mut copy = schema::instance::<Position>();
/// wire::deserialize(&mut copy, &bytes)?;
/// assert!(ops::structural_eq(&copy, &tree)?);
/// # Ok::<(), snapstate::Error>(())
/// ```
pub fn serialize(root: &Element) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(serialized_len(root)?);
    serialize_into(root, &mut out)?;
    Ok(out)
}

/// Serializes a tree, appending to an existing buffer.
pub fn serialize_into(root: &Element, out: &mut Vec<u8>) -> Result<()> {
    navigate(
        &mut |e: &Element, _, _| {
            if let Element::Leaf(l) = e
                && !l.suppress_serialize()
            {
                if l.is_present() {
                    out.push(PRESENT);
                    l.get()?.encode(out);
                } else {
                    out.push(ABSENT);
                }
            }
            Ok(Step::Continue)
        },
        root,
        None,
        None,
    )
}

/// The exact number of bytes [`serialize`] produces for this tree.
///
/// Lets transports size a datagram before encoding into it.
pub fn serialized_len(root: &Element) -> Result<usize> {
    let mut len = 0usize;
    navigate(
        &mut |e: &Element, _, _| {
            if let Element::Leaf(l) = e
                && !l.suppress_serialize()
            {
                len += 1;
                if l.is_present() {
                    len += l.kind().width();
                }
            }
            Ok(Step::Continue)
        },
        root,
        None,
        None,
    )?;
    Ok(len)
}

/// Decodes leaf values from `bytes` into an existing tree.
///
/// The tree's own schema drives the decode; it must be the identical
/// schema the writer serialized with. Suppressed leaves are left at their
/// pre-existing value. Returns the number of bytes consumed, so multiple
/// trees can be packed back-to-back in one buffer.
pub fn deserialize(root: &mut Element, bytes: &[u8]) -> Result<usize> {
    let mut cursor = 0usize;
    navigate_mut(
        &mut |e: &mut Element, _, _| {
            if let Element::Leaf(l) = e
                && !l.suppress_serialize()
            {
                let Some(&flag) = bytes.get(cursor) else {
                    return Err(WireError::UnexpectedEof {
                        needed: 1,
                        remaining: 0,
                    }
                    .into());
                };
                cursor += 1;
                match flag {
                    ABSENT => l.clear(),
                    PRESENT => {
                        let width = l.kind().width();
                        let value = Value::decode(l.kind(), &bytes[cursor..]).ok_or(
                            WireError::UnexpectedEof {
                                needed: width,
                                remaining: bytes.len() - cursor,
                            },
                        )?;
                        l.set(value)?;
                        cursor += width;
                    }
                    value => return Err(WireError::InvalidPresence { value }.into()),
                }
            }
            Ok(Step::Continue)
        },
        root,
        None,
        None,
    )?;
    tracing::trace!(bytes = cursor, "deserialized tree");
    Ok(cursor)
}
