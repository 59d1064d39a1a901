//! Derived tree operations.
//!
//! Each operation here is a thin visitor over the zipped traversal in
//! [`navigate`](super::navigate); none of them owns any tree-walking logic
//! of its own. All errors propagate to the caller unhandled, per the
//! crate's contract-violation error policy.

use super::{
    element::Element,
    leaf::InterpolationPolicy,
    navigate::{Step, navigate, navigate_mut},
};
use crate::Result;

/// Clears every leaf in the tree to absent.
pub fn reset(root: &mut Element) -> Result<()> {
    navigate_mut(
        &mut |e: &mut Element, _, _| {
            if let Element::Leaf(l) = e {
                l.clear();
            }
            Ok(Step::Continue)
        },
        root,
        None,
        None,
    )
}

/// Sets every leaf in the tree to its present zero value.
pub fn zero(root: &mut Element) -> Result<()> {
    navigate_mut(
        &mut |e: &mut Element, _, _| {
            if let Element::Leaf(l) = e {
                l.zeroed();
            }
            Ok(Step::Continue)
        },
        root,
        None,
        None,
    )
}

/// Deep-copies a tree into freshly allocated storage.
///
/// The copy is built by instantiating the source's declared type from its
/// schema, adopting the source's active slot variants in a zipped pass,
/// and then merging every present leaf value across. The result is
/// structurally equal to the source and shares no storage with it.
///
/// # Examples
///
/// ```
/// use snapstate::tree::{RecordBuilder, RecordType, ValueKind, ops, schema};
///
/// struct Position;
/// impl RecordType for Position {
///     const NAME: &'static str = "Position";
///     fn declare(b: &mut RecordBuilder) {
///         b.leaf("x", ValueKind::F32).leaf("y", ValueKind::F32);
///     }
/// }
///
/// let mut a = schema::instance::<Position>();
/// a.as_record_mut().unwrap().child_mut("x").unwrap().as_leaf_mut().unwrap().set(1.0f32)?;
///
/// let copy = ops::clone_tree(&a)?;
/// assert!(ops::structural_eq(&copy, &a)?);
/// # Ok::<(), snapstate::Error>(())
/// ```
pub fn clone_tree(source: &Element) -> Result<Element> {
    tracing::debug!(root = source.type_name(), "cloning tree");
    let mut out = source.fresh_default();
    // Carry dynamically-chosen slot variants across before any values move.
    navigate_mut(
        &mut |e: &mut Element, src, _| {
            if let Element::Slot(dest) = e
                && let Some(Element::Slot(src)) = src
            {
                dest.adopt_child_types(src);
            }
            Ok(Step::Continue)
        },
        &mut out,
        Some(source),
        None,
    )?;
    merge_from(&mut out, source)?;
    Ok(out)
}

/// Compares two trees leaf-by-leaf, short-circuiting on the first
/// difference.
///
/// Truncation applies: leaves beyond a diverging child-type prefix are not
/// compared (see [`navigate`](super::navigate)).
pub fn structural_eq(a: &Element, b: &Element) -> Result<bool> {
    let mut equal = true;
    navigate(
        &mut |e: &Element, other, _| {
            if let Element::Leaf(l) = e
                && let Some(Element::Leaf(other)) = other
                && !l.leaf_eq(other)
            {
                equal = false;
                return Ok(Step::Exit);
            }
            Ok(Step::Continue)
        },
        a,
        Some(b),
        None,
    )?;
    Ok(equal)
}

/// Merges present leaf values from `src` into `dest`.
///
/// The merge is one-directional and presence-gated: a `dest` leaf is
/// overwritten only where the corresponding `src` leaf is present, and an
/// absent `src` leaf never clears a present `dest` value.
pub fn merge_from(dest: &mut Element, src: &Element) -> Result<()> {
    navigate_mut(
        &mut |e: &mut Element, src, _| {
            if let Element::Leaf(d) = e
                && let Some(Element::Leaf(s)) = src
            {
                d.merge_from(s)?;
            }
            Ok(Step::Continue)
        },
        dest,
        Some(src),
        None,
    )
}

/// Writes the blend of two snapshots at parameter `t` into `dest`.
///
/// At every zipped leaf triple the destination leaf's declared
/// [`InterpolationPolicy`] decides: `Custom` leaves are skipped entirely,
/// `TakeSecond` leaves take the second snapshot's value via a
/// presence-gated merge regardless of `t`, and `Default` leaves blend by
/// their value type's rule, which requires both sources present.
///
/// # Errors
///
/// Fails with [`TreeError::WithoutValue`] when a value-based interpolation
/// is attempted and either source leaf is absent.
///
/// [`TreeError::WithoutValue`]: super::errors::TreeError::WithoutValue
pub fn interpolate_from(dest: &mut Element, p1: &Element, p2: &Element, t: f32) -> Result<()> {
    navigate_mut(
        &mut |e: &mut Element, p1, p2| {
            if let Element::Leaf(d) = e
                && let (Some(Element::Leaf(l1)), Some(Element::Leaf(l2))) = (p1, p2)
            {
                match d.policy() {
                    InterpolationPolicy::Custom => {}
                    InterpolationPolicy::TakeSecond => d.merge_from(l2)?,
                    InterpolationPolicy::Default => d.interpolate_from(l1, l2, t)?,
                }
            }
            Ok(Step::Continue)
        },
        dest,
        Some(p1),
        Some(p2),
    )
}

/// Counts the leaves the traversal visits in a tree.
pub fn leaf_count(root: &Element) -> Result<usize> {
    let mut count = 0usize;
    navigate(
        &mut |e: &Element, _, _| {
            if e.is_leaf() {
                count += 1;
            }
            Ok(Step::Continue)
        },
        root,
        None,
        None,
    )?;
    Ok(count)
}
