//! The zipped navigation engine.
//!
//! A single depth-first pre-order walk drives every derived operation in
//! this crate. The engine visits one, two, or three congruent trees in
//! lockstep, handing the visitor a fixed-arity tuple of corresponding
//! nodes at every position. The tuple is passed by value through the
//! recursion; the walk performs no per-node heap allocation and is safe to
//! run every simulation tick.
//!
//! # Descent and truncation rules
//!
//! - **Record / slot**: the effective child count is the minimum across
//!   the zipped nodes, further truncated at the first index where the
//!   zipped child types disagree. Type divergence silently ends descent
//!   for that branch and all following siblings; it is deliberate
//!   tolerance for prefix-compatible schemas from different versions, not
//!   an error. Callers that need a hard failure on shape mismatch must
//!   compare shapes explicitly before walking.
//! - **Array**: arrays of the same declared field are invariantly the same
//!   length, and every index is visited. Zipping arrays of different
//!   lengths is a broken invariant and fails with
//!   [`TreeError::StructuralViolation`].
//! - **Leaf**: terminal, no descent.
//!
//! Zipping nodes of different shapes (say a record against a leaf) fails
//! with [`TreeError::TypeMismatch`]. Note the asymmetry: diverging child
//! types inside a record truncate silently, while shape-incongruent zipped
//! roots and leaf-level kind mismatches surface as errors. This mirrors
//! the merge contract and is intentional.
//!
//! [`TreeError::StructuralViolation`]: super::errors::TreeError::StructuralViolation
//! [`TreeError::TypeMismatch`]: super::errors::TreeError::TypeMismatch

use super::{element::Element, errors::TreeError};
use crate::Result;

/// Visitor verdict at each visited node tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Descend into children (if any) and continue the walk
    Continue,
    /// Do not descend into this node's children, continue elsewhere
    SkipDescendants,
    /// Abort the entire walk immediately
    Exit,
}

/// Walks up to three congruent trees in lockstep, read-only.
///
/// `visit` is invoked at every node tuple in depth-first pre-order; its
/// returned [`Step`] controls descent. Absent trees stay `None` at every
/// position.
///
/// # Errors
///
/// Fails with [`TreeError::TypeMismatch`] on shape-incongruent tuples and
/// [`TreeError::StructuralViolation`] on zipped arrays of unequal length,
/// plus whatever the visitor itself returns.
pub fn navigate<F>(visit: &mut F, a: &Element, b: Option<&Element>, c: Option<&Element>) -> Result<()>
where
    F: FnMut(&Element, Option<&Element>, Option<&Element>) -> Result<Step>,
{
    walk(visit, a, b, c)?;
    Ok(())
}

/// Walks up to three congruent trees in lockstep, mutating the first.
///
/// Identical to [`navigate`] except the first tree is handed to the
/// visitor mutably. Because the sources are shared borrows, the mutated
/// tree can never alias either source.
pub fn navigate_mut<F>(
    visit: &mut F,
    a: &mut Element,
    b: Option<&Element>,
    c: Option<&Element>,
) -> Result<()>
where
    F: FnMut(&mut Element, Option<&Element>, Option<&Element>) -> Result<Step>,
{
    walk_mut(visit, a, b, c)?;
    Ok(())
}

// The two recursion skeletons below are shared-ref and mutable-ref mirrors
// of one another; the truncation rules live once in `effective_len`.

fn walk<F>(visit: &mut F, a: &Element, b: Option<&Element>, c: Option<&Element>) -> Result<Step>
where
    F: FnMut(&Element, Option<&Element>, Option<&Element>) -> Result<Step>,
{
    check_congruent(a, b)?;
    check_congruent(a, c)?;
    match visit(a, b, c)? {
        Step::Exit => return Ok(Step::Exit),
        Step::SkipDescendants => return Ok(Step::Continue),
        Step::Continue => {}
    }
    let len = effective_len(a, b, c)?;
    for i in 0..len {
        let step = walk(
            visit,
            &a.children()[i],
            b.map(|b| &b.children()[i]),
            c.map(|c| &c.children()[i]),
        )?;
        if step == Step::Exit {
            return Ok(Step::Exit);
        }
    }
    Ok(Step::Continue)
}

fn walk_mut<F>(
    visit: &mut F,
    a: &mut Element,
    b: Option<&Element>,
    c: Option<&Element>,
) -> Result<Step>
where
    F: FnMut(&mut Element, Option<&Element>, Option<&Element>) -> Result<Step>,
{
    check_congruent(a, b)?;
    check_congruent(a, c)?;
    match visit(a, b, c)? {
        Step::Exit => return Ok(Step::Exit),
        Step::SkipDescendants => return Ok(Step::Continue),
        Step::Continue => {}
    }
    // Computed after the visit: a visitor may replace child types (slot
    // adoption) and descent must see the tree it produced.
    let len = effective_len(a, b, c)?;
    for i in 0..len {
        let step = walk_mut(
            visit,
            &mut a.children_mut()[i],
            b.map(|b| &b.children()[i]),
            c.map(|c| &c.children()[i]),
        )?;
        if step == Step::Exit {
            return Ok(Step::Exit);
        }
    }
    Ok(Step::Continue)
}

/// Shape congruence check for one zipped pair.
///
/// Only the node shape is compared here; leaf value kinds are the leaf
/// operations' contract, and record child types are handled by prefix
/// truncation one level up.
fn check_congruent(a: &Element, other: Option<&Element>) -> Result<()> {
    if let Some(other) = other
        && a.kind() != other.kind()
    {
        return Err(TreeError::TypeMismatch {
            expected: a.kind().as_str().to_string(),
            actual: other.kind().as_str().to_string(),
        }
        .into());
    }
    Ok(())
}

/// The number of leading children the walk descends into.
fn effective_len(a: &Element, b: Option<&Element>, c: Option<&Element>) -> Result<usize> {
    match a {
        Element::Leaf(_) => Ok(0),
        Element::Record(_) | Element::Slot(_) => {
            Ok(congruent_prefix(a.children(), b.map(Element::children), c.map(Element::children)))
        }
        Element::Array(_) => {
            let len = a.child_count();
            for other in [b, c].into_iter().flatten() {
                if other.child_count() != len {
                    return Err(TreeError::StructuralViolation {
                        reason: format!(
                            "zipped arrays of unequal length: {len} vs {}",
                            other.child_count()
                        ),
                    }
                    .into());
                }
            }
            Ok(len)
        }
    }
}

/// Record truncation rule: the minimum child count across the zipped
/// records, cut further at the first index where child types diverge.
fn congruent_prefix(a: &[Element], b: Option<&[Element]>, c: Option<&[Element]>) -> usize {
    let mut len = a.len();
    if let Some(b) = b {
        len = len.min(b.len());
    }
    if let Some(c) = c {
        len = len.min(c.len());
    }
    (0..len)
        .find(|&i| {
            b.is_some_and(|b| !a[i].same_type(&b[i])) || c.is_some_and(|c| !a[i].same_type(&c[i]))
        })
        .unwrap_or(len)
}
