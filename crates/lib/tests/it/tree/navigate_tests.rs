//! Zipped traversal: truncation rules, visitor control flow, congruence.

use snapstate::tree::{Array, Element, ElementSchema, Step, ValueKind, navigate, schema};

use crate::helpers::*;

/// Counts the leaf tuples a zipped walk of `a` and `b` visits.
fn zipped_leaf_visits(a: &Element, b: &Element) -> usize {
    let mut count = 0usize;
    navigate(
        &mut |e: &Element, _, _| {
            if e.is_leaf() {
                count += 1;
            }
            Ok(Step::Continue)
        },
        a,
        Some(b),
        None,
    )
    .expect("walk failed");
    count
}

#[test]
fn test_zip_truncates_at_first_divergent_child_type() {
    // Child type at index 2 differs (f32 vs i64); indices 0 and 1 are the
    // congruent prefix and the only leaves visited. Divergence is
    // tolerance, not an error.
    let a = schema::instance::<Wide>();
    let b = schema::instance::<WidePrefix>();
    assert_eq!(zipped_leaf_visits(&a, &b), 2);
    assert_eq!(zipped_leaf_visits(&b, &a), 2);
}

#[test]
fn test_zip_truncates_to_min_child_count() {
    let a = schema::instance::<Wide>();
    let b = schema::instance::<Narrow>();
    assert_eq!(zipped_leaf_visits(&a, &b), 2);
    assert_eq!(zipped_leaf_visits(&b, &a), 2);
}

#[test]
fn test_single_tree_walk_visits_every_leaf() {
    let root = schema::instance::<PlayerState>();
    // health, position.x, position.y, facing, aim, session_token,
    // weapon.damage, ammo[0..3]
    assert_eq!(snapstate::tree::ops::leaf_count(&root).unwrap(), 10);
}

#[test]
fn test_skip_descendants_prunes_one_branch() {
    let root = schema::instance::<PlayerState>();
    let mut count = 0usize;
    navigate(
        &mut |e: &Element, _, _| {
            if let Element::Record(r) = e
                && r.name() == "Position"
            {
                return Ok(Step::SkipDescendants);
            }
            if e.is_leaf() {
                count += 1;
            }
            Ok(Step::Continue)
        },
        &root,
        None,
        None,
    )
    .unwrap();
    assert_eq!(count, 8);
}

#[test]
fn test_exit_aborts_the_entire_walk() {
    let root = schema::instance::<PlayerState>();
    let mut count = 0usize;
    navigate(
        &mut |e: &Element, _, _| {
            if e.is_leaf() {
                count += 1;
                return Ok(Step::Exit);
            }
            Ok(Step::Continue)
        },
        &root,
        None,
        None,
    )
    .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_arrays_visit_every_index() {
    let a = Element::Array(Array::new(4, &ElementSchema::leaf(ValueKind::U32)));
    let b = Element::Array(Array::new(4, &ElementSchema::leaf(ValueKind::U32)));
    assert_eq!(zipped_leaf_visits(&a, &b), 4);
}

#[test]
fn test_zip_rejects_shape_incongruent_roots() {
    let record = schema::instance::<Position>();
    let array = Element::Array(Array::new(1, &ElementSchema::leaf(ValueKind::F32)));
    let err = navigate(
        &mut |_: &Element, _, _| Ok(Step::Continue),
        &record,
        Some(&array),
        None,
    )
    .unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_zip_rejects_arrays_of_unequal_length() {
    let a = Element::Array(Array::new(2, &ElementSchema::leaf(ValueKind::U32)));
    let b = Element::Array(Array::new(3, &ElementSchema::leaf(ValueKind::U32)));
    let err = navigate(
        &mut |_: &Element, _, _| Ok(Step::Continue),
        &a,
        Some(&b),
        None,
    )
    .unwrap_err();
    assert!(err.is_structural_violation());
}

#[test]
fn test_three_way_zip_hands_both_sources_to_the_visitor() {
    let dest = schema::instance::<Position>();
    let p1 = schema::instance::<Position>();
    let p2 = schema::instance::<Position>();
    let mut tuples = 0usize;
    navigate(
        &mut |e: &Element, b, c| {
            if e.is_leaf() {
                assert!(b.is_some_and(Element::is_leaf));
                assert!(c.is_some_and(Element::is_leaf));
                tuples += 1;
            }
            Ok(Step::Continue)
        },
        &dest,
        Some(&p1),
        Some(&p2),
    )
    .unwrap();
    assert_eq!(tuples, 2);
}
