#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{always_equal, counter, never_equal};
use vdiff_core::model::{Comparator, Patch, PropValue, Props, VNode};
use vdiff_core::{diff_nodes, props};

fn props_patch<'a>(old: &'a VNode, new: &'a VNode) -> Patch<'a> {
    Patch::Props {
        node: old,
        new_props: new.props(),
    }
}

// ---------------------------------------------------------------------------
// Static elements
// ---------------------------------------------------------------------------

#[test]
fn test_static_prop_change() {
    let old = VNode::element("div").with_prop("className", "old");
    let new = VNode::element("div").with_prop("className", "new");

    assert_eq!(diff_nodes(&old, &new), vec![props_patch(&old, &new)]);
}

#[test]
fn test_static_unchanged_props() {
    let old = VNode::element("div").with_props(props! { "className" => "test", "id" => "some-id" });
    let new = VNode::element("div").with_props(props! { "className" => "test", "id" => "some-id" });

    assert!(diff_nodes(&old, &new).is_empty());
}

#[test]
fn test_static_one_patch_per_changed_key() {
    let old = VNode::element("div").with_props(props! { "a" => 1, "b" => 2 });
    let new = VNode::element("div").with_props(props! { "a" => 3, "b" => 4 });

    assert_eq!(
        diff_nodes(&old, &new),
        vec![props_patch(&old, &new), props_patch(&old, &new)]
    );
}

#[test]
fn test_static_removed_key_is_detected() {
    let old = VNode::element("div").with_props(props! { "a" => 1, "gone" => true });
    let new = VNode::element("div").with_prop("a", 1);

    assert_eq!(diff_nodes(&old, &new), vec![props_patch(&old, &new)]);
}

#[test]
fn test_static_pure_addition_goes_undetected() {
    let old = VNode::element("div").with_prop("a", 1);
    let new = VNode::element("div").with_props(props! { "a" => 1, "added" => "x" });

    assert!(diff_nodes(&old, &new).is_empty());
}

#[test]
fn test_static_addition_rides_along_with_change() {
    let old = VNode::element("div").with_prop("a", 1);
    let new = VNode::element("div").with_props(props! { "a" => 2, "added" => "x" });

    let patches = diff_nodes(&old, &new);
    assert_eq!(patches, vec![props_patch(&old, &new)]);
    match patches[0] {
        Patch::Props { new_props, .. } => assert!(new_props.contains_key("added")),
        other => panic!("unexpected patch {other:?}"),
    }
}

#[test]
fn test_static_explicit_undefined_matches_absent_key() {
    let old = VNode::element("div").with_prop("a", PropValue::Undefined);
    let new = VNode::element("div");

    assert!(diff_nodes(&old, &new).is_empty());
}

#[test]
fn test_nan_is_never_equal() {
    let old = VNode::element("div").with_prop("n", f64::NAN);
    let new = VNode::element("div").with_prop("n", f64::NAN);

    assert_eq!(diff_nodes(&old, &new), vec![props_patch(&old, &new)]);
}

#[test]
fn test_handlers_compare_by_identity() {
    let handler = PropValue::function(|_| {});
    let old = VNode::element("button").with_prop("onClick", handler.clone());
    let same = VNode::element("button").with_prop("onClick", handler);
    let fresh = VNode::element("button").with_prop("onClick", PropValue::function(|_| {}));

    assert!(diff_nodes(&old, &same).is_empty());
    assert_eq!(diff_nodes(&old, &fresh), vec![props_patch(&old, &fresh)]);
}

#[test]
fn test_objects_compare_by_identity() {
    let style = PropValue::object(props! { "color" => "red" });
    let old = VNode::element("div").with_prop("style", style.clone());
    let same = VNode::element("div").with_prop("style", style);
    let rebuilt =
        VNode::element("div").with_prop("style", PropValue::object(props! { "color" => "red" }));

    assert!(diff_nodes(&old, &same).is_empty());
    assert_eq!(diff_nodes(&old, &rebuilt).len(), 1);
}

// ---------------------------------------------------------------------------
// Regular components
// ---------------------------------------------------------------------------

#[test]
fn test_regular_value_change() {
    let old = VNode::component(counter()).with_prop("count", 1);
    let new = VNode::component(counter()).with_prop("count", 2);

    assert_eq!(diff_nodes(&old, &new), vec![props_patch(&old, &new)]);
}

#[test]
fn test_regular_added_prop() {
    let old = VNode::component(counter()).with_prop("count", 1);
    let new = VNode::component(counter()).with_props(props! { "count" => 1, "newProp" => "test" });

    let patches = diff_nodes(&old, &new);
    assert_eq!(patches, vec![props_patch(&old, &new)]);
    match patches[0] {
        Patch::Props { new_props, .. } => {
            assert_eq!(new_props, &props! { "count" => 1, "newProp" => "test" })
        }
        other => panic!("unexpected patch {other:?}"),
    }
}

#[test]
fn test_regular_missing_prop() {
    let old = VNode::component(counter()).with_props(props! { "count" => 1, "toRemove" => "test" });
    let new = VNode::component(counter()).with_prop("count", 1);

    assert_eq!(diff_nodes(&old, &new), vec![props_patch(&old, &new)]);
}

#[test]
fn test_regular_emits_single_patch_for_many_changes() {
    let old = VNode::component(counter()).with_props(props! { "a" => 1, "b" => 2, "c" => 3 });
    let new = VNode::component(counter()).with_props(props! { "a" => 9, "b" => 9, "c" => 9 });

    assert_eq!(diff_nodes(&old, &new).len(), 1);
}

#[test]
fn test_regular_same_props_no_patch() {
    let old = VNode::component(counter()).with_props(props! { "count" => 1, "label" => "x" });
    let new = VNode::component(counter()).with_props(props! { "count" => 1, "label" => "x" });

    assert!(diff_nodes(&old, &new).is_empty());
}

// ---------------------------------------------------------------------------
// Memo components
// ---------------------------------------------------------------------------

#[test]
fn test_memo_compare_false_emits_props() {
    let old = VNode::memo(counter(), never_equal()).with_prop("count", 1);
    let new = VNode::memo(counter(), never_equal()).with_prop("count", 1);

    assert_eq!(diff_nodes(&old, &new), vec![props_patch(&old, &new)]);
}

#[test]
fn test_memo_compare_true_suppresses_props() {
    let old = VNode::memo(counter(), always_equal()).with_prop("count", 1);
    let new = VNode::memo(counter(), always_equal()).with_prop("count", 2);

    assert!(diff_nodes(&old, &new).is_empty());
}

#[test]
fn test_memo_comparator_taken_from_old_node() {
    let old = VNode::memo(counter(), never_equal());
    let new = VNode::memo(counter(), always_equal());

    assert_eq!(diff_nodes(&old, &new), vec![props_patch(&old, &new)]);
    assert!(diff_nodes(&new, &old).is_empty());
}

#[test]
fn test_memo_comparator_receives_old_then_new() {
    let ordered = Comparator::new(|prev: &Props, next: &Props| {
        prev.get_or_undefined("v") == &PropValue::from(1) && next.get_or_undefined("v") == &PropValue::from(2)
    });
    let old = VNode::memo(counter(), ordered.clone()).with_prop("v", 1);
    let new = VNode::memo(counter(), ordered).with_prop("v", 2);

    assert!(diff_nodes(&old, &new).is_empty());
}
