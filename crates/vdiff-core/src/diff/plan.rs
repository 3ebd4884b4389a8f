//! Per-level reconciliation plan.
//!
//! [`compare_node`] handles everything local to one node pair (kind, tag and
//! props). [`plan_children`] lays out the child level as an ordered list of
//! [`Step`]s. A level's plan never depends on what descending into its
//! children produces, so any depth-first executor of the plan yields the
//! same patch order.

use crate::model::{shallow_equal, Key, Patch, VNode};
use std::collections::HashMap;
use std::ptr;
use vdiff_core_types::schema::EVENT_DUPLICATE_KEY;

/// One unit of work in a child-level plan.
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// Append this patch to the output
    Emit(Patch<'a>),
    /// Reconcile this matched old/new pair in full
    Descend(&'a VNode, &'a VNode),
}

/// Same identity rules as [`Patch`]: node references compare by address.
impl PartialEq for Step<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Step::Emit(a), Step::Emit(b)) => a == b,
            (Step::Descend(old, new), Step::Descend(other_old, other_new)) => {
                ptr::eq(*old, *other_old) && ptr::eq(*new, *other_new)
            }
            _ => false,
        }
    }
}

/// Compare one node pair, pushing node-level patches to `out`.
///
/// Returns `false` when the children of this pair must not be reconciled
/// (two static nodes with different tags).
pub fn compare_node<'a>(old: &'a VNode, new: &'a VNode, out: &mut Vec<Patch<'a>>) -> bool {
    if old.kind() != new.kind() {
        // Children are still reconciled below.
        out.push(Patch::Replace {
            old_node: old,
            new_node: new,
        });
    }

    match (old, new) {
        (VNode::Memo(o), VNode::Memo(n)) => {
            // Comparator always comes from the old node.
            if !o.compare.compare(&o.props, &n.props) {
                out.push(Patch::Props {
                    node: old,
                    new_props: &n.props,
                });
            }
        }
        (VNode::Regular(o), VNode::Regular(n)) => {
            if !shallow_equal(&o.props, &n.props) {
                out.push(Patch::Props {
                    node: old,
                    new_props: &n.props,
                });
            }
        }
        (VNode::Static(o), VNode::Static(n)) => {
            if o.tag != n.tag {
                out.push(Patch::Replace {
                    old_node: old,
                    new_node: new,
                });
                return false;
            }
            // Old keys only; one patch per differing key.
            for (key, value) in o.props.iter() {
                if !value.strict_eq(n.props.get_or_undefined(key)) {
                    out.push(Patch::Props {
                        node: old,
                        new_props: &n.props,
                    });
                }
            }
        }
        _ => {}
    }

    true
}

/// Build the ordered plan for the children of a matched pair.
///
/// Order: keyed removals and reorders (each followed by its descent) in old
/// order, then keyed insertions in new order, then the positional pass in
/// ascending index order.
pub fn plan_children<'a>(old: &'a VNode, new: &'a VNode) -> Vec<Step<'a>> {
    let old_children = old.children();
    let new_children = new.children();

    if old_children.is_empty() && new_children.is_empty() {
        return Vec::new();
    }

    let old_keys = key_index_map(old_children, "old");
    let new_keys = key_index_map(new_children, "new");

    let mut steps = Vec::with_capacity(old_children.len().max(new_children.len()));
    let mut handled = vec![false; new_children.len()];

    for (old_index, old_child) in old_children.iter().enumerate() {
        let Some(key) = old_child.key() else {
            continue;
        };
        // Shadowed duplicate: the later sibling owns the key.
        if old_keys.get(key) != Some(&old_index) {
            continue;
        }
        match new_keys.get(key) {
            None => steps.push(Step::Emit(Patch::Remove { node: old_child })),
            Some(&new_index) => {
                if new_index != old_index {
                    steps.push(Step::Emit(Patch::Reorder {
                        node: old_child,
                        from_index: old_index,
                        to_index: new_index,
                    }));
                }
                steps.push(Step::Descend(old_child, &new_children[new_index]));
                handled[new_index] = true;
            }
        }
    }

    for (new_index, new_child) in new_children.iter().enumerate() {
        let Some(key) = new_child.key() else {
            continue;
        };
        if new_keys.get(key) != Some(&new_index) {
            continue;
        }
        if !old_keys.contains_key(key) {
            steps.push(Step::Emit(Patch::Insert {
                node: new_child,
                index: new_index,
            }));
            handled[new_index] = true;
        }
    }

    let len = old_children.len().max(new_children.len());
    for index in 0..len {
        if handled.get(index).copied().unwrap_or(false) {
            continue;
        }
        match (old_children.get(index), new_children.get(index)) {
            (None, Some(new_child)) => steps.push(Step::Emit(Patch::Insert {
                node: new_child,
                index,
            })),
            (Some(old_child), None) => steps.push(Step::Emit(Patch::Remove { node: old_child })),
            (Some(old_child), Some(new_child)) => steps.push(Step::Descend(old_child, new_child)),
            (None, None) => {}
        }
    }

    steps
}

fn key_index_map<'a>(children: &'a [VNode], side: &'static str) -> HashMap<&'a Key, usize> {
    let mut map = HashMap::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let Some(key) = child.key() else {
            continue;
        };
        if let Some(previous) = map.insert(key, index) {
            tracing::debug!(
                component = module_path!(),
                event = EVENT_DUPLICATE_KEY,
                key = %key,
                side,
                first_index = previous as u64,
                index = index as u64,
                "duplicate sibling key; later index wins"
            );
        }
    }
    map
}
