//! Reconciliation entry points.
//!
//! The core entry point is [`diff_nodes`], which borrows an old and a new
//! tree and returns the ordered [`Patch`] sequence between them.

use crate::config::{DiffConfig, Traversal};
use crate::diff::plan::{compare_node, plan_children, Step};
use crate::diff::summary::PatchStats;
use crate::model::{Patch, VNode};
use crate::{log_op_end, log_op_start};

/// Diff two trees with the default configuration.
///
/// Never fails and never mutates either tree. Identical trees yield an
/// empty sequence.
pub fn diff_nodes<'a>(old: &'a VNode, new: &'a VNode) -> Vec<Patch<'a>> {
    diff_nodes_with_config(old, new, &DiffConfig::default())
}

/// Diff two trees using the traversal strategy from `config`.
///
/// Both strategies produce the same patch sequence.
pub fn diff_nodes_with_config<'a>(
    old: &'a VNode,
    new: &'a VNode,
    config: &DiffConfig,
) -> Vec<Patch<'a>> {
    log_op_start!(
        "diff_nodes",
        old_kind = %old.kind(),
        new_kind = %new.kind(),
        traversal = config.traversal.as_str()
    );
    let start = std::time::Instant::now();

    let mut patches = Vec::new();
    match config.traversal {
        Traversal::Recursive => diff_recursive(old, new, &mut patches),
        Traversal::WorkStack => diff_work_stack(old, new, &mut patches),
    }

    let stats = PatchStats::from_patches(&patches);
    log_op_end!(
        "diff_nodes",
        duration_ms = start.elapsed().as_millis() as u64,
        patch_count = stats.total as u64,
        replace_count = stats.replace as u64,
        props_count = stats.props as u64,
        reorder_count = stats.reorder as u64,
        insert_count = stats.insert as u64,
        remove_count = stats.remove as u64
    );

    patches
}

fn diff_recursive<'a>(old: &'a VNode, new: &'a VNode, out: &mut Vec<Patch<'a>>) {
    if !compare_node(old, new, out) {
        return;
    }
    for step in plan_children(old, new) {
        match step {
            Step::Emit(patch) => out.push(patch),
            Step::Descend(old_child, new_child) => diff_recursive(old_child, new_child, out),
        }
    }
}

fn diff_work_stack<'a>(old: &'a VNode, new: &'a VNode, out: &mut Vec<Patch<'a>>) {
    let mut stack = vec![Step::Descend(old, new)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(patch) => out.push(patch),
            Step::Descend(old_node, new_node) => {
                if compare_node(old_node, new_node, out) {
                    // Reversed so the first planned step is popped first.
                    stack.extend(plan_children(old_node, new_node).into_iter().rev());
                }
            }
        }
    }
}
