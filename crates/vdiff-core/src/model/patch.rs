//! Patch model.
//!
//! A [`Patch`] is one atomic tree edit. Patches borrow the nodes they
//! describe from the old and new trees, so a patch sequence cannot outlive
//! either tree.

use crate::model::node::VNode;
use crate::model::props::Props;
use std::ptr;
use vdiff_core_types::PatchKind;

/// One atomic edit turning the old tree toward the new tree.
///
/// `Insert`, `Remove` and `Reorder` indices are positions in the new tree's
/// child list at that tree position.
#[derive(Debug, Clone, Copy)]
pub enum Patch<'a> {
    /// Replace the whole subtree at this position
    Replace {
        old_node: &'a VNode,
        new_node: &'a VNode,
    },
    /// Set the complete prop set of an old node
    Props {
        node: &'a VNode,
        new_props: &'a Props,
    },
    /// Move a keyed old child to a new position
    Reorder {
        node: &'a VNode,
        from_index: usize,
        to_index: usize,
    },
    /// Insert a new child at `index`
    Insert { node: &'a VNode, index: usize },
    /// Remove an old child
    Remove { node: &'a VNode },
}

impl<'a> Patch<'a> {
    pub fn kind(&self) -> PatchKind {
        match self {
            Patch::Replace { .. } => PatchKind::Replace,
            Patch::Props { .. } => PatchKind::Props,
            Patch::Reorder { .. } => PatchKind::Reorder,
            Patch::Insert { .. } => PatchKind::Insert,
            Patch::Remove { .. } => PatchKind::Remove,
        }
    }

    /// The node this patch targets. For `Replace` this is the old node.
    pub fn node(&self) -> &'a VNode {
        match *self {
            Patch::Replace { old_node, .. } => old_node,
            Patch::Props { node, .. }
            | Patch::Reorder { node, .. }
            | Patch::Insert { node, .. }
            | Patch::Remove { node } => node,
        }
    }
}

/// Patches are equal when they have the same kind, reference the *same*
/// nodes and props (by address) and carry the same indices.
impl PartialEq for Patch<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Patch::Replace { old_node, new_node },
                Patch::Replace {
                    old_node: other_old,
                    new_node: other_new,
                },
            ) => ptr::eq(*old_node, *other_old) && ptr::eq(*new_node, *other_new),
            (
                Patch::Props { node, new_props },
                Patch::Props {
                    node: other_node,
                    new_props: other_props,
                },
            ) => ptr::eq(*node, *other_node) && ptr::eq(*new_props, *other_props),
            (
                Patch::Reorder {
                    node,
                    from_index,
                    to_index,
                },
                Patch::Reorder {
                    node: other_node,
                    from_index: other_from,
                    to_index: other_to,
                },
            ) => ptr::eq(*node, *other_node) && from_index == other_from && to_index == other_to,
            (
                Patch::Insert { node, index },
                Patch::Insert {
                    node: other_node,
                    index: other_index,
                },
            ) => ptr::eq(*node, *other_node) && index == other_index,
            (Patch::Remove { node }, Patch::Remove { node: other_node }) => {
                ptr::eq(*node, *other_node)
            }
            _ => false,
        }
    }
}
