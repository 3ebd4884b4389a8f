//! Kind predicates.
//!
//! O(1) narrowing of a [`VNode`] reference to one of its variants.

use crate::model::{MemoNode, RegularNode, StaticNode, VNode};
pub use vdiff_core_types::NodeKind;

impl VNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            VNode::Static(_) => NodeKind::Static,
            VNode::Regular(_) => NodeKind::Regular,
            VNode::Memo(_) => NodeKind::Memo,
        }
    }

    pub fn as_static(&self) -> Option<&StaticNode> {
        match self {
            VNode::Static(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_regular(&self) -> Option<&RegularNode> {
        match self {
            VNode::Regular(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_memo(&self) -> Option<&MemoNode> {
        match self {
            VNode::Memo(node) => Some(node),
            _ => None,
        }
    }
}

pub fn is_static_vnode(node: &VNode) -> bool {
    matches!(node, VNode::Static(_))
}

pub fn is_regular_component_vnode(node: &VNode) -> bool {
    matches!(node, VNode::Regular(_))
}

pub fn is_memo_component_vnode(node: &VNode) -> bool {
    matches!(node, VNode::Memo(_))
}
