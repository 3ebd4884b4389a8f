//! Serializable kind tags for tree nodes and patches.
//!
//! These are the fieldless counterparts of the node and patch enums in
//! `vdiff-core`. They are what gets logged, counted and rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Plain element with an opaque tag
    Static,
    /// Component without memoization
    Regular,
    /// Component gated by a props comparator
    Memo,
}

impl NodeKind {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Static => "static",
            NodeKind::Regular => "regular",
            NodeKind::Memo => "memo",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of patch variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatchKind {
    Replace,
    Props,
    Reorder,
    Insert,
    Remove,
}

impl PatchKind {
    /// Stable uppercase tag, as consumed by patch appliers
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchKind::Replace => "REPLACE",
            PatchKind::Props => "PROPS",
            PatchKind::Reorder => "REORDER",
            PatchKind::Insert => "INSERT",
            PatchKind::Remove => "REMOVE",
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
