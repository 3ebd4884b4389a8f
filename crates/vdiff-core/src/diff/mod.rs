//! Virtual tree reconciliation.
//!
//! Compares two immutable [`VNode`](crate::model::VNode) trees and produces
//! the ordered patch sequence that turns the old tree into the new one.
//!
//! ## Entry point
//!
//! ```
//! use vdiff_core::diff::{diff_nodes, render_patch_summary};
//! use vdiff_core::model::VNode;
//!
//! let old = VNode::element("div");
//! let new = VNode::element("div").with_child(VNode::element("span"));
//!
//! let patches = diff_nodes(&old, &new);
//! assert_eq!(patches.len(), 1);
//! println!("{}", render_patch_summary(&patches));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical patch sequences.
//! - **Ordering**: keyed removals and reorders (each followed by that child's
//!   nested patches) come first in old order, then keyed insertions in new
//!   order, then positional edits by ascending index.
//! - **Traversal independence**: `Recursive` and `WorkStack` traversals emit
//!   the same sequence.

pub mod engine;
pub mod plan;
pub mod summary;

pub use engine::{diff_nodes, diff_nodes_with_config};
pub use plan::Step;
pub use summary::{describe_node, render_patch_summary, PatchStats};
