//! vdiff Core - virtual tree reconciliation
//!
//! This crate provides the diffing kernel of a declarative UI runtime:
//! - Immutable virtual trees of static elements, regular components and
//!   memo components
//! - Kind predicates over tree nodes
//! - The reconciliation engine producing an ordered patch sequence
//! - Patch statistics and Markdown summaries
//! - Configuration, structured errors and logging

pub mod config;
pub mod diff;
pub mod errors;
pub mod kind;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use config::{DiffConfig, Traversal};
pub use diff::{diff_nodes, diff_nodes_with_config, render_patch_summary, PatchStats};
pub use errors::{ExError, ExErrorKind, Result, VdiffError};
pub use kind::{is_memo_component_vnode, is_regular_component_vnode, is_static_vnode};
pub use model::{Comparator, Component, Key, Patch, PropValue, Props, VNode};
pub use vdiff_core_types::{NodeKind, PatchKind};
