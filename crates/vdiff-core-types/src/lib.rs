//! Core types shared across vdiff facilities
//!
//! This crate provides foundational types used by the reconciliation engine,
//! its patch summaries and the logging facility:
//!
//! - **Kind tags**: NodeKind, PatchKind
//! - **Schema constants**: Canonical field keys and event names

pub mod kinds;
pub mod schema;

pub use kinds::{NodeKind, PatchKind};
