//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Node identity
pub const FIELD_OLD_KIND: &str = "old_kind";
pub const FIELD_NEW_KIND: &str = "new_kind";
pub const FIELD_KEY: &str = "key";
pub const FIELD_TRAVERSAL: &str = "traversal";

// Collection sizes
pub const FIELD_PATCH_COUNT: &str = "patch_count";
pub const FIELD_REPLACE_COUNT: &str = "replace_count";
pub const FIELD_PROPS_COUNT: &str = "props_count";
pub const FIELD_REORDER_COUNT: &str = "reorder_count";
pub const FIELD_INSERT_COUNT: &str = "insert_count";
pub const FIELD_REMOVE_COUNT: &str = "remove_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DUPLICATE_KEY: &str = "duplicate_key";
