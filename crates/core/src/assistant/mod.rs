//! Dashboard assistant planning core.
//!
//! Everything in this module is pure and total: untrusted input comes in as
//! `serde_json::Value`, valid domain values come out, and malformed pieces
//! are dropped rather than escalated. The deterministic planner is the
//! terminal fallback for every failure mode of the generative path, so it
//! performs no I/O and consults no external state.

pub mod history;
pub mod planner;
pub mod sanitize;
pub mod schema;
pub mod validate;

pub use history::sanitize_history;
pub use planner::plan_deterministically;
pub use sanitize::sanitize_plan;
pub use schema::{
    AssistantPlan, ConversationTurn, Orientation, SourceId, Speaker, WidgetKind, WidgetSpec,
};
pub use validate::validate_widget;
