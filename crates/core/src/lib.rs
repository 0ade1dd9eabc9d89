pub mod assistant;
pub mod config;
pub mod errors;

pub use assistant::history::sanitize_history;
pub use assistant::planner::plan_deterministically;
pub use assistant::sanitize::sanitize_plan;
pub use assistant::schema::{
    AssistantPlan, ConversationTurn, Orientation, SourceId, Speaker, WidgetKind, WidgetSpec,
};
pub use assistant::validate::validate_widget;
pub use errors::InterfaceError;
