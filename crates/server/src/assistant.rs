//! Dashboard assistant endpoint.
//!
//! `POST /api/assistant/dashboard` — accepts `{query, history?}` and returns
//! the final widget plan. The only caller-visible failure is an empty query;
//! every internal failure of the generative path resolves to the
//! deterministic fallback inside the runtime and still yields HTTP 200.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use fireboard_agent::AssistantRuntime;
use fireboard_core::assistant::schema::AssistantPlan;
use fireboard_core::InterfaceError;

#[derive(Clone)]
pub struct AssistantState {
    runtime: Arc<AssistantRuntime>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantQueryRequest {
    pub query: String,
    /// Any non-array shape is treated as an empty history.
    #[serde(default)]
    pub history: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

pub fn router(runtime: Arc<AssistantRuntime>) -> Router {
    Router::new()
        .route("/api/assistant/dashboard", post(dashboard_query))
        .with_state(AssistantState { runtime })
}

pub async fn dashboard_query(
    State(state): State<AssistantState>,
    Json(request): Json<AssistantQueryRequest>,
) -> Result<Json<AssistantPlan>, (StatusCode, Json<ApiError>)> {
    let correlation_id = Uuid::new_v4().to_string();

    let query = request.query.trim();
    if query.is_empty() {
        let error = InterfaceError::bad_request("query is empty after trimming", &correlation_id);
        warn!(
            event_name = "assistant.query.rejected",
            correlation_id = %correlation_id,
            error = %error,
            "rejected empty dashboard query"
        );
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError { error: error.user_message().to_string() }),
        ));
    }

    let raw_history: &[Value] = request
        .history
        .as_ref()
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let plan = state.runtime.produce_plan(query, raw_history).await;

    info!(
        event_name = "assistant.query.answered",
        correlation_id = %correlation_id,
        widget_count = plan.widgets.len(),
        "dashboard query answered"
    );

    Ok(Json(plan))
}
