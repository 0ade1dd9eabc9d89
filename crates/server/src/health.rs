use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    planner_mode: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub planner: HealthCheck,
    pub checked_at: String,
}

pub fn router(planner_mode: &'static str) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { planner_mode })
}

/// The planner is total, so the endpoint always reports ready; the planner
/// check carries the operating mode instead of a degradation flag.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let payload = HealthResponse {
        status: "ready",
        service: HealthCheck {
            status: "ready",
            detail: "fireboard-server runtime initialized".to_string(),
        },
        planner: HealthCheck {
            status: "ready",
            detail: format!("planner mode: {}", state.planner_mode),
        },
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}
