//! Plan orchestration: generative attempt, validation, deterministic fallback.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use fireboard_core::assistant::schema::AssistantPlan;
use fireboard_core::config::LlmConfig;
use fireboard_core::{plan_deterministically, sanitize_history, sanitize_plan};

use crate::llm::{LlmClient, OpenAiClient};
use crate::prompt::build_messages;

/// The sole entry point for plan production.
///
/// Holds the optional completion client; without a configured credential the
/// runtime never attempts an external call and serves deterministic plans
/// only. Stateless across requests, safe to share behind an `Arc`.
pub struct AssistantRuntime {
    llm: Option<Arc<dyn LlmClient>>,
}

impl AssistantRuntime {
    pub fn from_config(config: &LlmConfig) -> Result<Self, reqwest::Error> {
        let llm = OpenAiClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn LlmClient>);
        Ok(Self { llm })
    }

    /// Deterministic-only runtime. Used when no credential is configured and
    /// by boundary tests.
    pub fn deterministic_only() -> Self {
        Self { llm: None }
    }

    pub fn with_client(client: Arc<dyn LlmClient>) -> Self {
        Self { llm: Some(client) }
    }

    pub fn generative_enabled(&self) -> bool {
        self.llm.is_some()
    }

    /// Produces a plan for a non-empty query. Total: every failure of the
    /// generative path collapses to the deterministic planner, and the
    /// returned plan always carries 1..=4 schema-valid widgets.
    pub async fn produce_plan(&self, query: &str, raw_history: &[Value]) -> AssistantPlan {
        let Some(client) = &self.llm else {
            debug!(
                event_name = "assistant.plan.deterministic_only",
                "no completion credential configured, serving deterministic plan"
            );
            return plan_deterministically(query);
        };

        let history = sanitize_history(raw_history);
        let messages = build_messages(query, &history);

        match client.complete(&messages).await {
            Ok(completion) => match serde_json::from_str::<Value>(&completion) {
                Ok(raw_plan) => sanitize_plan(&raw_plan, query),
                Err(error) => {
                    warn!(
                        event_name = "assistant.plan.fallback",
                        reason = "malformed_completion",
                        error = %error,
                        "completion was not valid JSON, serving deterministic plan"
                    );
                    plan_deterministically(query)
                }
            },
            Err(error) => {
                warn!(
                    event_name = "assistant.plan.fallback",
                    reason = "completion_failed",
                    error = %error,
                    "completion attempt failed, serving deterministic plan"
                );
                plan_deterministically(query)
            }
        }
    }
}
