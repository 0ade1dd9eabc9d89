use fireboard_agent::AssistantRuntime;
use fireboard_core::config::{AppConfig, ConfigError};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub runtime: AssistantRuntime,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("completion client construction failed: {0}")]
    CompletionClient(#[source] reqwest::Error),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let runtime =
        AssistantRuntime::from_config(&config.llm).map_err(BootstrapError::CompletionClient)?;

    info!(
        event_name = "system.bootstrap.runtime_ready",
        correlation_id = "bootstrap",
        generative_enabled = runtime.generative_enabled(),
        "assistant runtime initialized"
    );

    Ok(Application { config, runtime })
}
