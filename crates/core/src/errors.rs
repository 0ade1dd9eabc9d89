use thiserror::Error;

/// Failures surfaced at the HTTP boundary.
///
/// The planner itself is total: the only caller-visible failure is a bad
/// request. Everything else (credential, network, malformed completions) is
/// absorbed by the deterministic fallback and never reaches this enum.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn bad_request(message: impl Into<String>, correlation_id: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into(), correlation_id: correlation_id.into() }
    }

    /// Stable message safe to return to the dashboard; details stay in logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Запрос пустой. Сформулируйте вопрос по данным дашборда.",
            Self::Internal { .. } => "Произошла внутренняя ошибка. Повторите запрос позже.",
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. } | Self::Internal { correlation_id, .. } => {
                correlation_id
            }
        }
    }
}
