//! Assistant runtime - generative planning with a deterministic safety net
//!
//! This crate holds the untrusted half of the dual-path planner:
//! - **Completion client** (`llm`) - one bounded request to an
//!   OpenAI-compatible backend, JSON-object output, no retries
//! - **Prompt assembly** (`prompt`) - fixed system instruction plus the
//!   sanitized conversation window
//! - **Orchestration** (`runtime`) - try the generative path, validate and
//!   repair its output, fall back to the deterministic planner on any failure
//!
//! # Safety Principle
//!
//! The model is strictly a translator from natural language to widget
//! descriptors. It never invents vocabulary: everything it returns passes
//! through the schema validator in `fireboard-core`, and anything that does
//! not survive validation degrades to the deterministic plan.

pub mod llm;
pub mod prompt;
pub mod runtime;

pub use llm::{ChatMessage, CompletionError, LlmClient, OpenAiClient};
pub use runtime::AssistantRuntime;
