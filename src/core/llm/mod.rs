//! LLM Provider Gateway
//!
//! Thin abstraction over the two chat-completion APIs the studio talks to.
//! Consumers hold an `Arc<dyn LlmProvider>` and never see transport details;
//! provider construction goes through `providers::ProviderConfig`.

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;

pub use error::{LlmError, Result};
pub use provider::LlmProvider;
pub use types::{CompletionRequest, CompletionResponse, ConnectionStatus};
