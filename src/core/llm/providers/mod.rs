//! LLM Provider Implementations
//!
//! Concrete implementations of the `LlmProvider` trait for the supported
//! providers, plus the configuration enum used to construct them.

mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use std::sync::Arc;

use super::provider::LlmProvider;

/// Static metadata about a supported provider, for settings UIs.
#[derive(Debug, Clone, Copy)]
pub struct ProviderMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub default_model: &'static str,
    pub requires_api_key: bool,
}

/// All supported providers.
pub const PROVIDERS: &[ProviderMeta] = &[
    ProviderMeta {
        id: "openai",
        name: "OpenAI",
        default_model: "gpt-4.1-2025-04-14",
        requires_api_key: true,
    },
    ProviderMeta {
        id: "gemini",
        name: "Gemini",
        default_model: "gemini-2.0-flash-exp",
        requires_api_key: true,
    },
];

/// Selectable OpenAI models: (model id, display label).
pub const OPENAI_MODELS: &[(&str, &str)] = &[
    ("gpt-4.1-2025-04-14", "GPT-4.1 (Latest)"),
    ("o4-mini-2025-04-16", "o4-mini (Fast Reasoning)"),
    ("gpt-4o", "GPT-4o (Vision)"),
    ("gpt-4.1-mini-2025-04-14", "GPT-4.1 Mini"),
];

/// Selectable Gemini models: (model id, display label).
pub const GEMINI_MODELS: &[(&str, &str)] = &[
    ("gemini-2.0-flash-exp", "Gemini 2.0 Flash (Experimental)"),
    ("gemini-1.5-pro", "Gemini 1.5 Pro"),
    ("gemini-1.5-flash", "Gemini 1.5 Flash"),
];

/// Display label for a model id, falling back to the id itself.
pub fn model_label<'a>(provider_id: &str, model: &'a str) -> &'a str {
    let table = match provider_id {
        "openai" => OPENAI_MODELS,
        "gemini" => GEMINI_MODELS,
        _ => return model,
    };
    table
        .iter()
        .find(|(id, _)| *id == model)
        .map(|(_, label)| *label)
        .unwrap_or(model)
}

/// Configuration for creating providers
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    OpenAi {
        api_key: String,
        model: String,
        max_tokens: u32,
        base_url: Option<String>,
    },
    Gemini {
        api_key: String,
        model: String,
        base_url: Option<String>,
    },
}

impl ProviderConfig {
    /// Build a config from a provider id, falling back to OpenAI for an
    /// unknown id.
    pub fn from_parts(provider_id: &str, api_key: &str, model: &str) -> Self {
        match provider_id {
            "gemini" => ProviderConfig::Gemini {
                api_key: api_key.to_string(),
                model: model.to_string(),
                base_url: None,
            },
            _ => ProviderConfig::OpenAi {
                api_key: api_key.to_string(),
                model: model.to_string(),
                max_tokens: 4096,
                base_url: None,
            },
        }
    }

    /// Create a provider from this configuration
    pub fn create_provider(&self) -> Arc<dyn LlmProvider> {
        match self {
            ProviderConfig::OpenAi {
                api_key,
                model,
                max_tokens,
                base_url,
            } => Arc::new(OpenAiProvider::new(
                api_key.clone(),
                model.clone(),
                *max_tokens,
                base_url.clone(),
            )),
            ProviderConfig::Gemini {
                api_key,
                model,
                base_url,
            } => Arc::new(GeminiProvider::new(
                api_key.clone(),
                model.clone(),
                base_url.clone(),
            )),
        }
    }

    pub fn provider_id(&self) -> &'static str {
        match self {
            ProviderConfig::OpenAi { .. } => "openai",
            ProviderConfig::Gemini { .. } => "gemini",
        }
    }

    pub fn api_key(&self) -> &str {
        match self {
            ProviderConfig::OpenAi { api_key, .. } => api_key,
            ProviderConfig::Gemini { api_key, .. } => api_key,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            ProviderConfig::OpenAi { model, .. } => model,
            ProviderConfig::Gemini { model, .. } => model,
        }
    }

    /// Copy of this config with the API key replaced, for logging contexts.
    pub fn without_secret(&self) -> Self {
        let mut clone = self.clone();
        match &mut clone {
            ProviderConfig::OpenAi { api_key, .. } => *api_key = "***".to_string(),
            ProviderConfig::Gemini { api_key, .. } => *api_key = "***".to_string(),
        }
        clone
    }
}
