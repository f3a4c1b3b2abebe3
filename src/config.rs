//! Provider credential configuration.
//!
//! These records match the JSON blobs the settings UI persists: the simple
//! pipeline stores `{provider, model, apiKey}`, the enhanced dual-provider
//! pipeline stores `{geminiApiKey, openaiApiKey, geminiModel, openaiModel}`.
//! The core never touches storage on its own; `Settings::load`/`save` are
//! the glue offered to the shell, and a missing or corrupt file simply
//! yields defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::llm::providers::ProviderConfig;

/// Which provider the simple (single-provider) pipeline talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Single-provider configuration for the simple pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    pub provider: ProviderKind,
    pub model: String,
    pub api_key: String,
}

impl AiConfig {
    pub fn new(provider: ProviderKind, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// A config counts as configured once it carries a non-blank API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Map onto the provider-gateway configuration.
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig::from_parts(self.provider.id(), &self.api_key, &self.model)
    }
}

/// Dual-provider configuration for the enhanced research-then-write pipeline.
///
/// Gemini is always the research provider and OpenAI always the content
/// provider; only credentials and model choices vary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedAiConfig {
    pub gemini_api_key: String,
    pub openai_api_key: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_openai_model() -> String {
    "gpt-4.1-2025-04-14".to_string()
}

impl EnhancedAiConfig {
    pub fn new(gemini_api_key: impl Into<String>, openai_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            openai_api_key: openai_api_key.into(),
            gemini_model: default_gemini_model(),
            openai_model: default_openai_model(),
        }
    }

    /// The enhanced pipeline needs both credentials at once.
    pub fn is_configured(&self) -> bool {
        !self.gemini_api_key.trim().is_empty() && !self.openai_api_key.trim().is_empty()
    }
}

/// On-disk settings envelope holding whichever pipeline(s) the user set up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ai: Option<AiConfig>,
    pub enhanced: Option<EnhancedAiConfig>,
}

impl Settings {
    /// Default settings file: `<config dir>/content-studio/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("content-studio").join("settings.json"))
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unparseable.
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("settings file at {} is corrupt: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist settings as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, raw)
    }
}
