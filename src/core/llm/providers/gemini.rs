//! Gemini Provider Implementation
//!
//! API-key access to the Generative Language API. This is the research-stage
//! provider in the enhanced pipeline; the key travels as a query parameter
//! rather than a header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::llm::error::{LlmError, Result};
use crate::core::llm::provider::LlmProvider;
use crate::core::llm::types::{CompletionRequest, CompletionResponse, ConnectionStatus};

use super::model_label;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gemini provider
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            client,
        }
    }

    /// Google API keys start with "AIza". A cheap local sanity check before
    /// any network round trip.
    pub fn is_valid_api_key_format(key: &str) -> bool {
        key.starts_with("AIza") && key.len() >= 30
    }

    fn check_configured(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::NotConfigured("gemini".to_string()));
        }
        Ok(())
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn id(&self) -> &str {
        "gemini"
    }

    fn name(&self) -> &str {
        "Gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.check_configured()?;

        let mut generation_config = serde_json::json!({});
        if let Some(temp) = request.temperature {
            generation_config["temperature"] = serde_json::json!(temp);
        }
        if let Some(max) = request.max_tokens {
            generation_config["maxOutputTokens"] = serde_json::json!(max);
        }

        let mut body = serde_json::json!({
            "contents": [{
                "parts": [{
                    "text": request.prompt
                }]
            }],
            "generationConfig": generation_config
        });

        if let Some(system) = &request.system_prompt {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system }]
            });
        }

        let start = std::time::Instant::now();
        let resp = self
            .client
            .post(self.generate_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency = start.elapsed().as_millis() as u64;

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(LlmError::AuthError("Invalid API key".to_string()));
        }

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let json: serde_json::Value = resp.json().await?;

        let content = json["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"][0]["text"].as_str())
            .ok_or_else(|| LlmError::InvalidResponse("Missing content".to_string()))?
            .to_string();

        Ok(CompletionResponse {
            content,
            model: self.model.clone(),
            provider: "gemini".to_string(),
            latency_ms: latency,
        })
    }

    async fn test_connection(&self) -> ConnectionStatus {
        if self.api_key.trim().is_empty() {
            return ConnectionStatus {
                success: false,
                message: "Chưa cấu hình API key".to_string(),
            };
        }

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": "Hello, this is a test message." }] }],
            "generationConfig": { "maxOutputTokens": 1 }
        });

        match self
            .client
            .post(self.generate_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => ConnectionStatus {
                success: true,
                message: format!(
                    "Kết nối thành công với {}",
                    model_label("gemini", &self.model)
                ),
            },
            Ok(resp) => ConnectionStatus {
                success: false,
                message: format!("Gemini API Error: {}", resp.status().as_u16()),
            },
            Err(e) => ConnectionStatus {
                success: false,
                message: format!("Lỗi kết nối: {e}"),
            },
        }
    }
}
