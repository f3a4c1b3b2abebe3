//! OpenAI Provider Implementation
//!
//! Chat completions plus DALL-E image generation. This is the content-stage
//! provider in the enhanced pipeline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::llm::error::{LlmError, Result};
use crate::core::llm::provider::LlmProvider;
use crate::core::llm::types::{CompletionRequest, CompletionResponse, ConnectionStatus};

use super::model_label;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI provider
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String, max_tokens: u32, base_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            max_tokens,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            client,
        }
    }

    fn check_configured(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::NotConfigured("openai".to_string()));
        }
        Ok(())
    }

    fn build_messages(&self, request: &CompletionRequest) -> Vec<serde_json::Value> {
        let mut messages = Vec::new();

        if let Some(system) = &request.system_prompt {
            messages.push(serde_json::json!({
                "role": "system",
                "content": system
            }));
        }

        messages.push(serde_json::json!({
            "role": "user",
            "content": request.prompt
        }));

        messages
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn id(&self) -> &str {
        "openai"
    }

    fn name(&self) -> &str {
        "OpenAI"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.check_configured()?;

        let url = format!("{}/chat/completions", self.base_url);
        let messages = self.build_messages(&request);

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": request.max_tokens.unwrap_or(self.max_tokens)
        });

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        let start = std::time::Instant::now();
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency = start.elapsed().as_millis() as u64;

        if status == reqwest::StatusCode::UNAUTHORIZED {
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

        let content = json["choices"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| LlmError::InvalidResponse("Missing content".to_string()))?
            .to_string();

        Ok(CompletionResponse {
            content,
            model: json["model"].as_str().unwrap_or(&self.model).to_string(),
            provider: "openai".to_string(),
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

        let url = format!("{}/models", self.base_url);
        match self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => ConnectionStatus {
                success: true,
                message: format!(
                    "Kết nối thành công với {}",
                    model_label("openai", &self.model)
                ),
            },
            Ok(resp) => ConnectionStatus {
                success: false,
                message: format!("OpenAI API Error: {}", resp.status().as_u16()),
            },
            Err(e) => ConnectionStatus {
                success: false,
                message: format!("Lỗi kết nối: {e}"),
            },
        }
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        self.check_configured()?;

        let url = format!("{}/images/generations", self.base_url);
        let body = serde_json::json!({
            "model": "dall-e-3",
            "prompt": prompt,
            "n": 1,
            "size": "1024x1024",
            "quality": "standard"
        });

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
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
        json["data"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|d| d["url"].as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| LlmError::InvalidResponse("Missing image url".to_string()))
    }

    fn supports_images(&self) -> bool {
        true
    }
}
