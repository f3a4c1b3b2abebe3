//! Generation Pipelines
//!
//! Two orchestrators drive the studio. `ContentOrchestrator` is the simple
//! single-provider pipeline: one provider handles both ideation and drafting,
//! and an unconfigured instance serves deterministic mock output so the rest
//! of the product keeps working during development. `EnhancedOrchestrator` is
//! the research-then-write pipeline: Gemini gathers market insights at low
//! temperature, OpenAI writes channel-tailored structured content at high
//! temperature. Research failures are never fatal; content failures are.

use std::sync::Arc;

use futures::future::join_all;
use indexmap::IndexMap;
use tracing::warn;

use crate::config::{AiConfig, EnhancedAiConfig};
use crate::core::channels::ChannelCatalog;
use crate::core::llm::providers::ProviderConfig;
use crate::core::llm::{
    CompletionRequest, ConnectionStatus, LlmError, LlmProvider, Result,
};
use crate::core::parser;
use crate::core::prompts;
use crate::core::types::{
    ContentIdea, ContentRequest, EnhancedContentOutput, MarketInsight, SocialPost,
    StructuredContent,
};

const SYSTEM_PROMPT: &str =
    "Bạn là chuyên gia Content Marketing cho Tiximax, chuyên tạo nội dung logistics và e-commerce.";

const ENHANCED_IDEA_SYSTEM_PROMPT: &str =
    "Bạn là Chuyên gia Content Marketing cho Tiximax với 20 năm kinh nghiệm.";

const ENHANCED_CONTENT_SYSTEM_PROMPT: &str =
    "Bạn là Chuyên gia Content Marketing hàng đầu cho Tiximax.";

/// Canned ideas served when no provider is configured, and when an idea
/// response cannot be parsed.
pub fn mock_ideas() -> Vec<ContentIdea> {
    vec![
        ContentIdea {
            id: "1".to_string(),
            title: "Bí Mật Đằng Sau Việc Mua Hàng Hàn Quốc Giá Rẻ".to_string(),
            objective: "Tăng nhận thức về dịch vụ mua hộ Hàn Quốc".to_string(),
            target_segment: "Cá nhân yêu thích K-beauty và thời trang Hàn".to_string(),
            core_content: "Video TikTok ngắn kể chuyện một cô gái tìm được secret source để mua mỹ phẩm Hàn authentic với giá gốc...".to_string(),
            insight: "Nỗi đau về hàng giả và giá đội cao khi mua mỹ phẩm Hàn".to_string(),
            cta: "DM ngay để được tư vấn miễn phí".to_string(),
            channel_format: "TikTok Video (30s)".to_string(),
        },
        ContentIdea {
            id: "2".to_string(),
            title: "Tại Sao Shop Nhỏ Lại Cần Đối Tác Logistics Quốc Tế?".to_string(),
            objective: "Thúc đẩy cân nhắc từ chủ shop SME".to_string(),
            target_segment: "Chủ shop online muốn mở rộng nguồn hàng".to_string(),
            core_content: "Bài viết blog phân tích chi phí và lợi ích khi có đối tác logistics chuyên nghiệp...".to_string(),
            insight: "Lo ngại về chi phí và độ phức tạp khi nhập hàng quốc tế".to_string(),
            cta: "Đăng ký nhận báo giá chi tiết".to_string(),
            channel_format: "Blog Article (800 từ)".to_string(),
        },
        ContentIdea {
            id: "3".to_string(),
            title: "Ngôn Ngữ Học Chết Tiệt - Drama Order Đồ Nhật".to_string(),
            objective: "Viral awareness về khó khăn ngôn ngữ".to_string(),
            target_segment: "Gen Z yêu thích văn hóa Nhật Bản".to_string(),
            core_content: "Video hài hước về những tình huống \"khóc dở mếu dở\" khi tự order đồ Nhật...".to_string(),
            insight: "Nỗi sợ về rào cản ngôn ngữ và thủ tục phức tạp".to_string(),
            cta: "Tag bạn bè từng gặp tình huống này".to_string(),
            channel_format: "TikTok/Reel Viral (15s)".to_string(),
        },
    ]
}

/// Canned detailed draft served when no provider is configured.
pub fn mock_detailed_content(idea: &ContentIdea) -> String {
    format!(
        r#"
# {title}

## Hook (Câu mở đầu hấp dẫn)
Bạn có biết rằng 90% người Việt mua hàng quốc tế online đều gặp phải ít nhất 1 trong 3 vấn đề này không?

## Vấn đề (Pain Points)
❌ Hàng giả tràn lan, không biết nguồn nào tin được
❌ Giá bị đội lên gấp 2-3 lần so với giá gốc
❌ Thời gian chờ đợi quá lâu, không rõ hàng về khi nào

## Giải pháp (Tiximax Solution)
✅ **Nguồn gốc 100% chính hãng**: Mua trực tiếp từ các cửa hàng uy tín
✅ **Giá gốc + phí dịch vụ minh bạch**: Tiết kiệm 40-60% so với mua trong nước
✅ **Theo dõi real-time**: Biết chính xác hàng đang ở đâu, về khi nào

## Thông tin bổ trợ
📊 **Số liệu thực tế**: Tiximax đã hỗ trợ 10,000+ đơn hàng với tỷ lệ hài lòng 98.5%
🏆 **Cam kết**: Hoàn tiền 100% nếu hàng không đúng như mô tả

## Call to Action
💬 **DM ngay để được tư vấn miễn phí** về dịch vụ mua hộ!
🎁 **Ưu đãi đặc biệt**: Giảm 30% phí dịch vụ cho 100 khách hàng đầu tiên!

#TiximaxLogistics #MuaHoQuocTe #ShipHangNuocNgoai
"#,
        title = idea.title
    )
}

/// Single fallback idea used when the enhanced ideation response cannot be
/// parsed.
fn fallback_idea(request: &ContentRequest) -> ContentIdea {
    ContentIdea {
        id: "1".to_string(),
        title: "Bí Mật Order Hàng Quốc Tế Không Hề Khó".to_string(),
        objective: request.objective.to_string(),
        target_segment: "Người mới bắt đầu order hàng quốc tế".to_string(),
        core_content: "Video hướng dẫn step-by-step order hàng với Tiximax".to_string(),
        insight: "Nỗi lo về độ phức tạp và rủi ro khi order hàng quốc tế".to_string(),
        cta: "Inbox ngay để được hỗ trợ order đầu tiên".to_string(),
        channel_format: request.channel.clone(),
    }
}

// ============================================================================
// Simple pipeline
// ============================================================================

/// Single-provider pipeline. Holds an optional provider: `None` means mock
/// mode, in which canned output is served without any network traffic.
pub struct ContentOrchestrator {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl ContentOrchestrator {
    /// Mock-mode orchestrator, no provider attached.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn new(config: &AiConfig) -> Self {
        Self {
            provider: Some(config.to_provider_config().create_provider()),
        }
    }

    pub fn with_provider(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate 3-5 content ideas for a brief. A response that cannot be
    /// parsed as an idea array degrades to the canned ideas.
    pub async fn generate_ideas(&self, request: &ContentRequest) -> Result<Vec<ContentIdea>> {
        let provider = match &self.provider {
            Some(p) => p,
            None => return Ok(mock_ideas()),
        };

        let completion = provider
            .complete(
                CompletionRequest::new(prompts::idea_prompt(request))
                    .with_system_prompt(SYSTEM_PROMPT)
                    .with_temperature(0.7)
                    .with_max_tokens(2000),
            )
            .await?;

        match parser::extract_array::<ContentIdea>(&completion.content) {
            Ok(ideas) => Ok(ideas),
            Err(e) => {
                warn!("failed to parse idea response, using canned ideas: {e}");
                Ok(mock_ideas())
            }
        }
    }

    /// Draft full content for one chosen idea. The output is free text.
    pub async fn generate_detailed_content(
        &self,
        idea: &ContentIdea,
        request: &ContentRequest,
    ) -> Result<String> {
        let provider = match &self.provider {
            Some(p) => p,
            None => return Ok(mock_detailed_content(idea)),
        };

        let completion = provider
            .complete(
                CompletionRequest::new(prompts::detailed_content_prompt(idea, request))
                    .with_system_prompt(SYSTEM_PROMPT)
                    .with_temperature(0.7)
                    .with_max_tokens(4000),
            )
            .await?;

        Ok(completion.content)
    }

    /// Draft content for every idea concurrently. The result always has one
    /// entry per idea, in input order; a failed idea maps to a Vietnamese
    /// error string instead of dropping out.
    pub async fn generate_bulk_content(
        &self,
        ideas: &[ContentIdea],
        request: &ContentRequest,
    ) -> IndexMap<String, String> {
        let futures = ideas.iter().map(|idea| async move {
            let content = self.generate_detailed_content(idea, request).await;
            (idea.id.clone(), content)
        });

        let mut results = IndexMap::new();
        for (id, outcome) in join_all(futures).await {
            match outcome {
                Ok(content) => {
                    results.insert(id, content);
                }
                Err(e) => {
                    warn!("bulk content generation failed for idea {id}: {e}");
                    results.insert(
                        id,
                        "Không thể tạo nội dung chi tiết. Vui lòng thử lại.".to_string(),
                    );
                }
            }
        }
        results
    }

    /// Generate an image for a prompt, when the provider supports it.
    pub async fn generate_content_image(&self, prompt: &str) -> Result<String> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| LlmError::NotConfigured("ai".to_string()))?;
        provider.generate_image(prompt).await
    }

    pub async fn test_connection(&self) -> ConnectionStatus {
        match &self.provider {
            Some(provider) => provider.test_connection().await,
            None => ConnectionStatus {
                success: false,
                message: "Chưa cấu hình API key".to_string(),
            },
        }
    }
}

// ============================================================================
// Enhanced pipeline
// ============================================================================

/// Research-then-write pipeline. Gemini is the research provider, OpenAI the
/// content provider; both must be credentialed up front.
pub struct EnhancedOrchestrator {
    research: Arc<dyn LlmProvider>,
    content: Arc<dyn LlmProvider>,
    catalog: ChannelCatalog,
}

impl EnhancedOrchestrator {
    pub fn new(config: &EnhancedAiConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(LlmError::NotConfigured(
                "Vui lòng cấu hình đầy đủ API keys cho cả Gemini và OpenAI".to_string(),
            ));
        }

        let research = ProviderConfig::Gemini {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: None,
        }
        .create_provider();

        let content = ProviderConfig::OpenAi {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            max_tokens: 4096,
            base_url: None,
        }
        .create_provider();

        Ok(Self {
            research,
            content,
            catalog: ChannelCatalog::with_defaults(),
        })
    }

    /// Construct with explicit providers. Used by tests and embedders that
    /// manage their own gateway.
    pub fn with_providers(
        research: Arc<dyn LlmProvider>,
        content: Arc<dyn LlmProvider>,
        catalog: ChannelCatalog,
    ) -> Self {
        Self {
            research,
            content,
            catalog,
        }
    }

    pub fn catalog(&self) -> &ChannelCatalog {
        &self.catalog
    }

    /// Broad market research for a brief. Never fails: any provider or parse
    /// error degrades to the hardcoded fallback insights.
    pub async fn market_insights(&self, request: &ContentRequest) -> MarketInsight {
        let completion = self
            .research
            .complete(
                CompletionRequest::new(prompts::market_insight_prompt(request))
                    .with_temperature(0.3)
                    .with_max_tokens(1500),
            )
            .await;

        match completion {
            Ok(resp) => match parser::extract_object::<MarketInsight>(&resp.content) {
                Ok(insights) => insights,
                Err(e) => {
                    warn!("failed to parse market insights, using fallback: {e}");
                    MarketInsight::fallback()
                }
            },
            Err(e) => {
                warn!("market research call failed, using fallback insights: {e}");
                MarketInsight::fallback()
            }
        }
    }

    /// Research narrowed to one chosen idea. Degrades to broad insights on
    /// failure, which in turn degrade to the hardcoded fallback.
    pub async fn specific_insights(
        &self,
        idea: &ContentIdea,
        request: &ContentRequest,
    ) -> MarketInsight {
        let completion = self
            .research
            .complete(
                CompletionRequest::new(prompts::specific_insight_prompt(idea))
                    .with_temperature(0.3)
                    .with_max_tokens(1000),
            )
            .await;

        match completion {
            Ok(resp) => match parser::extract_object::<MarketInsight>(&resp.content) {
                Ok(insights) => insights,
                Err(e) => {
                    warn!("failed to parse specific insights, falling back to broad research: {e}");
                    self.market_insights(request).await
                }
            },
            Err(e) => {
                warn!("specific research call failed, falling back to broad research: {e}");
                self.market_insights(request).await
            }
        }
    }

    /// Two-stage ideation: research the market, then ask the content provider
    /// for ideas grounded in those insights and the channel config. A content
    /// stage failure is fatal; an unparseable idea array degrades to a single
    /// fallback idea.
    pub async fn generate_ideas_with_insights(
        &self,
        request: &ContentRequest,
    ) -> Result<Vec<ContentIdea>> {
        let insights = self.market_insights(request).await;
        let channel_config = self.catalog.get_by_name(&request.channel);

        let completion = self
            .content
            .complete(
                CompletionRequest::new(prompts::idea_prompt_with_insights(
                    request,
                    &insights,
                    channel_config,
                ))
                .with_system_prompt(ENHANCED_IDEA_SYSTEM_PROMPT)
                .with_temperature(0.7)
                .with_max_tokens(2500),
            )
            .await?;

        match parser::extract_array::<ContentIdea>(&completion.content) {
            Ok(ideas) => Ok(ideas),
            Err(e) => {
                warn!("failed to parse enhanced idea response, using fallback idea: {e}");
                Ok(vec![fallback_idea(request)])
            }
        }
    }

    /// Two-stage detailed drafting: refresh insights for the idea, then have
    /// the content provider produce structured JSON matching the brief's
    /// content kind. An unparseable reply degrades to a social post built
    /// from the idea itself.
    pub async fn generate_enhanced_detailed_content(
        &self,
        idea: &ContentIdea,
        request: &ContentRequest,
    ) -> Result<EnhancedContentOutput> {
        let insights = self.specific_insights(idea, request).await;
        let channel_config = self.catalog.get_by_name(&request.channel);

        let max_tokens = match prompts::ContentKind::detect(request) {
            prompts::ContentKind::Video => 3000,
            prompts::ContentKind::Blog if prompts::is_expert_seo(request) => 6000,
            _ => 4000,
        };

        let completion = self
            .content
            .complete(
                CompletionRequest::new(prompts::enhanced_detailed_content_prompt(
                    idea,
                    request,
                    &insights,
                    channel_config,
                ))
                .with_system_prompt(ENHANCED_CONTENT_SYSTEM_PROMPT)
                .with_temperature(0.7)
                .with_max_tokens(max_tokens),
            )
            .await?;

        let content = match parser::extract_structured(&completion.content) {
            Ok(content) => content,
            Err(e) => {
                warn!("failed to parse enhanced content response, using fallback post: {e}");
                StructuredContent::SocialPost(SocialPost {
                    body_content: format!(
                        "Nội dung được tạo cho: {}\n\n{}",
                        idea.title, idea.core_content
                    ),
                    call_to_action: idea.cta.clone(),
                    tone_applied: Some(request.tone.join(", ")),
                    ..Default::default()
                })
            }
        };

        Ok(EnhancedContentOutput {
            channel_selected: request.channel.clone(),
            content,
            channel_config_applied: channel_config.cloned(),
            market_insights_used: insights,
        })
    }

    /// Draft structured content for every idea concurrently. The map always
    /// has one entry per idea, in input order; a failed idea maps to a
    /// plain-text error payload so the batch result stays complete.
    pub async fn generate_bulk_enhanced_content(
        &self,
        ideas: &[ContentIdea],
        request: &ContentRequest,
    ) -> IndexMap<String, EnhancedContentOutput> {
        let futures = ideas.iter().map(|idea| async move {
            let outcome = self.generate_enhanced_detailed_content(idea, request).await;
            (idea.id.clone(), outcome)
        });

        let mut results = IndexMap::new();
        for (id, outcome) in join_all(futures).await {
            match outcome {
                Ok(output) => {
                    results.insert(id, output);
                }
                Err(e) => {
                    warn!("bulk enhanced generation failed for idea {id}: {e}");
                    results.insert(
                        id,
                        EnhancedContentOutput {
                            channel_selected: request.channel.clone(),
                            content: StructuredContent::PlainText {
                                text: "Không thể tạo nội dung chi tiết. Vui lòng thử lại."
                                    .to_string(),
                            },
                            channel_config_applied: None,
                            market_insights_used: MarketInsight::fallback(),
                        },
                    );
                }
            }
        }
        results
    }

    /// Generate an image via the content provider.
    pub async fn generate_content_image(&self, prompt: &str) -> Result<String> {
        self.content.generate_image(prompt).await
    }

    /// Probe both providers.
    pub async fn test_connections(&self) -> (ConnectionStatus, ConnectionStatus) {
        let research = self.research.test_connection().await;
        let content = self.content.test_connection().await;
        (research, content)
    }
}
