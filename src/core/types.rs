//! Domain Model
//!
//! Core types for content briefs, generated ideas, market insights, and the
//! structured output of the enhanced pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::channels::ChannelConfig;

// ============================================================================
// Content Request
// ============================================================================

/// Marketing objective of a content brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Awareness,
    Interest,
    Conversion,
    Advocacy,
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Awareness => write!(f, "awareness"),
            Objective::Interest => write!(f, "interest"),
            Objective::Conversion => write!(f, "conversion"),
            Objective::Advocacy => write!(f, "advocacy"),
        }
    }
}

/// A user-authored content brief. Immutable once submitted; one brief drives
/// one generation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    pub objective: Objective,
    /// Funnel stage, free text from a fixed UI list.
    pub stage: String,
    /// Channel name, matched loosely against the channel catalog.
    pub channel: String,
    pub format: String,
    /// Length bucket (e.g. "short", "medium", "seo-expert").
    pub length: String,
    /// Requested tones, two at most recommended.
    pub tone: Vec<String>,
    /// Keywords in insertion order, duplicates rejected at add time.
    pub keywords: Vec<String>,
    pub exclusions: Vec<String>,
    pub promotion: Option<String>,
    pub cta: Option<String>,
}

impl ContentRequest {
    pub fn new(objective: Objective, channel: impl Into<String>) -> Self {
        Self {
            objective,
            stage: String::new(),
            channel: channel.into(),
            format: String::new(),
            length: String::new(),
            tone: Vec::new(),
            keywords: Vec::new(),
            exclusions: Vec::new(),
            promotion: None,
            cta: None,
        }
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = length.into();
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone.push(tone.into());
        self
    }

    pub fn with_promotion(mut self, promotion: impl Into<String>) -> Self {
        self.promotion = Some(promotion.into());
        self
    }

    pub fn with_cta(mut self, cta: impl Into<String>) -> Self {
        self.cta = Some(cta.into());
        self
    }

    /// Append a keyword, preserving insertion order. Duplicates are rejected;
    /// returns whether the keyword was added.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if self.keywords.iter().any(|k| k == &keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.add_keyword(keyword);
        self
    }

    pub fn with_exclusion(mut self, exclusion: impl Into<String>) -> Self {
        self.exclusions.push(exclusion.into());
        self
    }
}

// ============================================================================
// Generated Ideas
// ============================================================================

/// A structured pitch for one piece of content, prior to full drafting.
/// Ids are assigned sequentially ("1", "2", ...) within a generation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIdea {
    pub id: String,
    pub title: String,
    pub objective: String,
    pub target_segment: String,
    pub core_content: String,
    pub insight: String,
    pub cta: String,
    pub channel_format: String,
}

// ============================================================================
// Market Insights
// ============================================================================

/// A dated sales event surfaced by the research stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesEvent {
    pub name: String,
    pub country: String,
    pub dates: String,
}

/// Ephemeral research output from the research provider. Produced fresh per
/// generation call and folded into the content-stage prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketInsight {
    #[serde(default)]
    pub trending_products: Vec<String>,
    #[serde(default)]
    pub popular_keywords_related_to_shipping: Vec<String>,
    #[serde(default)]
    pub current_sales_events: Vec<SalesEvent>,
    #[serde(default, rename = "common_pain_points_from_new_data")]
    pub common_pain_points: Vec<String>,
    #[serde(default)]
    pub market_opportunities: Vec<String>,
}

impl MarketInsight {
    /// Hardcoded fallback used when the research stage fails. Research
    /// failures are non-fatal: the content stage always proceeds.
    pub fn fallback() -> Self {
        Self {
            trending_products: vec![
                "K-beauty skincare".to_string(),
                "Gaming gear từ Nhật".to_string(),
                "Fashion Hàn Quốc".to_string(),
            ],
            popular_keywords_related_to_shipping: vec![
                "ship hàng nhanh".to_string(),
                "phí ship rẻ".to_string(),
                "mua hộ uy tín".to_string(),
            ],
            current_sales_events: vec![SalesEvent {
                name: "Black Friday".to_string(),
                country: "US".to_string(),
                dates: "November 2024".to_string(),
            }],
            common_pain_points: vec![
                "Phí phát sinh không rõ ràng".to_string(),
                "Thời gian giao hàng lâu".to_string(),
            ],
            market_opportunities: vec![
                "Tăng nhu cầu mua hàng Hàn Quốc".to_string(),
                "Gaming market expansion".to_string(),
            ],
        }
    }
}

// ============================================================================
// Structured Content Output
// ============================================================================

/// One scene of a video script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptScene {
    pub scene_id: String,
    #[serde(default)]
    pub duration_seconds: u32,
    #[serde(default)]
    pub visual_description: String,
    #[serde(default)]
    pub audio_description: String,
    #[serde(default)]
    pub voice_over_vietnamese: String,
    #[serde(default)]
    pub text_overlay: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_visual_overlay: Option<String>,
}

/// Social media post payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialPost {
    #[serde(default)]
    pub title_suggestions: Vec<String>,
    #[serde(default)]
    pub body_content: String,
    #[serde(default)]
    pub call_to_action: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_visuals_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_applied: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_for_user: Option<String>,
}

/// Video script payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoScript {
    #[serde(default)]
    pub video_title_idea: String,
    #[serde(default)]
    pub video_duration_seconds: u32,
    #[serde(default)]
    pub target_audience_focus: String,
    #[serde(default)]
    pub tone_of_voice_script: String,
    #[serde(default)]
    pub script_scenes: Vec<ScriptScene>,
    #[serde(default)]
    pub call_to_action_script: String,
    #[serde(default)]
    pub suggested_hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_for_user: Option<String>,
}

/// Blog post payload. The outline preserves section order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub outline: IndexMap<String, String>,
    #[serde(default)]
    pub full_content_draft: String,
    #[serde(default)]
    pub keywords_for_seo: Vec<String>,
    #[serde(default)]
    pub call_to_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_for_user: Option<String>,
}

/// Closed sum of everything the detailed-content stage can produce. The
/// discriminant is assigned once at parse time; consumers never sniff fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "content_type")]
pub enum StructuredContent {
    #[serde(rename = "Social Media Post")]
    SocialPost(SocialPost),
    #[serde(rename = "Video Script")]
    VideoScript(VideoScript),
    #[serde(rename = "Blog Post")]
    BlogPost(BlogPost),
    #[serde(rename = "Plain Text")]
    PlainText { text: String },
}

impl StructuredContent {
    pub fn label(&self) -> &'static str {
        match self {
            StructuredContent::SocialPost(_) => "Social Media Post",
            StructuredContent::VideoScript(_) => "Video Script",
            StructuredContent::BlogPost(_) => "Blog Post",
            StructuredContent::PlainText { .. } => "Plain Text",
        }
    }

    /// Flatten to displayable text, used by safety checks and previews.
    pub fn display_text(&self) -> String {
        match self {
            StructuredContent::SocialPost(post) => post.body_content.clone(),
            StructuredContent::VideoScript(script) => script
                .script_scenes
                .iter()
                .map(|s| s.voice_over_vietnamese.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            StructuredContent::BlogPost(post) => post.full_content_draft.clone(),
            StructuredContent::PlainText { text } => text.clone(),
        }
    }
}

/// Full output of one enhanced detailed-content generation: the structured
/// payload plus the channel config and research insights that shaped it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedContentOutput {
    pub channel_selected: String,
    #[serde(flatten)]
    pub content: StructuredContent,
    pub channel_config_applied: Option<ChannelConfig>,
    pub market_insights_used: MarketInsight,
}
