//! Prompt Templates
//!
//! Deterministic prompt construction for every generation task. Each builder
//! is a pure function from domain values to a Vietnamese prompt string, so
//! templates can be asserted byte-for-byte in tests. Structured context
//! (channel config, market insights, chosen idea) is embedded as
//! pretty-printed JSON.

use crate::core::channels::ChannelConfig;
use crate::core::types::{ContentIdea, ContentRequest, MarketInsight};

/// Which detailed-content shape a brief calls for, decided from the request
/// before any provider call so the right template and output schema is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Video,
    Blog,
    SocialPost,
}

impl ContentKind {
    /// Video wins when either the format mentions video or the channel is a
    /// video platform; blog when the format says blog or the channel is a
    /// website. Everything else is a social post.
    pub fn detect(request: &ContentRequest) -> Self {
        let format = request.format.to_lowercase();
        let channel = request.channel.to_lowercase();
        if format.contains("video") || channel.contains("tiktok") || channel.contains("youtube") {
            ContentKind::Video
        } else if format.contains("blog") || channel.contains("website") {
            ContentKind::Blog
        } else {
            ContentKind::SocialPost
        }
    }
}

/// Whether the brief asks for the long-form SEO treatment of a blog post.
pub fn is_expert_seo(request: &ContentRequest) -> bool {
    request.length == "seo-expert" || request.format.contains("2000+")
}

fn opt_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

/// Render a channel config as a prompt block, or the standard placeholder.
pub fn channel_config_block(config: Option<&ChannelConfig>) -> String {
    match config {
        Some(c) => serde_json::to_string_pretty(c)
            .unwrap_or_else(|_| "Không có cấu hình kênh cụ thể".to_string()),
        None => "Không có cấu hình kênh cụ thể".to_string(),
    }
}

fn json_block<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Ideation prompt for the simple (single-provider) pipeline.
pub fn idea_prompt(request: &ContentRequest) -> String {
    format!(
        r#"
Dựa trên thông tin sau về Tiximax (dịch vụ mua hộ và vận chuyển quốc tế từ Indonesia, Nhật, Hàn, Mỹ về Việt Nam):

**Yêu cầu nội dung:**
- Mục tiêu: {objective}
- Giai đoạn khách hàng: {stage}
- Kênh truyền thông: {channel}
- Định dạng: {format}
- Độ dài: {length}
- Giọng điệu: {tone}
- Từ khóa: {keywords}
- Loại trừ: {exclusions}
- Ưu đãi: {promotion}
- CTA: {cta}

Hãy tạo 3-5 ý tưởng nội dung cho Tiximax, mỗi ý tưởng bao gồm:
1. **Tiêu đề**: (Hấp dẫn, khơi gợi)
2. **Mục tiêu**: (Rõ ràng, cụ thể)
3. **Đối tượng**: (Cá nhân hay SME/chủ shop)
4. **Nội dung cốt lõi**: (Thông điệp chính, tình huống)
5. **Insight**: (Nỗi đau hoặc mong muốn được khai thác)
6. **CTA**: (Kêu gọi hành động cụ thể)
7. **Định dạng phù hợp**: (Channel + format)

Trả về dưới dạng JSON array với format:
[{{
  "id": "1",
  "title": "...",
  "objective": "...",
  "targetSegment": "...",
  "coreContent": "...",
  "insight": "...",
  "cta": "...",
  "channelFormat": "..."
}}]
"#,
        objective = request.objective,
        stage = request.stage,
        channel = request.channel,
        format = request.format,
        length = request.length,
        tone = request.tone.join(", "),
        keywords = request.keywords.join(", "),
        exclusions = request.exclusions.join(", "),
        promotion = opt_or(&request.promotion, "Không có"),
        cta = opt_or(&request.cta, "Tùy chọn"),
    )
}

/// Detailed-content prompt for the simple pipeline. The output here is free
/// text, not JSON.
pub fn detailed_content_prompt(idea: &ContentIdea, request: &ContentRequest) -> String {
    format!(
        r#"
Dựa trên ý tưởng nội dung sau cho Tiximax:

**Ý tưởng đã chọn:**
- Tiêu đề: {title}
- Mục tiêu: {objective}
- Đối tượng: {target}
- Insight: {insight}
- Định dạng: {channel_format}

**Yêu cầu chi tiết:**
- Độ dài: {length}
- Giọng điệu: {tone}
- Từ khóa phải có: {keywords}
- Ưu đãi: {promotion}
- CTA: {cta}

Hãy viết nội dung hoàn chỉnh theo cấu trúc:

1. **Hook** (Câu mở đầu hấp dẫn)
2. **Vấn đề** (Pain Points của khách hàng)
3. **Giải pháp** (Tiximax Solution)
4. **Thông tin bổ trợ** (Số liệu, cam kết, lợi ích)
5. **Call to Action** (Kêu gọi hành động mạnh mẽ)

Văn phong phải tự nhiên, dễ đọc, phù hợp với {channel} và {format}.
"#,
        title = idea.title,
        objective = idea.objective,
        target = idea.target_segment,
        insight = idea.insight,
        channel_format = idea.channel_format,
        length = request.length,
        tone = request.tone.join(", "),
        keywords = request.keywords.join(", "),
        promotion = opt_or(&request.promotion, "Không có"),
        cta = opt_or(&request.cta, &idea.cta),
        channel = request.channel,
        format = request.format,
    )
}

/// Research prompt: broad market insights for a brief. Sent to the research
/// provider at low temperature.
pub fn market_insight_prompt(request: &ContentRequest) -> String {
    format!(
        r#"
Bạn là Nhà Nghiên cứu Thị trường và Tổng hợp Dữ liệu Thông minh cho Tiximax (dịch vụ mua hộ & vận chuyển quốc tế).

Dựa trên yêu cầu nội dung này:
- Kênh: {channel}
- Định dạng: {format}
- Từ khóa: {keywords}
- Mục tiêu: {objective}

Hãy nghiên cứu và cung cấp insights thị trường mới nhất dưới dạng JSON:

{{
  "trending_products": ["Sản phẩm hot hiện tại từ Nhật/Hàn/Mỹ/Indo mà khách VN quan tâm"],
  "popular_keywords_related_to_shipping": ["Từ khóa tìm kiếm phổ biến về logistics quốc tế"],
  "current_sales_events": [{{"name": "Tên event", "country": "Quốc gia", "dates": "Thời gian"}}],
  "common_pain_points_from_new_data": ["Pain points gần đây từ customer feedback"],
  "market_opportunities": ["Cơ hội thị trường mới phát hiện"]
}}

Focus vào xu hướng mua sắm quốc tế, vấn đề logistics, và opportunity cho Tiximax.
"#,
        channel = request.channel,
        format = request.format,
        keywords = request.keywords.join(", "),
        objective = request.objective,
    )
}

/// Research prompt: insights narrowed to one chosen idea.
pub fn specific_insight_prompt(idea: &ContentIdea) -> String {
    format!(
        r#"
Nghiên cứu sâu hơn cho ý tưởng nội dung cụ thể: "{title}"

Target segment: {target}
Core content: {core}
Insight đang khai thác: {insight}

Cung cấp insights bổ sung dưới dạng JSON:
{{
  "trending_products": ["Sản phẩm cụ thể liên quan đến ý tưởng này"],
  "popular_keywords_related_to_shipping": ["Keywords phù hợp với target segment"],
  "current_sales_events": [{{"name": "Event phù hợp", "country": "Quốc gia", "dates": "Timing"}}],
  "common_pain_points_from_new_data": ["Pain points cụ thể cho segment này"],
  "market_opportunities": ["Opportunity cụ thể từ ý tưởng này"]
}}
"#,
        title = idea.title,
        target = idea.target_segment,
        core = idea.core_content,
        insight = idea.insight,
    )
}

/// Ideation prompt for the enhanced pipeline: research insights and channel
/// config are folded in before the content provider is asked for ideas.
pub fn idea_prompt_with_insights(
    request: &ContentRequest,
    insights: &MarketInsight,
    channel_config: Option<&ChannelConfig>,
) -> String {
    format!(
        r#"
Bạn là Chuyên gia Content Marketing 20 năm kinh nghiệm cho Tiximax.

**KIẾN THỨC NỀN TẢNG TIXIMAX:**
- USP: Dịch vụ mua hộ và vận chuyển quốc tế từ Indonesia, Nhật, Hàn, Mỹ về Việt Nam
- Đáng tin cậy, minh bạch, chuyên nghiệp
- Hỗ trợ cả cá nhân và SME/chủ shop

**INSIGHTS THỊ TRƯỜNG MỚI NHẤT:**
{insights}

**CẤU HÌNH KÊNH:**
{channel_config}

**YÊU CẦU NỘI DUNG:**
- Mục tiêu: {objective}
- Giai đoạn: {stage}
- Kênh: {channel}
- Định dạng: {format}
- Từ khóa: {keywords}

Áp dụng quy trình 15 bước Content Marketing và cấu hình kênh để tạo 4-5 ý tưởng nội dung.

Trả về JSON array:
[{{
  "id": "1",
  "title": "Tiêu đề hấp dẫn",
  "objective": "Mục tiêu rõ ràng",
  "targetSegment": "Segment cụ thể",
  "coreContent": "Nội dung cốt lõi phù hợp kênh",
  "insight": "Insight được khai thác",
  "cta": "CTA phù hợp kênh",
  "channelFormat": "Channel + format"
}}]
"#,
        insights = json_block(insights),
        channel_config = channel_config_block(channel_config),
        objective = request.objective,
        stage = request.stage,
        channel = request.channel,
        format = request.format,
        keywords = request.keywords.join(", "),
    )
}

/// Default durations taken from the channel guideline: 8 seconds when the
/// guideline mentions '8', otherwise 15.
pub fn video_duration_seconds(channel_config: Option<&ChannelConfig>) -> u32 {
    match channel_config {
        Some(c) if c.key_characteristics.content_length_guideline.contains('8') => 8,
        _ => 15,
    }
}

/// Video-script prompt for the enhanced pipeline.
pub fn video_script_prompt(
    idea: &ContentIdea,
    request: &ContentRequest,
    insights: &MarketInsight,
    channel_config: Option<&ChannelConfig>,
) -> String {
    format!(
        r##"
Bạn là CHUYÊN GIA CONTENT MARKETING 20 NĂM KINH NGHIỆM, chuyên tạo kịch bản video viral.

**ÝT TƯỞNG ĐÃ CHỌN:**
{idea}

**INSIGHTS THỊ TRƯỜNG:**
{insights}

**CẤU HÌNH KÊNH:**
{channel_config}

**YÊU CẦU:**
- Từ khóa: {keywords}
- Tone: {tone}
- CTA: {cta}

VIẾT KỊCH BẢN VIDEO theo format JSON:
{{
  "content_type": "Video Script",
  "channel_selected": "{channel}",
  "video_title_idea": "Tiêu đề video viral",
  "video_duration_seconds": {duration},
  "target_audience_focus": "{target}",
  "tone_of_voice_script": "Tone phù hợp kênh",
  "script_scenes": [
    {{
      "scene_id": "SCENE_1",
      "duration_seconds": 2,
      "visual_description": "Mô tả visual chi tiết",
      "audio_description": "Nhạc nền và hiệu ứng",
      "voice_over_vietnamese": "Lời thoại Việt",
      "text_overlay": "Text hiển thị trên màn hình"
    }}
  ],
  "call_to_action_script": "CTA mạnh mẽ",
  "suggested_hashtags": ["#Tiximax", "#Trending"],
  "notes_for_user": "Lưu ý khi quay"
}}
"##,
        idea = json_block(idea),
        insights = json_block(insights),
        channel_config = channel_config_block(channel_config),
        keywords = request.keywords.join(", "),
        tone = request.tone.join(", "),
        cta = opt_or(&request.cta, &idea.cta),
        channel = request.channel,
        duration = video_duration_seconds(channel_config),
        target = idea.target_segment,
    )
}

/// Long-form SEO blog prompt, used when the brief asks for seo-expert length.
pub fn expert_seo_blog_prompt(
    idea: &ContentIdea,
    request: &ContentRequest,
    insights: &MarketInsight,
    channel_config: Option<&ChannelConfig>,
) -> String {
    format!(
        r#"
Bạn là CHUYÊN GIA SEO TOP GOOGLE HÀNG ĐẦU với 20 NĂM KINH NGHIỆM.

**YÊU CẦU VIẾT BLOG 2000+ TỪ:**
{idea}

**INSIGHTS THỊ TRƯỜNG:**
{insights}

**CẤU HÌNH KÊNH:**
{channel_config}

VIẾT BÀI BLOG CHUẨN SEO EXPERT theo format JSON:
{{
  "content_type": "Blog Post SEO Expert",
  "channel_selected": "{channel}",
  "title": "Tiêu đề SEO-optimized",
  "meta_description": "Meta description 150-160 ký tự",
  "outline": {{
    "introduction": "Mở bài hook",
    "section_1": "Phần 1...",
    "conclusion": "Kết luận"
  }},
  "full_content_draft": "BÀI BLOG ĐẦY ĐỦ 2000+ TỪ với:\n\n# Tiêu đề SEO\n\n## Mở bài (200 từ)...\n\n## Nội dung chính...\n\n## Kết luận và CTA",
  "keywords_for_seo": ["primary keyword", "secondary keywords"],
  "call_to_action": "CTA mạnh mẽ",
  "notes_for_user": "SEO tips"
}}

BÀI VIẾT PHẢI ĐẠT CHUẨN SEO EXPERT LEVEL VỚI TỐI THIỂU 2000 TỪ!
"#,
        idea = json_block(idea),
        insights = json_block(insights),
        channel_config = channel_config_block(channel_config),
        channel = request.channel,
    )
}

/// Standard blog prompt for the enhanced pipeline.
pub fn blog_post_prompt(
    idea: &ContentIdea,
    request: &ContentRequest,
    insights: &MarketInsight,
) -> String {
    format!(
        r#"
Bạn là CHUYÊN GIA CONTENT MARKETING viết blog chuyên nghiệp.

**ÝT TƯỞNG:**
{idea}

**INSIGHTS:**
{insights}

VIẾT BÀI BLOG theo format JSON:
{{
  "content_type": "Blog Post",
  "channel_selected": "{channel}",
  "title": "Tiêu đề blog",
  "full_content_draft": "Bài blog đầy đủ với cấu trúc chuyên nghiệp",
  "keywords_for_seo": ["keywords"],
  "call_to_action": "CTA"
}}
"#,
        idea = json_block(idea),
        insights = json_block(insights),
        channel = request.channel,
    )
}

/// Social-media-post prompt for the enhanced pipeline.
pub fn social_post_prompt(
    idea: &ContentIdea,
    request: &ContentRequest,
    insights: &MarketInsight,
    channel_config: Option<&ChannelConfig>,
) -> String {
    format!(
        r##"
Bạn là CHUYÊN GIA CONTENT MARKETING cho Social Media.

**ÝT TƯỞNG:**
{idea}

**INSIGHTS:**
{insights}

**CẤU HÌNH KÊNH:**
{channel_config}

VIẾT BÀI POST theo format JSON:
{{
  "content_type": "Social Media Post",
  "channel_selected": "{channel}",
  "title_suggestions": ["Tiêu đề 1", "Tiêu đề 2"],
  "body_content": "Nội dung bài post đầy đủ",
  "call_to_action": "CTA phù hợp kênh",
  "hashtags": ["#Tiximax", "#Trending"],
  "suggested_visuals_notes": "Gợi ý hình ảnh",
  "tone_applied": "Tone đã áp dụng",
  "notes_for_user": "Lưu ý đăng bài"
}}
"##,
        idea = json_block(idea),
        insights = json_block(insights),
        channel_config = channel_config_block(channel_config),
        channel = request.channel,
    )
}

/// Pick the right enhanced detailed-content prompt for a brief.
pub fn enhanced_detailed_content_prompt(
    idea: &ContentIdea,
    request: &ContentRequest,
    insights: &MarketInsight,
    channel_config: Option<&ChannelConfig>,
) -> String {
    match ContentKind::detect(request) {
        ContentKind::Video => video_script_prompt(idea, request, insights, channel_config),
        ContentKind::Blog => {
            if is_expert_seo(request) {
                expert_seo_blog_prompt(idea, request, insights, channel_config)
            } else {
                blog_post_prompt(idea, request, insights)
            }
        }
        ContentKind::SocialPost => social_post_prompt(idea, request, insights, channel_config),
    }
}
