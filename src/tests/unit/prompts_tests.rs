//! Prompt Template Tests
//!
//! Templates are deterministic, so these tests pin the exact wording the
//! providers receive. A template edit that changes wording must be a
//! deliberate change here too.

use rstest::rstest;

use crate::core::channels::ChannelCatalog;
use crate::core::prompts::{
    self, channel_config_block, is_expert_seo, video_duration_seconds, ContentKind,
};
use crate::core::types::{ContentIdea, ContentRequest, MarketInsight, Objective};

fn sample_request() -> ContentRequest {
    ContentRequest::new(Objective::Awareness, "Facebook")
        .with_stage("discovery")
        .with_format("Post")
        .with_length("medium")
        .with_tone("Thân thiện")
        .with_keyword("mua hộ Hàn Quốc")
        .with_keyword("K-beauty")
        .with_exclusion("giá rẻ nhất")
}

fn sample_idea() -> ContentIdea {
    ContentIdea {
        id: "1".to_string(),
        title: "Bí quyết mua mỹ phẩm Hàn chính hãng".to_string(),
        objective: "Tăng nhận thức".to_string(),
        target_segment: "Gen Z yêu K-beauty".to_string(),
        core_content: "Câu chuyện tìm nguồn hàng authentic".to_string(),
        insight: "Sợ hàng giả".to_string(),
        cta: "Inbox để được tư vấn".to_string(),
        channel_format: "Facebook Post".to_string(),
    }
}

// ============================================================================
// Content kind detection
// ============================================================================

#[rstest]
#[case("TikTok", "Post", ContentKind::Video)]
#[case("YouTube Shorts", "Short", ContentKind::Video)]
#[case("Facebook", "Video ngắn", ContentKind::Video)]
#[case("Facebook", "Blog article", ContentKind::Blog)]
#[case("Blog Website SEO", "Bài viết", ContentKind::Blog)]
#[case("Facebook", "Post", ContentKind::SocialPost)]
#[case("Zalo", "Broadcast", ContentKind::SocialPost)]
fn test_content_kind_detection(
    #[case] channel: &str,
    #[case] format: &str,
    #[case] expected: ContentKind,
) {
    let request = ContentRequest::new(Objective::Awareness, channel).with_format(format);
    assert_eq!(ContentKind::detect(&request), expected);
}

#[test]
fn test_expert_seo_detection() {
    let by_length = ContentRequest::new(Objective::Conversion, "Blog Website SEO")
        .with_format("blog")
        .with_length("seo-expert");
    assert!(is_expert_seo(&by_length));

    let by_format = ContentRequest::new(Objective::Conversion, "Blog Website SEO")
        .with_format("blog 2000+ từ")
        .with_length("long");
    assert!(is_expert_seo(&by_format));

    let neither = ContentRequest::new(Objective::Conversion, "Blog Website SEO")
        .with_format("blog")
        .with_length("medium");
    assert!(!is_expert_seo(&neither));
}

// ============================================================================
// Template content
// ============================================================================

#[test]
fn test_templates_are_deterministic() {
    // Same brief in, byte-identical prompt out.
    let request = sample_request();
    assert_eq!(prompts::idea_prompt(&request), prompts::idea_prompt(&request));
    let idea = sample_idea();
    assert_eq!(
        prompts::detailed_content_prompt(&idea, &request),
        prompts::detailed_content_prompt(&idea, &request)
    );
}

#[test]
fn test_idea_prompt_embeds_brief_fields() {
    let prompt = prompts::idea_prompt(&sample_request());
    assert!(prompt.contains("- Mục tiêu: awareness"));
    assert!(prompt.contains("- Giai đoạn khách hàng: discovery"));
    assert!(prompt.contains("- Kênh truyền thông: Facebook"));
    assert!(prompt.contains("- Từ khóa: mua hộ Hàn Quốc, K-beauty"));
    assert!(prompt.contains("- Loại trừ: giá rẻ nhất"));
    assert!(prompt.contains("Hãy tạo 3-5 ý tưởng nội dung cho Tiximax"));
    assert!(prompt.contains("\"targetSegment\""));
}

#[test]
fn test_idea_prompt_optional_fallbacks() {
    let prompt = prompts::idea_prompt(&sample_request());
    assert!(prompt.contains("- Ưu đãi: Không có"));
    assert!(prompt.contains("- CTA: Tùy chọn"));

    let with_promo = sample_request()
        .with_promotion("Giảm 30% phí dịch vụ")
        .with_cta("Đăng ký ngay");
    let prompt = prompts::idea_prompt(&with_promo);
    assert!(prompt.contains("- Ưu đãi: Giảm 30% phí dịch vụ"));
    assert!(prompt.contains("- CTA: Đăng ký ngay"));
}

#[test]
fn test_detailed_content_prompt_cta_falls_back_to_idea() {
    let idea = sample_idea();
    let prompt = prompts::detailed_content_prompt(&idea, &sample_request());
    assert!(prompt.contains("- CTA: Inbox để được tư vấn"));
    assert!(prompt.contains("1. **Hook** (Câu mở đầu hấp dẫn)"));
    assert!(prompt.contains("phù hợp với Facebook và Post"));
}

#[test]
fn test_market_insight_prompt_names_schema_fields() {
    let prompt = prompts::market_insight_prompt(&sample_request());
    assert!(prompt.contains("Nhà Nghiên cứu Thị trường"));
    assert!(prompt.contains("\"trending_products\""));
    assert!(prompt.contains("\"common_pain_points_from_new_data\""));
    assert!(prompt.contains("\"market_opportunities\""));
}

#[test]
fn test_specific_insight_prompt_embeds_idea() {
    let prompt = prompts::specific_insight_prompt(&sample_idea());
    assert!(prompt.contains("\"Bí quyết mua mỹ phẩm Hàn chính hãng\""));
    assert!(prompt.contains("Target segment: Gen Z yêu K-beauty"));
}

#[test]
fn test_idea_prompt_with_insights_embeds_research_verbatim() {
    let insights = MarketInsight::fallback();
    let catalog = ChannelCatalog::with_defaults();
    let request = sample_request();
    let config = catalog.get_by_name(&request.channel);
    let prompt = prompts::idea_prompt_with_insights(&request, &insights, config);

    // Research output flows into the content prompt as pretty JSON.
    assert!(prompt.contains("K-beauty skincare"));
    assert!(prompt.contains("Black Friday"));
    // Channel config for facebook_fanpage rides along.
    assert!(prompt.contains("Facebook Fanpage Chính Thức"));
    assert!(prompt.contains("quy trình 15 bước Content Marketing"));
}

#[test]
fn test_idea_prompt_with_insights_without_channel_config() {
    let insights = MarketInsight::default();
    let request = ContentRequest::new(Objective::Interest, "Threads");
    let prompt = prompts::idea_prompt_with_insights(&request, &insights, None);
    assert!(prompt.contains("Không có cấu hình kênh cụ thể"));
}

#[test]
fn test_video_duration_follows_channel_guideline() {
    let catalog = ChannelCatalog::with_defaults();
    // TikTok guideline mentions 8 seconds.
    let tiktok = catalog.get("tiktok_short_video");
    assert_eq!(video_duration_seconds(tiktok), 8);
    // Facebook guideline does not.
    let facebook = catalog.get("facebook_fanpage");
    assert_eq!(video_duration_seconds(facebook), 15);
    assert_eq!(video_duration_seconds(None), 15);
}

#[test]
fn test_video_script_prompt_shape() {
    let catalog = ChannelCatalog::with_defaults();
    let request = ContentRequest::new(Objective::Awareness, "TikTok")
        .with_format("video")
        .with_tone("Hài hước")
        .with_keyword("order Nhật");
    let config = catalog.get_by_name(&request.channel);
    let prompt = prompts::video_script_prompt(&sample_idea(), &request, &MarketInsight::default(), config);

    assert!(prompt.contains("\"content_type\": \"Video Script\""));
    assert!(prompt.contains("\"channel_selected\": \"TikTok\""));
    assert!(prompt.contains("\"video_duration_seconds\": 8"));
    assert!(prompt.contains("\"scene_id\": \"SCENE_1\""));
    assert!(prompt.contains("- Tone: Hài hước"));
}

#[test]
fn test_expert_seo_prompt_demands_word_count() {
    let request = ContentRequest::new(Objective::Conversion, "Blog Website SEO")
        .with_format("blog")
        .with_length("seo-expert");
    let prompt =
        prompts::expert_seo_blog_prompt(&sample_idea(), &request, &MarketInsight::default(), None);
    assert!(prompt.contains("CHUYÊN GIA SEO TOP GOOGLE"));
    assert!(prompt.contains("TỐI THIỂU 2000 TỪ"));
    assert!(prompt.contains("\"meta_description\""));
}

#[test]
fn test_social_post_prompt_shape() {
    let request = sample_request();
    let prompt =
        prompts::social_post_prompt(&sample_idea(), &request, &MarketInsight::default(), None);
    assert!(prompt.contains("\"content_type\": \"Social Media Post\""));
    assert!(prompt.contains("\"title_suggestions\""));
    assert!(prompt.contains("\"hashtags\""));
}

#[test]
fn test_enhanced_prompt_dispatch() {
    let insights = MarketInsight::default();
    let idea = sample_idea();

    let video = ContentRequest::new(Objective::Awareness, "TikTok").with_format("video");
    assert!(prompts::enhanced_detailed_content_prompt(&idea, &video, &insights, None)
        .contains("KỊCH BẢN VIDEO"));

    let seo = ContentRequest::new(Objective::Conversion, "Blog Website SEO")
        .with_format("blog")
        .with_length("seo-expert");
    assert!(prompts::enhanced_detailed_content_prompt(&idea, &seo, &insights, None)
        .contains("SEO EXPERT"));

    let blog = ContentRequest::new(Objective::Conversion, "Blog Website SEO")
        .with_format("blog")
        .with_length("medium");
    assert!(prompts::enhanced_detailed_content_prompt(&idea, &blog, &insights, None)
        .contains("VIẾT BÀI BLOG theo format JSON"));

    let social = ContentRequest::new(Objective::Awareness, "Facebook").with_format("Post");
    assert!(prompts::enhanced_detailed_content_prompt(&idea, &social, &insights, None)
        .contains("VIẾT BÀI POST theo format JSON"));
}

#[test]
fn test_channel_config_block_placeholder() {
    assert_eq!(channel_config_block(None), "Không có cấu hình kênh cụ thể");
    let catalog = ChannelCatalog::with_defaults();
    let block = channel_config_block(catalog.get("zalo_oa"));
    assert!(block.contains("Zalo Official Account"));
}
