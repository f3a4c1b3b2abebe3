//! Image Prompt Composer Tests

use rstest::rstest;

use crate::core::image_prompt::{
    generate, variations, AspectRatio, ImagePromptOptions, Quality, StylePreset,
};
use crate::core::types::{ContentIdea, SocialPost, StructuredContent, VideoScript};

fn idea_with(title: &str, segment: &str) -> ContentIdea {
    ContentIdea {
        id: "1".to_string(),
        title: title.to_string(),
        objective: "awareness".to_string(),
        target_segment: segment.to_string(),
        core_content: String::new(),
        insight: String::new(),
        cta: String::new(),
        channel_format: "Facebook Post".to_string(),
    }
}

#[test]
fn test_default_options() {
    let options = ImagePromptOptions::default();
    assert_eq!(options.style, StylePreset::Professional);
    assert_eq!(options.aspect_ratio, AspectRatio::Wide);
    assert_eq!(options.quality, Quality::High);
    assert!(!options.include_text);
    assert!(options.brand_colors);
}

#[test]
fn test_full_prompt_assembly() {
    let idea = idea_with("Mua hộ đơn giản", "general audience");
    let prompt = generate(None, Some(&idea), &ImagePromptOptions::default());

    assert_eq!(
        prompt.full_prompt,
        format!(
            "{}, {}. {}",
            prompt.main_prompt, prompt.style_modifiers, prompt.technical_specs
        )
    );
    assert!(prompt.main_prompt.contains("social media post image"));
    assert!(prompt
        .main_prompt
        .contains("professional blue and orange color scheme"));
    assert!(prompt.style_modifiers.contains("high quality"));
    assert!(prompt.style_modifiers.contains("16:9 aspect ratio"));
    assert!(prompt.style_modifiers.contains("no text overlay"));
}

#[test]
fn test_brand_colors_can_be_disabled() {
    let options = ImagePromptOptions {
        brand_colors: false,
        ..Default::default()
    };
    let prompt = generate(None, None, &options);
    assert!(!prompt.main_prompt.contains("blue and orange"));
}

#[rstest]
#[case("Bí mật K-beauty Hàn Quốc", "Korean cultural elements")]
#[case("Order đồ Nhật Bản dễ dàng", "Japanese minimalist design")]
#[case("Săn hàng Mỹ mùa sale", "American lifestyle")]
#[case("Thời trang hot trend", "stylish clothing")]
#[case("Gaming gear xịn", "modern gadgets")]
#[case("Skincare routine chuẩn", "cosmetic products")]
fn test_theme_detection_from_idea_title(#[case] title: &str, #[case] expected: &str) {
    let idea = idea_with(title, "general");
    let prompt = generate(None, Some(&idea), &ImagePromptOptions::default());
    assert!(
        prompt.main_prompt.contains(expected),
        "prompt missing {expected:?}: {}",
        prompt.main_prompt
    );
}

#[test]
fn test_general_theme_skips_ecommerce_elements() {
    let prompt = generate(None, None, &ImagePromptOptions::default());
    assert!(prompt.main_prompt.contains("shipping containers"));
    assert!(!prompt.main_prompt.contains("online shopping"));

    let idea = idea_with("K-beauty haul", "general");
    let themed = generate(None, Some(&idea), &ImagePromptOptions::default());
    assert!(themed.main_prompt.contains("online shopping"));
}

#[test]
fn test_content_type_from_structured_content() {
    let video = StructuredContent::VideoScript(VideoScript::default());
    let prompt = generate(Some(&video), None, &ImagePromptOptions::default());
    assert!(prompt.main_prompt.contains("dynamic video thumbnail"));

    let post = StructuredContent::SocialPost(SocialPost::default());
    let prompt = generate(Some(&post), None, &ImagePromptOptions::default());
    assert!(prompt.main_prompt.contains("social media post image"));
}

#[test]
fn test_video_detected_from_idea_channel_format() {
    let mut idea = idea_with("Hàng về rồi", "general");
    idea.channel_format = "TikTok Video (30s)".to_string();
    let prompt = generate(None, Some(&idea), &ImagePromptOptions::default());
    assert!(prompt.main_prompt.contains("dynamic video thumbnail"));
}

#[rstest]
#[case("Gen Z yêu thích trend", "youthful energy")]
#[case("Millennial professionals", "lifestyle focused")]
#[case("Chủ doanh nhân SME", "success oriented")]
#[case("Phụ nữ hiện đại", "feminine aesthetic")]
#[case("khách hàng phổ thông", "universal appeal")]
fn test_audience_specific_elements(#[case] segment: &str, #[case] expected: &str) {
    let idea = idea_with("Nội dung chung", segment);
    let prompt = generate(None, Some(&idea), &ImagePromptOptions::default());
    assert!(prompt.main_prompt.contains(expected));
}

#[test]
fn test_negative_prompt_combines_common_and_style() {
    let options = ImagePromptOptions {
        style: StylePreset::Minimalist,
        ..Default::default()
    };
    let prompt = generate(None, None, &options);
    assert!(prompt.negative_prompt.contains("low quality"));
    assert!(prompt.negative_prompt.contains("watermark"));
    assert!(prompt.negative_prompt.contains("cluttered"));
    assert!(!prompt.negative_prompt.contains("outdated"));
}

#[rstest]
#[case(Quality::Standard, "8K resolution, detailed, sharp focus")]
#[case(Quality::Ultra, "masterpiece")]
fn test_quality_specs(#[case] quality: Quality, #[case] expected: &str) {
    let options = ImagePromptOptions {
        quality,
        ..Default::default()
    };
    let prompt = generate(None, None, &options);
    assert!(prompt.technical_specs.contains(expected));
}

#[rstest]
#[case(AspectRatio::Square, "Instagram post optimization")]
#[case(AspectRatio::Vertical, "TikTok/Instagram Story optimization")]
#[case(AspectRatio::Portrait, "Pinterest optimization")]
fn test_aspect_ratio_specs(#[case] ratio: AspectRatio, #[case] expected: &str) {
    let options = ImagePromptOptions {
        aspect_ratio: ratio,
        ..Default::default()
    };
    let prompt = generate(None, None, &options);
    assert!(prompt.technical_specs.contains(expected));
}

#[test]
fn test_variations_rotate_styles() {
    let idea = idea_with("Nội dung", "general");
    let variants = variations(None, Some(&idea), &ImagePromptOptions::default(), 3);
    assert_eq!(variants.len(), 3);
    assert!(variants[0].main_prompt.contains("clean corporate style"));
    assert!(variants[1].main_prompt.contains("contemporary design"));
    assert!(variants[2].main_prompt.contains("bright colors"));
}
