//! Channel Catalog Unit Tests

use rstest::rstest;

use crate::core::channels::{
    default_channel_configs, ChannelCatalog, ChannelConfig, KeyCharacteristics, PlatformType,
    DEFAULT_CHANNEL_IDS,
};

fn custom_channel(id: &str, name: &str) -> ChannelConfig {
    ChannelConfig {
        channel_id: id.to_string(),
        channel_name: name.to_string(),
        platform_type: PlatformType::SocialMedia,
        audience_demographics_focus: "Test audience".to_string(),
        key_characteristics: KeyCharacteristics {
            tone_of_voice_priority: vec!["Thân thiện".to_string()],
            content_length_guideline: "Ngắn gọn".to_string(),
            visual_style_guideline: "Đơn giản".to_string(),
            common_formats: vec!["Post".to_string()],
            hashtag_strategy: "Brand hashtag".to_string(),
            call_to_action_preference: "Inbox".to_string(),
            character_limit: None,
            link_placement_guideline: "Bio".to_string(),
        },
        specific_examples_or_notes: String::new(),
    }
}

#[test]
fn test_catalog_seeds_seven_defaults() {
    let catalog = ChannelCatalog::with_defaults();
    assert_eq!(catalog.len(), 7);
    for id in DEFAULT_CHANNEL_IDS {
        assert!(catalog.get(id).is_some(), "missing default channel {id}");
    }
}

#[test]
fn test_get_by_exact_id() {
    let catalog = ChannelCatalog::with_defaults();
    let channel = catalog.get("tiktok_short_video").unwrap();
    assert_eq!(channel.channel_name, "TikTok Short Video");
    assert_eq!(channel.platform_type, PlatformType::VideoSharing);
    assert!(catalog.get("TikTok Short Video").is_none());
}

#[rstest]
#[case("Facebook", "facebook_fanpage")]
#[case("facebook fanpage chính thức", "facebook_fanpage")]
#[case("TikTok", "tiktok_short_video")]
#[case("tiktok short video", "tiktok_short_video")]
#[case("Zalo", "zalo_oa")]
#[case("LinkedIn", "linkedin_business")]
#[case("Blog Website SEO", "blog_website_seo")]
fn test_get_by_name_substring_match(#[case] name: &str, #[case] expected_id: &str) {
    let catalog = ChannelCatalog::with_defaults();
    let channel = catalog.get_by_name(name).unwrap();
    assert_eq!(channel.channel_id, expected_id);
}

#[test]
fn test_get_by_name_exact_beats_substring() {
    let mut catalog = ChannelCatalog::with_defaults();
    // A custom channel whose name contains "Facebook" sits before nothing in
    // catalog order, but a later exact name must still win.
    catalog.add(custom_channel("fb_groups", "Facebook Groups"));
    let exact = catalog.get_by_name("Facebook Groups").unwrap();
    assert_eq!(exact.channel_id, "fb_groups");
}

#[test]
fn test_get_by_name_no_match() {
    let catalog = ChannelCatalog::with_defaults();
    assert!(catalog.get_by_name("Threads").is_none());
    assert!(catalog.get_by_name("").is_none());
}

#[test]
fn test_add_generates_custom_id_for_blank() {
    let mut catalog = ChannelCatalog::with_defaults();
    let id = catalog.add(custom_channel("", "Pinterest Boards"));
    assert!(id.starts_with("custom_"), "generated id was {id}");
    assert_eq!(catalog.get(&id).unwrap().channel_name, "Pinterest Boards");
}

#[test]
fn test_add_keeps_explicit_id() {
    let mut catalog = ChannelCatalog::with_defaults();
    let id = catalog.add(custom_channel("pinterest", "Pinterest Boards"));
    assert_eq!(id, "pinterest");
    assert_eq!(catalog.len(), 8);
}

#[test]
fn test_remove_refuses_defaults() {
    let mut catalog = ChannelCatalog::with_defaults();
    assert!(!catalog.remove("tiktok_short_video"));
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_remove_custom_channel() {
    let mut catalog = ChannelCatalog::with_defaults();
    catalog.add(custom_channel("pinterest", "Pinterest Boards"));
    assert!(catalog.remove("pinterest"));
    assert!(catalog.get("pinterest").is_none());
    assert!(!catalog.remove("pinterest"));
}

#[test]
fn test_default_configs_serialize_with_display_names() {
    let configs = default_channel_configs();
    let tiktok = serde_json::to_value(&configs[0]).unwrap();
    assert_eq!(tiktok["platform_type"], "Video Sharing");
    assert_eq!(
        tiktok["key_characteristics"]["character_limit"],
        serde_json::json!(2200)
    );

    let blog = configs
        .iter()
        .find(|c| c.channel_id == "blog_website_seo")
        .unwrap();
    let blog_json = serde_json::to_value(blog).unwrap();
    assert_eq!(blog_json["platform_type"], "Blog/Website");
    // No character limit for blogs, and the field is omitted entirely.
    assert!(blog_json["key_characteristics"]
        .get("character_limit")
        .is_none());
}
