//! Channel Style Catalog
//!
//! Per-channel style rules (tone, length, hashtag strategy, CTA conventions)
//! for every publishing destination the studio targets. The catalog ships
//! with seven defaults; users may add custom channels at runtime. Defaults
//! are non-deletable by policy.

use serde::{Deserialize, Serialize};

/// Platform category of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformType {
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Video Sharing")]
    VideoSharing,
    #[serde(rename = "Blog/Website")]
    BlogWebsite,
    #[serde(rename = "Professional Network")]
    ProfessionalNetwork,
    #[serde(rename = "Messaging Platform")]
    MessagingPlatform,
}

/// Style characteristics of a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyCharacteristics {
    pub tone_of_voice_priority: Vec<String>,
    pub content_length_guideline: String,
    pub visual_style_guideline: String,
    pub common_formats: Vec<String>,
    pub hashtag_strategy: String,
    pub call_to_action_preference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_limit: Option<u32>,
    pub link_placement_guideline: String,
}

/// One publishing destination and its style rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub channel_id: String,
    pub channel_name: String,
    pub platform_type: PlatformType,
    pub audience_demographics_focus: String,
    pub key_characteristics: KeyCharacteristics,
    pub specific_examples_or_notes: String,
}

/// Ids of the seven built-in channels. These entries cannot be removed.
pub const DEFAULT_CHANNEL_IDS: &[&str] = &[
    "tiktok_short_video",
    "facebook_fanpage",
    "instagram_reels",
    "blog_website_seo",
    "youtube_shorts",
    "linkedin_business",
    "zalo_oa",
];

fn s(text: &str) -> String {
    text.to_string()
}

fn vs(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

/// The seven built-in channel definitions.
pub fn default_channel_configs() -> Vec<ChannelConfig> {
    vec![
        ChannelConfig {
            channel_id: s("tiktok_short_video"),
            channel_name: s("TikTok Short Video"),
            platform_type: PlatformType::VideoSharing,
            audience_demographics_focus: s(
                "Gen Z, Việt Nam, yêu thích giải trí và xu hướng, tư duy nhanh",
            ),
            key_characteristics: KeyCharacteristics {
                tone_of_voice_priority: vs(&["Hài hước", "Năng động", "Thân thiện", "Trendy"]),
                content_length_guideline: s("Ngắn gọn, kịch bản 8-15 giây"),
                visual_style_guideline: s(
                    "Video nhanh, màu sắc tươi sáng, cận cảnh biểu cảm, transition độc đáo",
                ),
                common_formats: vs(&[
                    "Video ngắn 8s",
                    "Thử thách",
                    "Transition",
                    "Story time",
                    "Comedy skit",
                ]),
                hashtag_strategy: s(
                    "Sử dụng hashtag trending, tối đa 5-7 hashtags, kết hợp trending + niche",
                ),
                call_to_action_preference: s(
                    "Trực tiếp, kêu gọi inbox/ghé link bio, \"Thả tym nếu đồng ý\"",
                ),
                character_limit: Some(2200),
                link_placement_guideline: s("Link Bio hoặc comment đầu tiên"),
            },
            specific_examples_or_notes: s(
                "Cần sử dụng nhạc trending, có phụ đề Việt Nam, hook trong 3 giây đầu",
            ),
        },
        ChannelConfig {
            channel_id: s("facebook_fanpage"),
            channel_name: s("Facebook Fanpage Chính Thức"),
            platform_type: PlatformType::SocialMedia,
            audience_demographics_focus: s(
                "Millennials + Gen X Việt Nam, quan tâm kinh doanh và mua sắm online",
            ),
            key_characteristics: KeyCharacteristics {
                tone_of_voice_priority: vs(&[
                    "Đáng tin cậy",
                    "Chuyên nghiệp",
                    "Thân thiện",
                    "Hỗ trợ",
                ]),
                content_length_guideline: s(
                    "Trung bình 200-500 từ, có thể dài hơn nếu educational",
                ),
                visual_style_guideline: s(
                    "Ảnh chất lượng cao, màu sắc nhã nhặn, text overlay rõ ràng",
                ),
                common_formats: vs(&[
                    "Status update",
                    "Photo post",
                    "Video short form",
                    "Link sharing",
                    "Event post",
                ]),
                hashtag_strategy: s(
                    "Ít hashtag (3-5), tập trung brand hashtag và location hashtag",
                ),
                call_to_action_preference: s(
                    "Mềm mại, giáo dục trước bán hàng, \"Tìm hiểu thêm\", \"Inbox để được tư vấn\"",
                ),
                character_limit: Some(63206),
                link_placement_guideline: s("Trong post hoặc comment đầu tiên"),
            },
            specific_examples_or_notes: s(
                "Tương tác cao vào 19h-22h, nên có emoji nhưng không quá nhiều",
            ),
        },
        ChannelConfig {
            channel_id: s("instagram_reels"),
            channel_name: s("Instagram Reels"),
            platform_type: PlatformType::SocialMedia,
            audience_demographics_focus: s("Nữ giới 18-35 tuổi, yêu thích thời trang và lifestyle"),
            key_characteristics: KeyCharacteristics {
                tone_of_voice_priority: vs(&["Thẩm mỹ", "Cảm hứng", "Năng động", "Trendy"]),
                content_length_guideline: s("Visual-first, caption ngắn gọn dưới 100 từ"),
                visual_style_guideline: s(
                    "Thẩm mỹ cao, filter đẹp, composition chuyên nghiệp, trendy transitions",
                ),
                common_formats: vs(&["Reels video", "Stories", "IGTV", "Carousel post"]),
                hashtag_strategy: s("Mix 30 hashtags: trending + niche + brand + location"),
                call_to_action_preference: s(
                    "Visual CTA, \"Save post này\", \"Share với bestie\", \"DM để order\"",
                ),
                character_limit: Some(2200),
                link_placement_guideline: s("Link in bio, Stories swipe up (nếu có)"),
            },
            specific_examples_or_notes: s(
                "Focus vào aesthetic, trending audio quan trọng, Stories polls và Q&A",
            ),
        },
        ChannelConfig {
            channel_id: s("blog_website_seo"),
            channel_name: s("Blog Website SEO"),
            platform_type: PlatformType::BlogWebsite,
            audience_demographics_focus: s(
                "Chủ doanh nghiệp và người có nhu cầu tìm hiểu sâu về logistics",
            ),
            key_characteristics: KeyCharacteristics {
                tone_of_voice_priority: vs(&[
                    "Chuyên gia",
                    "Chi tiết",
                    "Đáng tin cậy",
                    "Educational",
                ]),
                content_length_guideline: s("Dài và chi tiết, 1500-3000+ từ"),
                visual_style_guideline: s(
                    "Infographic, charts, screenshots, ảnh minh họa chuyên nghiệp",
                ),
                common_formats: vs(&[
                    "How-to guide",
                    "Case study",
                    "Industry analysis",
                    "Comparison post",
                ]),
                hashtag_strategy: s("SEO keywords quan trọng hơn hashtags"),
                call_to_action_preference: s(
                    "Educational lead magnet, \"Tải báo cáo miễn phí\", \"Đăng ký consultation\"",
                ),
                character_limit: None,
                link_placement_guideline: s("Internal linking mạnh, external authority links"),
            },
            specific_examples_or_notes: s(
                "Focus vào SEO on-page, keyword density, meta description, featured snippets",
            ),
        },
        ChannelConfig {
            channel_id: s("youtube_shorts"),
            channel_name: s("YouTube Shorts"),
            platform_type: PlatformType::VideoSharing,
            audience_demographics_focus: s(
                "Mixed demographics, quan tâm education và entertainment",
            ),
            key_characteristics: KeyCharacteristics {
                tone_of_voice_priority: vs(&["Educational", "Engaging", "Clear explanation"]),
                content_length_guideline: s("Video dưới 60 giây, hook trong 3 giây đầu"),
                visual_style_guideline: s(
                    "Vertical video, text overlay lớn và rõ, thumbnail eye-catching",
                ),
                common_formats: vs(&[
                    "Tutorial ngắn",
                    "Tips & tricks",
                    "Behind the scenes",
                    "Q&A",
                ]),
                hashtag_strategy: s("Hashtag trong description, focus vào #Shorts"),
                call_to_action_preference: s("Subscribe, Like, Comment với câu hỏi engage"),
                character_limit: None,
                link_placement_guideline: s("Description hoặc pinned comment"),
            },
            specific_examples_or_notes: s("Algorithm prefer engagement, loop-able content tốt"),
        },
        ChannelConfig {
            channel_id: s("linkedin_business"),
            channel_name: s("LinkedIn Business"),
            platform_type: PlatformType::ProfessionalNetwork,
            audience_demographics_focus: s(
                "Chủ doanh nghiệp, managers, professionals quan tâm B2B",
            ),
            key_characteristics: KeyCharacteristics {
                tone_of_voice_priority: vs(&[
                    "Professional",
                    "Authoritative",
                    "Industry insight",
                    "Networking",
                ]),
                content_length_guideline: s(
                    "Medium form 300-800 từ, có thể longer form cho thought leadership",
                ),
                visual_style_guideline: s(
                    "Professional imagery, infographics, company branding",
                ),
                common_formats: vs(&[
                    "Industry insight",
                    "Company update",
                    "Thought leadership",
                    "Case study",
                ]),
                hashtag_strategy: s(
                    "Professional hashtags, industry-specific, tối đa 5 hashtags",
                ),
                call_to_action_preference: s(
                    "Professional connection, \"Connect để thảo luận\", \"Schedule meeting\"",
                ),
                character_limit: None,
                link_placement_guideline: s("Trong post text hoặc first comment"),
            },
            specific_examples_or_notes: s(
                "Publish vào giờ làm việc, engagement từ industry peers quan trọng",
            ),
        },
        ChannelConfig {
            channel_id: s("zalo_oa"),
            channel_name: s("Zalo Official Account"),
            platform_type: PlatformType::MessagingPlatform,
            audience_demographics_focus: s(
                "Khách hàng hiện tại và potential customers tại Việt Nam",
            ),
            key_characteristics: KeyCharacteristics {
                tone_of_voice_priority: vs(&["Thân thiện", "Hỗ trợ", "Responsive", "Personal"]),
                content_length_guideline: s("Ngắn gọn, straight to the point, dưới 200 từ"),
                visual_style_guideline: s("Mobile-first design, stickers và emoji phù hợp"),
                common_formats: vs(&["Broadcast message", "Rich media", "Interactive templates"]),
                hashtag_strategy: s("Không cần hashtag, focus vào personalization"),
                call_to_action_preference: s(
                    "Direct action, \"Nhấn nút bên dưới\", \"Reply tin nhắn này\"",
                ),
                character_limit: None,
                link_placement_guideline: s("Button links trong rich media templates"),
            },
            specific_examples_or_notes: s(
                "Tối ưu cho mobile, response time nhanh, personal touch quan trọng",
            ),
        },
    ]
}

/// Mutable catalog of channel configs, seeded with the defaults.
#[derive(Debug, Clone)]
pub struct ChannelCatalog {
    configs: Vec<ChannelConfig>,
}

impl Default for ChannelCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ChannelCatalog {
    pub fn with_defaults() -> Self {
        Self {
            configs: default_channel_configs(),
        }
    }

    pub fn empty() -> Self {
        Self { configs: Vec::new() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelConfig> {
        self.configs.iter()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Exact lookup by stable channel id.
    pub fn get(&self, channel_id: &str) -> Option<&ChannelConfig> {
        self.configs.iter().find(|c| c.channel_id == channel_id)
    }

    /// Loose lookup by display name: case-insensitive exact match first, then
    /// first catalog-order bidirectional substring match. Exact-first keeps a
    /// fully spelled-out name from losing to an earlier partial match.
    pub fn get_by_name(&self, name: &str) -> Option<&ChannelConfig> {
        let needle = name.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(exact) = self
            .configs
            .iter()
            .find(|c| c.channel_name.to_lowercase() == needle)
        {
            return Some(exact);
        }
        self.configs.iter().find(|c| {
            let candidate = c.channel_name.to_lowercase();
            candidate.contains(&needle) || needle.contains(&candidate)
        })
    }

    /// Add a custom channel. A blank id gets a generated `custom_<millis>`
    /// id; the assigned id is returned.
    pub fn add(&mut self, mut config: ChannelConfig) -> String {
        if config.channel_id.trim().is_empty() {
            config.channel_id = format!("custom_{}", chrono::Utc::now().timestamp_millis());
        }
        let id = config.channel_id.clone();
        self.configs.push(config);
        id
    }

    /// Remove a channel by id. Default channels are refused.
    pub fn remove(&mut self, channel_id: &str) -> bool {
        if DEFAULT_CHANNEL_IDS.contains(&channel_id) {
            return false;
        }
        let before = self.configs.len();
        self.configs.retain(|c| c.channel_id != channel_id);
        self.configs.len() != before
    }
}
