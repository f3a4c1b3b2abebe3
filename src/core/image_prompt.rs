//! Image Prompt Composer
//!
//! Deterministic text-to-image prompt construction from generated content.
//! No provider calls happen here; the composer only assembles prompt strings
//! (subject, brand, style, negatives, technical specs) that the user feeds to
//! an image model, directly or via the gateway's image endpoint.

use serde::{Deserialize, Serialize};

use crate::core::types::{ContentIdea, StructuredContent};

const BRAND_COLORS: &str = "professional blue and orange color scheme, corporate branding";

const LOGISTICS_SHIPPING: &str =
    "shipping containers, cargo planes, delivery trucks, global logistics";
const LOGISTICS_ECOMMERCE: &str = "online shopping, mobile apps, shopping bags, packages";
const LOGISTICS_INTERNATIONAL: &str =
    "world map, country flags, international shipping, customs";

/// Visual style preset for generated imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Professional,
    Modern,
    Minimalist,
    Vibrant,
    Corporate,
}

impl StylePreset {
    pub fn modifiers(&self) -> &'static str {
        match self {
            StylePreset::Professional => {
                "clean corporate style, professional photography, studio lighting, sharp focus"
            }
            StylePreset::Modern => {
                "contemporary design, sleek aesthetics, gradient backgrounds, tech-forward"
            }
            StylePreset::Minimalist => {
                "clean white background, minimal elements, simple composition, negative space"
            }
            StylePreset::Vibrant => {
                "bright colors, energetic composition, dynamic angles, eye-catching design"
            }
            StylePreset::Corporate => {
                "business professional, corporate environment, office setting, formal presentation"
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StylePreset::Professional => "professional",
            StylePreset::Modern => "modern",
            StylePreset::Minimalist => "minimalist",
            StylePreset::Vibrant => "vibrant",
            StylePreset::Corporate => "corporate",
        }
    }

    fn negatives(&self) -> &'static [&'static str] {
        match self {
            StylePreset::Professional => &["casual", "unprofessional", "messy", "cluttered"],
            StylePreset::Modern => &["outdated", "vintage", "retro", "old-fashioned"],
            StylePreset::Minimalist => &["cluttered", "busy", "complex", "overwhelming"],
            StylePreset::Vibrant => &["dull", "monotone", "desaturated", "bland"],
            StylePreset::Corporate => &["casual", "informal", "playful", "cartoonish"],
        }
    }
}

/// Output aspect ratio, mapped to a per-platform optimization note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Wide => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }

    fn specs(&self) -> &'static str {
        match self {
            AspectRatio::Square => "square format, Instagram post optimization",
            AspectRatio::Wide => "wide format, YouTube thumbnail optimization",
            AspectRatio::Vertical => "vertical format, TikTok/Instagram Story optimization",
            AspectRatio::Standard => "standard format, Facebook post optimization",
            AspectRatio::Portrait => "portrait format, Pinterest optimization",
        }
    }
}

/// Requested output quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Standard,
    High,
    Ultra,
}

impl Quality {
    pub fn label(&self) -> &'static str {
        match self {
            Quality::Standard => "standard",
            Quality::High => "high",
            Quality::Ultra => "ultra",
        }
    }

    fn specs(&self) -> &'static str {
        match self {
            Quality::Standard => "8K resolution, detailed, sharp focus",
            Quality::High => {
                "ultra high resolution, extremely detailed, perfect composition, professional lighting"
            }
            Quality::Ultra => {
                "8K ultra detailed, masterpiece, best quality, perfect lighting, photorealistic, studio quality"
            }
        }
    }
}

/// Options for prompt composition.
#[derive(Debug, Clone, Copy)]
pub struct ImagePromptOptions {
    pub style: StylePreset,
    pub aspect_ratio: AspectRatio,
    pub quality: Quality,
    pub include_text: bool,
    pub brand_colors: bool,
}

impl Default for ImagePromptOptions {
    fn default() -> Self {
        Self {
            style: StylePreset::Professional,
            aspect_ratio: AspectRatio::Wide,
            quality: Quality::High,
            include_text: false,
            brand_colors: true,
        }
    }
}

/// A composed image prompt, broken into its parts plus the assembled string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImagePrompt {
    pub main_prompt: String,
    pub negative_prompt: String,
    pub style_modifiers: String,
    pub technical_specs: String,
    pub full_prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageContentType {
    Video,
    Blog,
    SocialMedia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Korea,
    Japan,
    Usa,
    Indonesia,
    Fashion,
    Technology,
    Beauty,
    Food,
    General,
}

fn detect_content_type(
    content: Option<&StructuredContent>,
    idea: Option<&ContentIdea>,
) -> ImageContentType {
    match content {
        Some(StructuredContent::VideoScript(_)) => return ImageContentType::Video,
        Some(StructuredContent::BlogPost(_)) => return ImageContentType::Blog,
        Some(_) => return ImageContentType::SocialMedia,
        None => {}
    }
    if let Some(idea) = idea {
        if idea.channel_format.to_lowercase().contains("video") {
            return ImageContentType::Video;
        }
    }
    ImageContentType::SocialMedia
}

/// Keyword-driven theme detection over the combined content and idea text.
/// Checked in a fixed priority order; the first hit wins.
fn extract_theme(content: Option<&StructuredContent>, idea: Option<&ContentIdea>) -> Theme {
    let mut parts: Vec<String> = Vec::new();
    match content {
        Some(StructuredContent::SocialPost(post)) => parts.push(post.body_content.clone()),
        Some(StructuredContent::VideoScript(script)) => {
            parts.push(script.video_title_idea.clone())
        }
        Some(StructuredContent::BlogPost(post)) => parts.push(post.title.clone()),
        Some(StructuredContent::PlainText { text }) => parts.push(text.clone()),
        None => {}
    }
    if let Some(idea) = idea {
        parts.push(idea.title.clone());
        parts.push(idea.core_content.clone());
        parts.push(idea.insight.clone());
    }
    let text = parts.join(" ").to_lowercase();

    let rules: &[(&[&str], Theme)] = &[
        (&["hàn quốc", "k-beauty", "kpop"], Theme::Korea),
        (&["nhật bản", "japan", "anime"], Theme::Japan),
        (&["mỹ", "america", "usa"], Theme::Usa),
        (&["indonesia", "indo"], Theme::Indonesia),
        (&["thời trang", "fashion"], Theme::Fashion),
        (&["công nghệ", "tech", "gaming"], Theme::Technology),
        (&["mỹ phẩm", "beauty", "skincare"], Theme::Beauty),
        (&["ăn", "food", "snack"], Theme::Food),
    ];
    for (keywords, theme) in rules {
        if keywords.iter().any(|k| text.contains(k)) {
            return *theme;
        }
    }
    Theme::General
}

fn subject_elements(content_type: ImageContentType, theme: Theme) -> String {
    let mut elements: Vec<&str> = Vec::new();

    match content_type {
        ImageContentType::Video => {
            elements.extend(["dynamic video thumbnail", "engaging visual storytelling"])
        }
        ImageContentType::Blog => {
            elements.extend(["informative blog header image", "educational content visual"])
        }
        ImageContentType::SocialMedia => {
            elements.extend(["social media post image", "engaging marketing visual"])
        }
    }

    match theme {
        Theme::Korea => elements.extend([
            "Korean cultural elements",
            "K-beauty products",
            "modern Seoul aesthetic",
        ]),
        Theme::Japan => elements.extend([
            "Japanese minimalist design",
            "authentic Japanese products",
            "Tokyo modern style",
        ]),
        Theme::Usa => {
            elements.extend(["American lifestyle", "US brands", "Western consumer culture"])
        }
        Theme::Indonesia => elements.extend([
            "Indonesian craftsmanship",
            "tropical aesthetic",
            "Southeast Asian culture",
        ]),
        Theme::Fashion => {
            elements.extend(["stylish clothing", "fashion accessories", "trendy lifestyle"])
        }
        Theme::Technology => {
            elements.extend(["modern gadgets", "tech devices", "digital lifestyle"])
        }
        Theme::Beauty => {
            elements.extend(["cosmetic products", "skincare items", "beauty routine"])
        }
        Theme::Food => {
            elements.extend(["international cuisine", "food packaging", "gourmet products"])
        }
        Theme::General => {}
    }

    elements.join(", ")
}

fn logistics_elements(theme: Theme) -> String {
    let mut elements = vec![LOGISTICS_SHIPPING, LOGISTICS_INTERNATIONAL];
    if theme != Theme::General {
        elements.push(LOGISTICS_ECOMMERCE);
    }
    elements.join(", ")
}

fn audience_elements(audience: &str) -> &'static str {
    let audience = audience.to_lowercase();
    if audience.contains("gen z") || audience.contains("trẻ") {
        "trendy, youthful energy, social media aesthetic, vibrant colors"
    } else if audience.contains("millennial") {
        "modern professional, lifestyle focused, quality conscious"
    } else if audience.contains("doanh nhân") || audience.contains("business") {
        "business professional, corporate setting, success oriented"
    } else if audience.contains("phụ nữ") || audience.contains("women") {
        "feminine aesthetic, elegant design, lifestyle imagery"
    } else if audience.contains("nam") || audience.contains("men") {
        "masculine aesthetic, practical design, tech-forward"
    } else {
        "universal appeal, inclusive design, broad demographic"
    }
}

const COMMON_NEGATIVES: &[&str] = &[
    "low quality",
    "blurry",
    "pixelated",
    "distorted",
    "ugly",
    "deformed",
    "bad anatomy",
    "worst quality",
    "low resolution",
    "watermark",
    "signature",
    "text overlay",
    "copyright notice",
    "amateur photography",
];

fn negative_prompt(style: StylePreset) -> String {
    COMMON_NEGATIVES
        .iter()
        .chain(style.negatives().iter())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compose an image prompt from generated content and/or its source idea.
pub fn generate(
    content: Option<&StructuredContent>,
    idea: Option<&ContentIdea>,
    options: &ImagePromptOptions,
) -> GeneratedImagePrompt {
    let content_type = detect_content_type(content, idea);
    let theme = extract_theme(content, idea);
    let target_audience = idea
        .map(|i| i.target_segment.as_str())
        .unwrap_or("general audience");

    let mut main_parts = vec![
        subject_elements(content_type, theme),
        logistics_elements(theme),
    ];
    if options.brand_colors {
        main_parts.push(BRAND_COLORS.to_string());
    }
    main_parts.push(options.style.modifiers().to_string());
    main_parts.push(audience_elements(target_audience).to_string());

    let main_prompt = main_parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let style_modifiers = [
        format!("{} quality", options.quality.label()),
        format!("{} aspect ratio", options.aspect_ratio.label()),
        "professional commercial photography".to_string(),
        "marketing material".to_string(),
        if options.include_text {
            "with text overlay space".to_string()
        } else {
            "no text overlay".to_string()
        },
    ]
    .join(", ");

    let technical_specs = format!(
        "{}, {}",
        options.quality.specs(),
        options.aspect_ratio.specs()
    );

    let full_prompt = format!("{main_prompt}, {style_modifiers}. {technical_specs}");

    GeneratedImagePrompt {
        main_prompt,
        negative_prompt: negative_prompt(options.style),
        style_modifiers,
        technical_specs,
        full_prompt,
    }
}

/// Produce variations of a composed prompt by cycling the style preset.
pub fn variations(
    content: Option<&StructuredContent>,
    idea: Option<&ContentIdea>,
    options: &ImagePromptOptions,
    count: usize,
) -> Vec<GeneratedImagePrompt> {
    const STYLE_ROTATION: &[StylePreset] = &[
        StylePreset::Professional,
        StylePreset::Modern,
        StylePreset::Vibrant,
    ];

    (0..count)
        .map(|i| {
            let varied = ImagePromptOptions {
                style: STYLE_ROTATION[i % STYLE_ROTATION.len()],
                ..*options
            };
            generate(content, idea, &varied)
        })
        .collect()
}
