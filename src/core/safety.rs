//! Content Safety and Quality Control
//!
//! Deterministic, rule-based checks applied to generated text before it
//! reaches the user. Safety validation flags risky wording (over-promising
//! claims, CTA spam, unprofessional language, leaked phone numbers); quality
//! assessment scores a draft against five fixed criteria. Both are pure
//! functions over the input text, so they are trivially testable and never
//! touch a provider.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Severity of a safety finding. Ordered: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Outcome of a safety validation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyCheck {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub severity: Severity,
    pub suggestions: Vec<String>,
}

/// Per-criterion quality scores, each clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityCriteria {
    pub relevance: i32,
    pub clarity: i32,
    pub engagement: i32,
    pub brand_alignment: i32,
    pub channel_fit: i32,
}

/// Outcome of a quality assessment: overall score plus actionable feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: i32,
    pub criteria: QualityCriteria,
    pub feedback: Vec<String>,
}

/// Wording that over-promises or misleads. Any hit raises severity to Medium.
const SENSITIVE_WORDS: &[&str] = &[
    "miễn phí",
    "khuyến mãi khủng",
    "cực sốc",
    "giá rẻ nhất",
    "bảo đảm 100%",
    "không rủi ro",
    "nhanh giàu",
];

/// Wording incompatible with the brand voice. Any hit raises severity to High.
const UNPROFESSIONAL_WORDS: &[&str] = &["ăn gian", "lừa đảo", "móc túi", "chặt chém"];

static CTA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(inbox|đặt hàng|liên hệ|gọi ngay|mua ngay)").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(0\d{9}|\+84\d{9})").unwrap());

struct RuleOutcome {
    warnings: Vec<String>,
    suggestions: Vec<String>,
    severity: Severity,
}

fn check_sensitive_words(content_lower: &str) -> RuleOutcome {
    let mut out = RuleOutcome {
        warnings: Vec::new(),
        suggestions: Vec::new(),
        severity: Severity::Low,
    };
    for word in SENSITIVE_WORDS {
        if content_lower.contains(word) {
            out.warnings
                .push(format!("Phát hiện từ ngữ có thể gây hiểu lầm: \"{word}\""));
            out.suggestions
                .push(format!("Thay thế \"{word}\" bằng từ ngữ chuyên nghiệp hơn"));
            out.severity = Severity::Medium;
        }
    }
    out
}

fn check_cta_spam(content: &str) -> RuleOutcome {
    let count = CTA_REGEX.find_iter(content).count();
    if count > 3 {
        RuleOutcome {
            warnings: vec!["Quá nhiều call-to-action trong một nội dung".to_string()],
            suggestions: vec!["Giảm xuống 1-2 CTA chính để tăng hiệu quả".to_string()],
            severity: Severity::Medium,
        }
    } else {
        RuleOutcome {
            warnings: Vec::new(),
            suggestions: Vec::new(),
            severity: Severity::Low,
        }
    }
}

fn check_unprofessional_words(content_lower: &str) -> RuleOutcome {
    let mut out = RuleOutcome {
        warnings: Vec::new(),
        suggestions: Vec::new(),
        severity: Severity::Low,
    };
    for word in UNPROFESSIONAL_WORDS {
        if content_lower.contains(word) {
            out.warnings
                .push(format!("Từ ngữ không phù hợp với thương hiệu: \"{word}\""));
            out.suggestions
                .push("Sử dụng ngôn ngữ chuyên nghiệp, tích cực".to_string());
            out.severity = Severity::High;
        }
    }
    out
}

/// Phone numbers only warn; they never change validity on their own.
fn check_phone_numbers(content: &str) -> RuleOutcome {
    if PHONE_REGEX.is_match(content) {
        RuleOutcome {
            warnings: vec!["Phát hiện số điện thoại trực tiếp trong nội dung".to_string()],
            suggestions: vec![
                "Sử dụng CTA \"Inbox\" thay vì để số điện thoại công khai".to_string(),
            ],
            severity: Severity::Low,
        }
    } else {
        RuleOutcome {
            warnings: Vec::new(),
            suggestions: Vec::new(),
            severity: Severity::Low,
        }
    }
}

/// Run every safety rule over `content`. The result severity is the maximum
/// across rules, and the check is valid only when severity stays Low.
pub fn validate_content(content: &str) -> SafetyCheck {
    let content_lower = content.to_lowercase();
    let outcomes = [
        check_sensitive_words(&content_lower),
        check_cta_spam(content),
        check_unprofessional_words(&content_lower),
        check_phone_numbers(content),
    ];

    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();
    let mut severity = Severity::Low;
    for outcome in outcomes {
        warnings.extend(outcome.warnings);
        suggestions.extend(outcome.suggestions);
        severity = severity.max(outcome.severity);
    }

    SafetyCheck {
        is_valid: severity == Severity::Low,
        warnings,
        severity,
        suggestions,
    }
}

/// Brand and service keywords; missing all of them costs relevance points.
const BRAND_KEYWORDS: &[&str] = &["tiximax", "vận chuyển", "mua hộ", "ship hàng", "order"];

/// Markers of reader-directed writing.
const ENGAGEMENT_MARKERS: &[&str] = &["bạn", "chúng ta", "hãy", "?", "!"];

/// Score `content` against five fixed criteria for the given channel.
/// Baselines are 80/75/70/85/75; each rule can only subtract. The overall
/// score is the rounded mean, clamped to `[0, 100]`.
pub fn assess_quality(content: &str, channel_type: &str, _target_audience: &str) -> QualityReport {
    let mut relevance = 80;
    let mut clarity = 75;
    let mut engagement = 70;
    let brand_alignment = 85;
    let mut channel_fit = 75;
    let mut feedback = Vec::new();

    let content_lower = content.to_lowercase();
    let channel_lower = channel_type.to_lowercase();

    let has_brand_keyword = BRAND_KEYWORDS.iter().any(|k| content_lower.contains(k));
    if !has_brand_keyword {
        relevance -= 20;
        feedback.push("Nội dung cần nhắc đến Tiximax hoặc dịch vụ rõ ràng hơn".to_string());
    }

    let sentences = content
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let avg_sentence_length = content.chars().count() / sentences;
    if avg_sentence_length > 100 {
        clarity -= 15;
        feedback.push("Câu văn hơi dài, nên chia nhỏ để dễ đọc hơn".to_string());
    }

    let engagement_count: usize = ENGAGEMENT_MARKERS
        .iter()
        .map(|m| content_lower.matches(m).count())
        .sum();
    if engagement_count < 3 {
        engagement -= 15;
        feedback.push("Thêm câu hỏi hoặc lời kêu gọi để tăng tương tác".to_string());
    }

    let content_len = content.chars().count();
    if channel_lower.contains("tiktok") || channel_lower.contains("video") {
        if content_len > 200 {
            channel_fit -= 20;
            feedback.push("Nội dung video nên ngắn gọn hơn cho TikTok".to_string());
        }
    } else if channel_lower.contains("blog") && content_len < 500 {
        channel_fit -= 15;
        feedback.push("Blog cần nội dung dài hơn để SEO tốt".to_string());
    }

    let criteria = QualityCriteria {
        relevance: relevance.clamp(0, 100),
        clarity: clarity.clamp(0, 100),
        engagement: engagement.clamp(0, 100),
        brand_alignment: brand_alignment.clamp(0, 100),
        channel_fit: channel_fit.clamp(0, 100),
    };

    let total = criteria.relevance
        + criteria.clarity
        + criteria.engagement
        + criteria.brand_alignment
        + criteria.channel_fit;
    let score = ((total as f64) / 5.0).round() as i32;

    QualityReport {
        score: score.clamp(0, 100),
        criteria,
        feedback,
    }
}
