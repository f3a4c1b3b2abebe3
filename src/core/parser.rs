//! Tolerant JSON Extraction
//!
//! Model replies wrap their JSON payload in prose, markdown fences, or
//! trailing commentary. Extraction takes the outermost bracketed region
//! (first `[` to last `]`, or first `{` to last `}`) and parses it strictly.
//! Failures are returned to the caller, which owns the fallback decision.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::core::types::{BlogPost, SocialPost, StructuredContent, VideoScript};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON array found in response")]
    NoArrayFound,
    #[error("no JSON object found in response")]
    NoObjectFound,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Slice out the outermost region between `open` and `close`, inclusive.
fn outermost<'a>(text: &'a str, open: char, close: char) -> Option<&'a str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract and parse the outermost JSON array from a model reply.
pub fn extract_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ParseError> {
    let raw = outermost(text, '[', ']').ok_or(ParseError::NoArrayFound)?;
    Ok(serde_json::from_str(raw)?)
}

/// Extract and parse the outermost JSON object from a model reply.
pub fn extract_object<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    let raw = outermost(text, '{', '}').ok_or(ParseError::NoObjectFound)?;
    Ok(serde_json::from_str(raw)?)
}

/// Extract the outermost JSON object as an untyped value.
pub fn extract_value(text: &str) -> Result<Value, ParseError> {
    extract_object(text)
}

/// Classify a parsed content object into its structured shape. The
/// discriminant is decided here, once, by field presence: a scenes array or
/// video title marks a video script, a title plus full draft marks a blog
/// post, anything else is treated as a social post.
pub fn classify_structured(value: Value) -> Result<StructuredContent, ParseError> {
    let is_video =
        value.get("script_scenes").is_some() || value.get("video_title_idea").is_some();
    let is_blog = value.get("title").is_some() && value.get("full_content_draft").is_some();

    if is_video {
        let script: VideoScript = serde_json::from_value(value)?;
        Ok(StructuredContent::VideoScript(script))
    } else if is_blog {
        let post: BlogPost = serde_json::from_value(value)?;
        Ok(StructuredContent::BlogPost(post))
    } else {
        let post: SocialPost = serde_json::from_value(value)?;
        Ok(StructuredContent::SocialPost(post))
    }
}

/// Extract and classify structured content from a raw model reply.
pub fn extract_structured(text: &str) -> Result<StructuredContent, ParseError> {
    classify_structured(extract_value(text)?)
}
