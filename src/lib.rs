//! Tiximax Content Studio - AI-Powered Content Marketing Engine
//!
//! Core library orchestrating two LLM providers (Gemini for market research,
//! OpenAI for copywriting) to produce channel-tailored marketing content:
//! idea generation, detailed drafts, bulk generation, image prompts, and
//! rule-based content safety and quality checks.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
