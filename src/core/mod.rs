//! Core content-generation engine.
//!
//! # Module structure
//!
//! - `types`: domain model (requests, ideas, insights, structured output)
//! - `channels`: per-channel style rule catalog
//! - `prompts`: deterministic prompt templates for every generation task
//! - `parser`: tolerant JSON extraction from free-form model replies
//! - `llm`: provider gateway (trait + OpenAI/Gemini adapters)
//! - `orchestrator`: the generation pipelines (simple and enhanced)
//! - `safety`: rule-based content validation and quality scoring
//! - `image_prompt`: deterministic image-generation prompt composer
//! - `feedback`: user feedback records and analytics aggregation

pub mod channels;
pub mod feedback;
pub mod image_prompt;
pub mod llm;
pub mod orchestrator;
pub mod parser;
pub mod prompts;
pub mod safety;
pub mod types;

pub use channels::{ChannelCatalog, ChannelConfig};
pub use orchestrator::{ContentOrchestrator, EnhancedOrchestrator};
pub use types::{ContentIdea, ContentRequest, MarketInsight, Objective, StructuredContent};
