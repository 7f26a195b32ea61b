//! LLM-backed concept extraction (Anthropic/OpenAI/Groq).
//!
//! One non-streaming completion per question. Callers treat any error as
//! "use keyword extraction instead"; nothing here retries.

pub mod client;
pub mod config;
pub mod prompt;
pub mod types;

pub use client::{CompletionProvider, LlmClient};
pub use config::LLMConfig;
pub use prompt::build_prompt;
pub use types::*;
