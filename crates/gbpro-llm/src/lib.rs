//! Chat-completions client for an OpenAI-compatible API.
//!
//! [`OpenAiClient`] implements [`gbpro_audit::TextGenerator`]; the keyword
//! and sentiment advisors call it and fall back to templates on any error.

pub mod client;
pub mod error;

pub use client::OpenAiClient;
pub use error::LlmError;
