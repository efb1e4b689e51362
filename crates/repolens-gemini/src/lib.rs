//! Client for the hosted generative-analysis service.
//!
//! Pass-through orchestration around one `generateContent` call with web
//! grounding enabled: build the prompt and response schema, POST, parse
//! the structured JSON answer and grounding citations. No retry, no
//! backoff, no partial-failure handling.

pub mod client;
pub mod error;
pub mod schema;

pub use client::{DEFAULT_MODEL, GeminiClient};
pub use error::GeminiError;
