//! `OpenAI` chat completion client used to clean up text.
//!
//! A single non-streaming request per command: the system prompt from
//! [`prompt`] plus the user's text, answered with the first choice's content.

mod client;
mod error;
pub mod prompt;
mod types;

pub use client::{NO_CONTENT_MESSAGE, OpenAiClient};
pub use error::OpenAiError;
pub use types::{ApiError, ApiErrorResponse, ChatRequest, ChatResponse, Message};
