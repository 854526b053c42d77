//! Command processing services.
//!
//! # Services
//!
//! - `ack` - Acknowledges a slash command and schedules the deferred work
//! - `background` - Tracks work that outlives the request
//! - `deferred` - Turns the user's text into the message to deliver
//! - `transform` - Text transformation seam, backed by `OpenAI`

pub mod ack;
pub mod background;
pub mod deferred;
pub mod transform;

pub use ack::AckDispatcher;
pub use background::BackgroundTasks;
pub use deferred::DeferredProcessor;
pub use transform::{TextTransformer, TransformError, UNKNOWN_ERROR_MESSAGE};
