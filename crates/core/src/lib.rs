//! slack-clean Core - Shared slash-command types.
//!
//! This crate provides the types shared by the slack-clean components:
//! - `server` - Slash-command webhook receiver and response relay
//! - `cli` - Command-line access to the synchronous clean path
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no clocks. This keeps it lightweight and allows the parsing and
//! relay bookkeeping to be tested in isolation.
//!
//! # Modules
//!
//! - [`types`] - Command payloads, acknowledgment modes, deferred results and relay outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
