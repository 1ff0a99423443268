//! # wapi-client
//!
//! Async Rust client for a WhatsApp messaging HTTP gateway.
//!
//! This crate contains:
//! - One-to-one wrappers over the gateway endpoints (`client`)
//! - Client configuration: base URL, bearer token, transport knobs (`config`)
//! - Transport-level error types (`errors`)
//!
//! ## Architecture
//! - Every remote endpoint maps to exactly one method on [`WhatsAppClient`]
//! - Responses are returned as raw `serde_json::Value`; the remote service
//!   defines the shape and the client enforces none
//! - One request per call: no retries, batching, or caching

pub mod client;
pub mod config;
pub mod errors;

mod http;

// Re-export commonly used items
pub use client::WhatsAppClient;
pub use config::ClientConfig;
pub use errors::ApiError;
