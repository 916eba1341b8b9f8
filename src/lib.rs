//! User-facing Rust SDK for AgentLabs agent chat integrations.
//!
//! The crate is organized by surface:
//! - `agent`: agent identity, one-shot message sends, and token streams.
//! - `realtime`: transport capability trait, queue-backed client handle,
//!   and wire payload types.

/// Agent identity, message sends, and token streams.
pub mod agent;
/// Realtime transport capability and protocol types.
pub mod realtime;
