//! Realtime transport modules.
//!
//! - `client`: emit capability trait and queue-backed client handle.
//! - `proto`: event names and payload types shared with the realtime
//!   server.

/// Emit capability trait and channel-backed client.
pub mod client;
/// Realtime protocol event names and payloads.
pub mod proto;
