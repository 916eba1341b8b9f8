//! Realtime transport capability and queue-backed client handle.
//!
//! The SDK never owns a connection. Agents talk to the realtime server
//! through the [`RealtimeClient`] capability, and the crate ships one
//! implementation: a cloneable handle that enqueues events onto an
//! unbounded channel drained by an externally owned connection worker.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::realtime::proto::OutboundEvent;

/// Emit capability consumed by agents and streams.
///
/// `emit` must hand the event off without suspending the caller;
/// delivery guarantees belong to the transport behind the handle.
pub trait RealtimeClient: Send + Sync {
    /// Emits one named event with its payload on the transport.
    fn emit(&self, event: OutboundEvent) -> Result<(), RealtimeError>;
}

/// Cloneable client handle backed by an unbounded event queue.
///
/// The receiving half is expected to be owned by the connection worker
/// that serializes events onto the actual socket.
#[derive(Clone, Debug)]
pub struct ChannelRealtimeClient {
    tx: mpsc::UnboundedSender<OutboundEvent>,
}

impl ChannelRealtimeClient {
    /// Creates a client handle over an existing outbound queue.
    pub fn new(tx: mpsc::UnboundedSender<OutboundEvent>) -> Self {
        Self { tx }
    }

    /// Creates a client handle together with the consumer side of its
    /// queue.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<OutboundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl RealtimeClient for ChannelRealtimeClient {
    fn emit(&self, event: OutboundEvent) -> Result<(), RealtimeError> {
        self.tx.send(event).map_err(|_| RealtimeError::QueueClosed)
    }
}

/// Errors produced by realtime transport handles.
#[derive(Debug, Error)]
pub enum RealtimeError {
    /// Outbound event queue has been closed.
    #[error("realtime send queue is closed")]
    QueueClosed,

    /// Payload serialization error surfaced by a transport adapter.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
