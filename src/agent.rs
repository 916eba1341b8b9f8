//! Agent identity and outbound message surfaces.
//!
//! An [`Agent`] wraps an agent id and a shared realtime transport
//! handle. One-shot messages go out through [`Agent::send`]; multi-part
//! messages are composed token by token through an [`AgentStream`]
//! created with [`Agent::create_stream`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::realtime::client::{RealtimeClient, RealtimeError};
use crate::realtime::proto::{
    ChatMessageMsg, IncomingChatMessageMsg, MessageFormat, MessageSource, OutboundEvent,
    StreamMessageEndMsg, StreamMessageTokenMsg,
};

/// Default pacing for [`Agent::typewrite`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypewriteDefaults;

impl TypewriteDefaults {
    pub const INTERVAL: Duration = Duration::from_millis(50);
    pub const INITIAL_DELAY: Duration = Duration::ZERO;
}

/// Options controlling [`Agent::typewrite`] pacing and formatting.
#[derive(Clone, Copy, Debug)]
pub struct TypewriteOptions {
    /// Content format of the streamed message.
    pub format: MessageFormat,
    /// Delay between consecutive character writes.
    pub interval: Duration,
    /// Delay before the first character is written.
    pub initial_delay: Duration,
}

impl Default for TypewriteOptions {
    fn default() -> Self {
        Self {
            format: MessageFormat::PlainText,
            interval: TypewriteDefaults::INTERVAL,
            initial_delay: TypewriteDefaults::INITIAL_DELAY,
        }
    }
}

/// Chat agent bound to a realtime transport.
#[derive(Clone)]
pub struct Agent {
    id: String,
    realtime: Arc<dyn RealtimeClient>,
}

impl Agent {
    /// Creates an agent identity over an externally owned transport.
    pub fn new(id: impl Into<String>, realtime: Arc<dyn RealtimeClient>) -> Self {
        Self {
            id: id.into(),
            realtime,
        }
    }

    /// Returns the agent id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sends one atomic chat message into a conversation.
    ///
    /// Fire-and-forget at this layer: the call succeeds once the event
    /// is handed to the transport. Empty text is allowed.
    pub fn send(
        &self,
        text: impl Into<String>,
        conversation_id: impl Into<String>,
    ) -> Result<(), RealtimeError> {
        self.send_message(text.into(), conversation_id.into(), None)
    }

    /// Sends one atomic chat message with an explicit content format.
    pub fn send_with_format(
        &self,
        text: impl Into<String>,
        conversation_id: impl Into<String>,
        format: MessageFormat,
    ) -> Result<(), RealtimeError> {
        self.send_message(text.into(), conversation_id.into(), Some(format))
    }

    /// Sends a reply into the conversation an incoming message belongs
    /// to.
    pub fn reply(
        &self,
        message: &IncomingChatMessageMsg,
        text: impl Into<String>,
    ) -> Result<(), RealtimeError> {
        self.send(text, message.conversation_id.clone())
    }

    fn send_message(
        &self,
        text: String,
        conversation_id: String,
        format: Option<MessageFormat>,
    ) -> Result<(), RealtimeError> {
        self.realtime.emit(OutboundEvent::ChatMessage(ChatMessageMsg {
            conversation_id,
            text,
            agent_id: self.id.clone(),
            source: MessageSource::Agent,
            format,
        }))
    }

    /// Creates a new token stream into a conversation.
    ///
    /// Pure construction: a fresh message id is generated and nothing
    /// is emitted until the first [`AgentStream::write`].
    pub fn create_stream(
        &self,
        conversation_id: impl Into<String>,
        format: MessageFormat,
    ) -> AgentStream {
        let conversation_id = conversation_id.into();
        let message_id = Uuid::new_v4().to_string();
        debug!(
            event = "stream_created",
            %conversation_id,
            %message_id,
        );
        AgentStream {
            conversation_id,
            message_id,
            format,
            agent_id: self.id.clone(),
            realtime: Arc::clone(&self.realtime),
            ended: AtomicBool::new(false),
        }
    }

    /// Streams `text` one character at a time with typewriter pacing,
    /// then ends the stream.
    pub async fn typewrite(
        &self,
        text: impl AsRef<str>,
        conversation_id: impl Into<String>,
        options: TypewriteOptions,
    ) -> Result<(), StreamError> {
        let stream = self.create_stream(conversation_id, options.format);

        if !options.initial_delay.is_zero() {
            tokio::time::sleep(options.initial_delay).await;
        }

        let mut buffer = [0u8; 4];
        for (index, character) in text.as_ref().chars().enumerate() {
            if index > 0 && !options.interval.is_zero() {
                tokio::time::sleep(options.interval).await;
            }
            stream.write(character.encode_utf8(&mut buffer))?;
        }

        stream.end()?;
        Ok(())
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent").field("id", &self.id).finish_non_exhaustive()
    }
}

/// One in-progress streamed message.
///
/// Tokens written to the stream share a single message id and are
/// emitted in call order. Once [`AgentStream::end`] has run, the
/// stream is inert and further writes fail.
pub struct AgentStream {
    conversation_id: String,
    message_id: String,
    format: MessageFormat,
    agent_id: String,
    realtime: Arc<dyn RealtimeClient>,
    ended: AtomicBool,
}

impl AgentStream {
    /// Returns the target conversation id.
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// Returns the message id shared by every token of this stream.
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    /// Returns the id of the owning agent.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Returns the content format fixed at creation.
    pub fn format(&self) -> MessageFormat {
        self.format
    }

    /// Returns whether [`AgentStream::end`] has completed.
    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::Acquire)
    }

    /// Writes one token fragment to the stream.
    ///
    /// Fails with [`StreamError::Ended`] once the stream has been
    /// ended.
    pub fn write(&self, token: impl Into<String>) -> Result<(), StreamError> {
        if self.is_ended() {
            return Err(StreamError::Ended);
        }

        self.realtime
            .emit(OutboundEvent::StreamMessageToken(StreamMessageTokenMsg {
                conversation_id: self.conversation_id.clone(),
                message_id: self.message_id.clone(),
                text: token.into(),
                attachments: Vec::new(),
                format: self.format,
                agent_id: self.agent_id.clone(),
            }))?;
        Ok(())
    }

    /// Ends the stream.
    ///
    /// The first call flips the ended flag and emits the end event;
    /// repeat calls are no-ops so downstream consumers never see a
    /// duplicate end-of-stream signal.
    pub fn end(&self) -> Result<(), StreamError> {
        if self
            .ended
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }

        debug!(
            event = "stream_ended",
            conversation_id = %self.conversation_id,
            message_id = %self.message_id,
        );
        self.realtime
            .emit(OutboundEvent::StreamMessageEnd(StreamMessageEndMsg {
                conversation_id: self.conversation_id.clone(),
                message_id: self.message_id.clone(),
                agent_id: self.agent_id.clone(),
            }))?;
        Ok(())
    }
}

impl fmt::Debug for AgentStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentStream")
            .field("conversation_id", &self.conversation_id)
            .field("message_id", &self.message_id)
            .field("agent_id", &self.agent_id)
            .field("format", &self.format)
            .field("ended", &self.is_ended())
            .finish_non_exhaustive()
    }
}

/// Errors produced by stream operations.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The stream has already been ended.
    #[error("cannot write to a stream that has already been ended")]
    Ended,

    /// Transport error, propagated unmodified.
    #[error(transparent)]
    Realtime(#[from] RealtimeError),
}
