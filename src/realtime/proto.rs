use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Socket event name for one-shot agent chat messages.
pub const CHAT_MESSAGE_EVENT: &str = "chat-message";
/// Socket event name for one token fragment of a streamed message.
pub const STREAM_MESSAGE_TOKEN_EVENT: &str = "stream-chat-message-token";
/// Socket event name terminating a streamed message.
pub const STREAM_MESSAGE_END_EVENT: &str = "stream-chat-message-end";

/// Content format of a chat message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageFormat {
    #[default]
    PlainText,
    Markdown,
}

impl MessageFormat {
    /// Returns the wire representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormat::PlainText => "PlainText",
            MessageFormat::Markdown => "Markdown",
        }
    }
}

/// Origin of a chat message.
///
/// This SDK only ever produces agent-sourced messages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageSource {
    #[default]
    #[serde(rename = "AGENT")]
    Agent,
}

/// Payload of a one-shot `chat-message` event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageMsg {
    pub conversation_id: String,
    pub text: String,
    pub agent_id: String,
    pub source: MessageSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<MessageFormat>,
}

/// Payload of one `stream-chat-message-token` event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamMessageTokenMsg {
    pub conversation_id: String,
    pub message_id: String,
    pub text: String,
    pub attachments: Vec<Value>,
    pub format: MessageFormat,
    pub agent_id: String,
}

/// Payload of a `stream-chat-message-end` event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamMessageEndMsg {
    pub conversation_id: String,
    pub message_id: String,
    pub agent_id: String,
}

/// Outbound realtime event: a wire event name plus its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    ChatMessage(ChatMessageMsg),
    StreamMessageToken(StreamMessageTokenMsg),
    StreamMessageEnd(StreamMessageEndMsg),
}

impl OutboundEvent {
    /// Returns the socket event name this payload is emitted under.
    pub fn name(&self) -> &'static str {
        match self {
            OutboundEvent::ChatMessage(_) => CHAT_MESSAGE_EVENT,
            OutboundEvent::StreamMessageToken(_) => STREAM_MESSAGE_TOKEN_EVENT,
            OutboundEvent::StreamMessageEnd(_) => STREAM_MESSAGE_END_EVENT,
        }
    }

    /// Serializes the payload to the JSON mapping sent on the wire.
    pub fn to_payload(&self) -> Result<Value, serde_json::Error> {
        match self {
            OutboundEvent::ChatMessage(msg) => serde_json::to_value(msg),
            OutboundEvent::StreamMessageToken(msg) => serde_json::to_value(msg),
            OutboundEvent::StreamMessageEnd(msg) => serde_json::to_value(msg),
        }
    }
}

/// Member record attached to incoming chat messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberMsg {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    pub project_id: String,
}

/// Chat message delivered to the agent by the realtime server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomingChatMessageMsg {
    pub text: String,
    pub conversation_id: String,
    pub message_id: String,
    pub agent_id: String,
    pub member: MemberMsg,
}

impl IncomingChatMessageMsg {
    pub fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
