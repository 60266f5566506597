//! Core types: user, chat, incoming and outgoing messages.

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for updates that carry no sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// One inbound update narrowed to its text. `content` is empty for non-text updates.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
}

impl Message {
    /// True when there is nothing to forward to the model.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// How the transport should render outgoing text. Replies are always markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Markdown,
}

/// Reply addressed to the chat an incoming [`Message`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    pub text: String,
    pub render_mode: RenderMode,
}

impl OutgoingMessage {
    /// Markdown reply to the chat of `message`.
    pub fn reply_to(message: &Message, text: impl Into<String>) -> Self {
        Self {
            chat_id: message.chat.id,
            text: text.into(),
            render_mode: RenderMode::Markdown,
        }
    }
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
