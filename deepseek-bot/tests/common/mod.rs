pub mod mock_bot;

use dbot_core::{Chat, Message, User};

/// Incoming private-chat message with the given chat id and text.
pub fn incoming(chat_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg_{}", chat_id),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
    }
}
