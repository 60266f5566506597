//! Adapters from Telegram (teloxide) types to dbot_core types.

use dbot_core::{Chat, Message, ToCoreMessage, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat).to_string(),
            },
            content: self.0.text().unwrap_or("").to_string(),
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn telegram_message(value: serde_json::Value) -> teloxide::types::Message {
        serde_json::from_value(value).expect("valid Telegram message JSON")
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: Text message keeps chat id, sender and text verbatim.**
    #[test]
    fn test_text_message_to_core() {
        let msg = telegram_message(json!({
            "message_id": 7,
            "date": 1706529600,
            "chat": {"id": 123, "type": "private", "first_name": "Ann"},
            "from": {"id": 55, "is_bot": false, "first_name": "Ann", "username": "ann"},
            "text": "hello *world*"
        }));

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, "7");
        assert_eq!(core.chat.id, 123);
        assert_eq!(core.chat.chat_type, "private");
        assert_eq!(core.user.id, 55);
        assert_eq!(core.content, "hello *world*");
    }

    /// **Test: Message without text (location) converts to empty content.**
    #[test]
    fn test_non_text_message_has_empty_content() {
        let msg = telegram_message(json!({
            "message_id": 8,
            "date": 1706529600,
            "chat": {"id": -100, "type": "group", "title": "Team"},
            "from": {"id": 55, "is_bot": false, "first_name": "Ann"},
            "location": {"latitude": 60.17, "longitude": 24.94}
        }));

        let core = TelegramMessageWrapper(&msg).to_core();

        assert!(core.is_empty());
        assert_eq!(core.chat.id, -100);
        assert_eq!(core.chat.chat_type, "group");
    }
}
