use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ai là người gửi tin nhắn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Bot,
    User,
}

/// Quick reply action. The UI never runs code attached to a message; it sends
/// the tag back to the worker, which resolves it into the next bot reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReplyAction {
    ShowKits,
    ShowPrices,
    ShowOrdering,
    HandoffKitOrder,
    HandoffOrder,
    HandoffTeam,
}

/// Nút trả lời nhanh gắn với một tin nhắn của bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: String,
    pub action: ReplyAction,
}

impl QuickReply {
    pub fn new(label: &str, action: ReplyAction) -> Self {
        Self {
            label: label.to_string(),
            action,
        }
    }
}

/// Nội dung trả lời của bot, chưa gắn id/timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<QuickReply>,
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            actions: Vec::new(),
        }
    }

    pub fn with_actions(text: &str, actions: Vec<QuickReply>) -> Self {
        Self {
            text: text.to_string(),
            actions,
        }
    }
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub origin: Origin,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<QuickReply>,
}

impl ChatMessage {
    pub fn bot(reply: Reply) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: reply.text,
            origin: Origin::Bot,
            timestamp: Utc::now().timestamp_millis(),
            actions: reply.actions,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            origin: Origin::User,
            timestamp: Utc::now().timestamp_millis(),
            actions: Vec::new(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.origin == Origin::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_message_keeps_reply_actions() {
        let reply = Reply::with_actions(
            "Bonjour",
            vec![QuickReply::new("Les prix", ReplyAction::ShowPrices)],
        );
        let message = ChatMessage::bot(reply);
        assert!(message.is_bot());
        assert_eq!(message.text, "Bonjour");
        assert_eq!(message.actions.len(), 1);
        assert_eq!(message.actions[0].action, ReplyAction::ShowPrices);
    }

    #[test]
    fn messages_get_distinct_ids() {
        let first = ChatMessage::user("salut");
        let second = ChatMessage::user("salut");
        assert_ne!(first.id, second.id);
        assert_eq!(first.origin, Origin::User);
        assert!(first.actions.is_empty());
    }

    #[test]
    fn reply_action_serializes_as_tagged_kind() {
        let json = serde_json::to_string(&ReplyAction::HandoffTeam).unwrap();
        assert_eq!(json, r#"{"kind":"handoff-team"}"#);
        let parsed: ReplyAction = serde_json::from_str(r#"{"kind":"show-kits"}"#).unwrap();
        assert_eq!(parsed, ReplyAction::ShowKits);
    }

    #[test]
    fn reply_without_actions_omits_field() {
        let json = serde_json::to_value(Reply::text("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "ok" }));
    }
}
