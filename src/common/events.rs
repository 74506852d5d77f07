use crate::common::types::ChatMessage;

/// Sự kiện từ worker gửi lên UI.
#[derive(Debug, Clone)]
pub enum AssistantEvent {
    /// Bot đang "suy nghĩ", câu trả lời sẽ tới sau độ trễ cấu hình
    Typing,
    BotMessage(ChatMessage),
}
