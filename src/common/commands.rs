use crate::common::types::ReplyAction;

/// Lệnh UI gửi xuống worker trả lời.
#[derive(Debug, Clone)]
pub enum AssistantCommand {
    /// Câu hỏi người dùng vừa gõ (đã được UI thêm vào transcript)
    Ask(String),
    /// Người dùng bấm một nút trả lời nhanh
    Trigger(ReplyAction),
    /// Mở cửa sổ chat lần đầu, transcript còn trống
    Greet,
}
