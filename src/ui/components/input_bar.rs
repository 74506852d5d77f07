use eframe::egui;

/// Ô nhập câu hỏi cho chat. Trả về câu hỏi đã trim khi người dùng gửi.
pub fn render(ui: &mut egui::Ui, input_text: &mut String, typing: bool) -> Option<String> {
    let mut question = None;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let can_send = !input_text.trim().is_empty();
        let send_clicked = ui
            .add_enabled(can_send, egui::Button::new("➤"))
            .on_hover_text("Envoyer")
            .clicked();

        let hint = if typing {
            "L'assistant écrit..."
        } else {
            "Tapez votre question..."
        };
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if send_clicked || enter_pressed {
            question = take_question(input_text);
            // Giữ focus để hỏi tiếp không cần click lại
            response.request_focus();
        }
    });
    question
}

/// Blank input stays in the box untouched.
fn take_question(input_text: &mut String) -> Option<String> {
    let question = input_text.trim();
    if question.is_empty() {
        return None;
    }
    let question = question.to_string();
    input_text.clear();
    Some(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_trimmed_and_box_cleared() {
        let mut input = "  prix du kit 6e  ".to_string();
        assert_eq!(take_question(&mut input).as_deref(), Some("prix du kit 6e"));
        assert!(input.is_empty());
    }

    #[test]
    fn whitespace_is_not_sent() {
        let mut input = "   ".to_string();
        assert_eq!(take_question(&mut input), None);
        assert_eq!(input, "   ");
    }
}
