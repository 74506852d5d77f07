use eframe::egui;

use crate::assistant::Transcript;
use crate::common::ReplyAction;

/// Vẽ transcript; trả về action nếu người dùng bấm một nút trả lời nhanh.
pub fn render(ui: &mut egui::Ui, transcript: &Transcript, typing: bool) -> Option<ReplyAction> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .max_height(320.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in transcript.messages() {
                let (who, color) = if message.is_bot() {
                    ("Assistant", egui::Color32::from_rgb(124, 58, 237))
                } else {
                    ("Vous", egui::Color32::from_rgb(37, 211, 102))
                };

                ui.group(|ui| {
                    ui.colored_label(color, who);
                    ui.label(message.text.as_str());
                    for quick_reply in &message.actions {
                        if ui.button(quick_reply.label.as_str()).clicked() {
                            clicked = Some(quick_reply.action);
                        }
                    }
                });
            }

            if typing {
                ui.label(egui::RichText::new("L'assistant écrit…").italics().weak());
            }
        });

    clicked
}
