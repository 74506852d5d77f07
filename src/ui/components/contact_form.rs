use eframe::egui;

use crate::contact::Field;
use crate::ui::state::AppState;

/// Form liên hệ. Trả về true khi người dùng bấm gửi.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading("Envoyez-nous un message");
    ui.label("Remplissez le formulaire ci-dessous et nous vous contacterons via WhatsApp.");
    ui.separator();

    field_label(ui, state, Field::Name, "Nom complet *");
    ui.add(egui::TextEdit::singleline(&mut state.contact_form.name).hint_text("Votre nom"));
    field_error(ui, state, Field::Name);

    field_label(ui, state, Field::Phone, "Téléphone *");
    ui.add(
        egui::TextEdit::singleline(&mut state.contact_form.phone)
            .hint_text("Votre numéro WhatsApp"),
    );
    field_error(ui, state, Field::Phone);

    field_label(ui, state, Field::Message, "Message *");
    ui.add(
        egui::TextEdit::multiline(&mut state.contact_form.message)
            .desired_rows(4)
            .hint_text("Décrivez votre besoin"),
    );
    field_error(ui, state, Field::Message);

    let submitted = ui.button("Envoyer via WhatsApp").clicked();

    if let Some(notice) = &state.notice {
        ui.colored_label(egui::Color32::from_rgb(37, 211, 102), notice);
    }

    submitted
}

fn field_label(ui: &mut egui::Ui, state: &AppState, field: Field, text: &str) {
    if state.field_invalid(field) {
        ui.colored_label(egui::Color32::RED, text);
    } else {
        ui.label(text);
    }
}

fn field_error(ui: &mut egui::Ui, state: &AppState, field: Field) {
    if let Some(message) = state.field_error(field) {
        ui.colored_label(egui::Color32::RED, message);
    }
}
