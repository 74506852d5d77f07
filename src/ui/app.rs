use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{AssistantCommand, AssistantEvent, ReplyAction};

use super::components::{chat_area, contact_form, input_bar, sidebar};
use super::state::AppState;

pub struct AssistantApp {
    state: AppState,
    recipient: String,
    command_sender: mpsc::Sender<AssistantCommand>,
    event_receiver: mpsc::Receiver<AssistantEvent>,
}

impl AssistantApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        recipient: String,
        command_sender: mpsc::Sender<AssistantCommand>,
        event_receiver: mpsc::Receiver<AssistantEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            recipient,
            command_sender,
            event_receiver,
        }
    }

    fn handle_assistant_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                AssistantEvent::Typing => self.state.typing = true,
                AssistantEvent::BotMessage(message) => self.state.push_bot_message(message),
            }
        }
    }

    fn send_command(&mut self, command: AssistantCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to assistant: {err}");
        }
    }

    fn ask(&mut self, text: String) {
        self.state.push_user_message(text.clone());
        self.send_command(AssistantCommand::Ask(text));
    }

    fn trigger(&mut self, action: ReplyAction) {
        self.send_command(AssistantCommand::Trigger(action));
    }

    fn open_chat(&mut self) {
        if self.state.open_chat() {
            self.send_command(AssistantCommand::Greet);
        }
    }

    fn render_chat_window(&mut self, ctx: &egui::Context) {
        let mut open = self.state.chat_open;
        let mut question = None;
        let mut action = None;

        egui::Window::new("Assistant I.E.K")
            .open(&mut open)
            .default_width(380.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Votre assistant fournitures scolaires").weak());
                ui.separator();
                action = chat_area::render(ui, &self.state.transcript, self.state.typing);
                ui.separator();
                question =
                    input_bar::render(ui, &mut self.state.input_text, self.state.typing);
                ui.hyperlink_to(
                    "Discuter sur WhatsApp",
                    crate::contact::Preset::Contact.link(&self.recipient),
                );
            });

        if !open {
            self.state.close_chat();
        }
        if let Some(text) = question {
            self.ask(text);
        }
        if let Some(action) = action {
            self.trigger(action);
        }
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_assistant_events();

        egui::SidePanel::left("catalog_sidebar")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    sidebar::render(ui, &mut self.state.search_term, &self.recipient);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Librairie I.E.K");
            ui.label("Fournitures et kits scolaires, livrés à Abidjan et environs.");
            ui.separator();

            if contact_form::render(ui, &mut self.state) {
                if let Some(url) = self.state.submit_contact(&self.recipient) {
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
            }

            if !self.state.chat_open {
                ui.add_space(16.0);
                if ui.button("💬 Ouvrir le chat").clicked() {
                    self.open_chat();
                }
            }
        });

        if self.state.chat_open {
            self.render_chat_window(ctx);
        }

        ctx.request_repaint();
    }
}
