use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::{AssistantCommand, AssistantEvent, ChatMessage, Reply};

use super::{replies, responder};

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Worker chạy ngầm: nhận lệnh từ UI, trả tin nhắn bot qua kênh sự kiện.
pub struct AssistantWorker {
    event_sender: mpsc::Sender<AssistantEvent>,
    command_receiver: mpsc::Receiver<AssistantCommand>,
    reply_delay: Duration,
}

impl AssistantWorker {
    pub fn new(
        event_sender: mpsc::Sender<AssistantEvent>,
        command_receiver: mpsc::Receiver<AssistantCommand>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            reply_delay,
        }
    }

    pub async fn run(mut self) {
        log::info!(
            "Assistant worker started (reply delay {} ms)",
            self.reply_delay.as_millis()
        );

        while let Some(command) = self.command_receiver.recv().await {
            if !self.handle_command(command).await {
                break;
            }
        }

        log::info!("Assistant worker stopped");
    }

    /// Returns false once the UI side has gone away.
    async fn handle_command(&mut self, command: AssistantCommand) -> bool {
        match command {
            AssistantCommand::Ask(text) => {
                if text.trim().is_empty() {
                    return true;
                }
                if self.event_sender.send(AssistantEvent::Typing).await.is_err() {
                    return false;
                }
                // Giả lập thời gian "suy nghĩ" trước khi trả lời
                tokio::time::sleep(self.reply_delay).await;
                self.emit(responder::respond(&text)).await
            }
            AssistantCommand::Trigger(action) => {
                log::debug!("Quick reply triggered: {action:?}");
                self.emit(action.resolve()).await
            }
            AssistantCommand::Greet => self.emit(replies::welcome()).await,
        }
    }

    async fn emit(&self, reply: Reply) -> bool {
        let message = ChatMessage::bot(reply);
        if let Err(err) = self
            .event_sender
            .send(AssistantEvent::BotMessage(message))
            .await
        {
            log::warn!("Failed to deliver bot message to UI: {err}");
            return false;
        }
        true
    }
}
