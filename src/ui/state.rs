use crate::assistant::Transcript;
use crate::common::ChatMessage;
use crate::contact::{ContactForm, Field, ValidationErrors, build_contact_link_to};

pub const SENT_NOTICE: &str = "Message envoyé ! Vous allez être redirigé vers WhatsApp.";

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub transcript: Transcript,
    pub input_text: String,
    pub chat_open: bool,
    /// Bot đang "gõ" (đã nhận Typing, chưa nhận tin nhắn)
    pub typing: bool,
    greeted: bool,
    pub contact_form: ContactForm,
    pub form_errors: Option<ValidationErrors>,
    pub notice: Option<String>,
    /// Ô tìm kiếm sản phẩm ở sidebar
    pub search_term: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            input_text: String::new(),
            chat_open: false,
            typing: false,
            greeted: false,
            contact_form: ContactForm::default(),
            form_errors: None,
            notice: None,
            search_term: String::new(),
        }
    }

    /// Opens the chat window. Returns true when the welcome message should be requested.
    pub fn open_chat(&mut self) -> bool {
        self.chat_open = true;
        if self.transcript.is_empty() && !self.greeted {
            self.greeted = true;
            return true;
        }
        false
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    pub fn push_user_message(&mut self, text: String) {
        self.transcript.push(ChatMessage::user(text));
    }

    pub fn push_bot_message(&mut self, message: ChatMessage) {
        self.typing = false;
        self.transcript.push(message);
        log::debug!("Transcript now holds {} messages", self.transcript.len());
    }

    /// Builds the WhatsApp link from the form. On success the form is reset;
    /// on failure it stays populated and the per-field errors are kept for display.
    pub fn submit_contact(&mut self, recipient: &str) -> Option<String> {
        match build_contact_link_to(&self.contact_form, recipient) {
            Ok(url) => {
                log::info!("Contact form submitted, opening WhatsApp");
                self.contact_form.reset();
                self.form_errors = None;
                self.notice = Some(SENT_NOTICE.to_string());
                Some(url)
            }
            Err(errors) => {
                log::debug!("Contact form rejected on {} field(s)", errors.len());
                self.form_errors = Some(errors);
                self.notice = None;
                None
            }
        }
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.form_errors.as_ref().and_then(|errors| errors.get(field))
    }

    pub fn field_invalid(&self, field: Field) -> bool {
        self.form_errors
            .as_ref()
            .is_some_and(|errors| errors.contains(field))
    }
}
