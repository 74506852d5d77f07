use super::form::{ContactForm, ValidationErrors};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";
/// Số nhận chính và phụ, định dạng quốc tế không có dấu `+`.
pub const PRIMARY_RECIPIENT: &str = "2250757608818";
pub const SECONDARY_RECIPIENT: &str = "2250555782944";

/// `https://wa.me/<recipient>?text=<percent-encoded text>`
pub fn whatsapp_link(recipient: &str, text: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}/{recipient}?text={}",
        urlencoding::encode(text)
    )
}

/// Opens the chat with no pre-filled text.
pub fn whatsapp_chat_link(recipient: &str) -> String {
    format!("{WHATSAPP_BASE_URL}/{recipient}")
}

pub fn call_link(recipient: &str) -> String {
    format!("tel:+{recipient}")
}

/// Nội dung tin nhắn WhatsApp dựng từ form (đã sanitize).
pub fn compose_message(form: &ContactForm) -> String {
    format!(
        "Bonjour ! Je suis {}.\n\nMon numéro : {}\n\nMessage : {}",
        form.name, form.phone, form.message
    )
}

pub fn build_contact_link(form: &ContactForm) -> Result<String, ValidationErrors> {
    build_contact_link_to(form, PRIMARY_RECIPIENT)
}

/// Validates the trimmed form, sanitizes it, then builds the deep link.
pub fn build_contact_link_to(
    form: &ContactForm,
    recipient: &str,
) -> Result<String, ValidationErrors> {
    let form = form.trimmed();
    form.validate()?;
    let message = compose_message(&form.sanitized());
    Ok(whatsapp_link(recipient, &message))
}
