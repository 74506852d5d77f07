pub mod catalog;
pub mod faq;
pub mod form;
pub mod link;
pub mod presets;

pub use catalog::{Category, Product, order_link};
pub use form::{ContactForm, Field, ValidationErrors};
pub use link::{
    PRIMARY_RECIPIENT, SECONDARY_RECIPIENT, build_contact_link, build_contact_link_to, call_link,
    whatsapp_chat_link, whatsapp_link,
};
pub use presets::{Preset, QUICK_MESSAGES};
