pub mod chat_area;
pub mod contact_form;
pub mod input_bar;
pub mod sidebar;
