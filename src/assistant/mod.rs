pub mod replies;
pub mod responder;
pub mod transcript;
pub mod worker;

pub use responder::{classify, respond};
pub use transcript::Transcript;
pub use worker::AssistantWorker;
