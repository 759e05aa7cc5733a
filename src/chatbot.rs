//! The chatbot engine: classification, search, and response assembly.

pub mod engine;
pub mod response;

pub use engine::Chatbot;
pub use response::{BotReply, ChatbotResponse};
