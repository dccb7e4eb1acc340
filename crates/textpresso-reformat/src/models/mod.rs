//! Data models: chat wire types and the Textpresso request envelope.

mod chat;
mod request;

pub use chat::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChoiceMessage, ResponseFormat};
pub use request::{SearchRequest, keys};
