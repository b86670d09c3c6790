//! tutorly-llm — chat-completion client and prompt assembly.

pub mod backend;
pub mod prompt;

pub use backend::{LlmBackend, LlmError, LlmRequest, LlmResponse, Message, OpenAiBackend};
pub use prompt::{answer_or_placeholder, build_messages, NO_ANSWER};
