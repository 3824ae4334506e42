//! Conversation transcript, prompt composition, and the completion relay.

pub mod prompt;
pub mod relay;
pub mod transcript;
