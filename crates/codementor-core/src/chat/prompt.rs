//! Prompt composition for the completion relay.
//!
//! The outbound prompt is plain string concatenation over a fixed
//! template: standing instructions, few-shot examples, a bounded window
//! of recent conversation, the new user message, and an `Assistant:` cue
//! for the model to continue from.

use codementor_types::chat::Turn;

/// Standing instructions prepended to every outbound prompt.
pub const SYSTEM_PROMPT: &str = "\
You are an AI Coding Assistant made for B-Tech students.

Rules:
- Explain concepts in simple language
- Give Java or JavaScript examples
- Answer step-by-step
- Keep answers short and clear
- If question is not coding-related, politely refuse";

/// Few-shot examples showing the expected answer register.
pub const TRAINING_EXAMPLES: &str = "\
User: What is an array?
Assistant:
An array is a collection of elements stored in continuous memory.
Example in Java:
int[] arr = {1, 2, 3};

User: Explain OOP
Assistant:
OOP stands for Object-Oriented Programming.
It has four pillars:
1. Encapsulation
2. Inheritance
3. Polymorphism
4. Abstraction";

/// Maximum number of transcript turns included in the context window.
pub const CONTEXT_WINDOW_TURNS: usize = 6;

/// Render a context window as `"{role}: {content}"` lines, oldest first.
pub fn render_window(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose the full outbound prompt for one exchange.
pub fn compose(window: &[Turn], message: &str) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\n{TRAINING_EXAMPLES}\n\nConversation so far:\n{}\n\nUser: {}\nAssistant:\n",
        render_window(window),
        message,
    )
}
