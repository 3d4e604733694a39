//! Caramel Assistant
//!
//! Canned keyword replies for the floating chat widget. The first matching
//! rule wins; matching is case-insensitive substring search.

pub const ASSISTANT_NAME: &str = "Caramel";

pub const GREETING: &str =
    "Woof! I'm Caramel, your friendly AI Pet Assistant. How can I help you today? 🐾";

/// Simulated typing delay before a reply
pub const TYPING_DELAY_MS: u32 = 1500;

const FALLBACK: &str = "I'm still learning! 🐶 Could you tell me more, or ask something else? For complex issues, please see a real vet! 🩺";

const RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi"],
        "Hi there! How can I assist you and your furry friend today?",
    ),
    (
        &["vet", "consultation"],
        "Looking for a vet? You can find information on our 'Consult a Vet' page. I can also help you find general info!",
    ),
    (
        &["insurance"],
        "Pet insurance is a great idea! Check out our 'Pet Insurance' page for plans and quotes. What specific questions do you have?",
    ),
    (
        &["symptom", "sick"],
        "I can try to help with symptoms! Our AI Symptom Checker tool under 'Care Tools' is quite smart. Or, you can describe the symptoms to me.",
    ),
    (
        &["food", "diet"],
        "Nutrition is super important! For specific dietary advice, it's best to consult a vet. I can provide general tips though!",
    ),
    (&["thank"], "You're welcome! Happy to help! Anything else? 🦴"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }

    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }
}

pub fn reply_to(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK)
}
