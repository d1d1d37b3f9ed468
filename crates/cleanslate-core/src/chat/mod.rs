//! Motivational chat support.
//!
//! The engine only supplies the day counts and savings that go into the
//! context summary; the conversation itself is forwarded to an
//! OpenAI-compatible chat-completions endpoint.

mod client;
mod summary;

pub use client::ChatClient;
pub use summary::{greeting, summarize};

use indoc::formatdoc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Shown to the user when the completion call fails for any reason.
pub const GENERIC_FAILURE: &str = "Sorry, I couldn't process your message. Please try again.";

/// Fixed system prompt with the user's addiction summary embedded.
pub fn system_prompt(summary: &str) -> String {
    formatdoc! {"
        You are a compassionate, motivating support assistant for people overcoming addictions. Your role is to:

        1. Offer genuine, empathetic emotional support
        2. Give practical strategies for handling cravings and triggers
        3. Celebrate achievements and progress, however small
        4. Help identify patterns and triggers
        5. Suggest healthy coping techniques
        6. Never judge or criticise, only support and encourage

        USER CONTEXT:
        {summary}

        GUIDELINES:
        - Be brief and direct (3-4 sentences per reply at most)
        - Use emojis occasionally to keep the tone friendly
        - Ask open questions to understand the situation
        - Offer specific techniques when the user is in crisis
        - Be realistic but always optimistic

        USEFUL TECHNIQUES:
        - Deep breathing (4-7-8)
        - Five-senses grounding
        - A walk or light exercise
        - Calling someone you trust
        - Drinking water and eating something healthy
        - Journaling feelings
        - Remembering the reasons for quitting
        - Picturing the future without the addiction
    "}
}
