//! Message types for provider requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a provider conversation.
///
/// The analysis pipeline is text-only: prompts go out as text, and the
/// provider's structured JSON comes back as text.
///
/// # Examples
///
/// ```
/// use chronicle_core::{Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: "Analyze this transcript.".to_string(),
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Convenience constructor for a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Convenience constructor for a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}
