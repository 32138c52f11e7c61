use serde::{Deserialize, Serialize};

/// The kind of a response message, used by clients to pick a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain shell output.
    System,
    /// Dialogue from a character (Elara, the Warden).
    Narrator,
    /// A failure report.
    Error,
    /// A highlighted confirmation.
    Success,
}

/// One timed line of output.
///
/// `delay_ms` is how long a client waits, relative to the start of the
/// response, before showing the line. The server never sleeps on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// How the line should be presented.
    pub kind: MessageKind,
    /// The line's text.
    pub text: String,
    /// Client-side pacing delay in milliseconds.
    pub delay_ms: u64,
    /// Name of the speaking character, if any.
    pub speaker: Option<String>,
}

impl ResponseMessage {
    /// Create a message of the given kind with no delay and no speaker.
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            delay_ms: 0,
            speaker: None,
        }
    }

    /// Create a plain system message.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(MessageKind::System, text)
    }

    /// Create an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }

    /// Create a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, text)
    }

    /// Create a line of character dialogue.
    pub fn narrator(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker.into()),
            ..Self::new(MessageKind::Narrator, text)
        }
    }

    /// Set the pacing delay.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Returns true if this message is spoken by `name` (case-sensitive).
    pub fn is_spoken_by(&self, name: &str) -> bool {
        self.speaker.as_deref() == Some(name)
    }
}
