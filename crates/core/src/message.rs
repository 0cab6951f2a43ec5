//! Message and conversation domain types.
//!
//! Two views of a conversation live here:
//! - [`Message`]: the wire unit sent to a provider, grouped per [`SessionId`].
//! - [`ConversationSession`]: the human/assistant transcript a session keeps
//!   for display and result records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque key partitioning provider-side conversational state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The AI assistant
    Assistant,
    /// System instructions (framing)
    System,
}

/// A single message sent to or received from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub id: String,

    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn with_role(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(Role::User, content)
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role(Role::Assistant, content)
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::with_role(Role::System, content)
    }
}

/// Author of a [`ConversationTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    Human,
    Assistant,
}

/// One entry of a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    /// 1-based; a human turn and its assistant reply share the number.
    pub turn: u32,
}

/// Counts over a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total: usize,
    pub user_messages: usize,
    pub agent_messages: usize,
    pub turns: u32,
}

/// The ordered transcript of completed exchanges for one agent identity.
///
/// Only grows through [`ConversationSession::push_exchange`]; cleared with
/// [`ConversationSession::clear`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationSession {
    turns: Vec<ConversationTurn>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed exchange as a human/assistant pair.
    pub fn push_exchange(&mut self, human: impl Into<String>, assistant: impl Into<String>) {
        let turn = self.last_turn() + 1;
        self.turns.push(ConversationTurn {
            role: TurnRole::Human,
            content: human.into(),
            turn,
        });
        self.turns.push(ConversationTurn {
            role: TurnRole::Assistant,
            content: assistant.into(),
            turn,
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Number of the most recent human turn (0 when empty).
    pub fn last_turn(&self) -> u32 {
        self.turns.last().map(|t| t.turn).unwrap_or(0)
    }

    pub fn summary(&self) -> HistorySummary {
        let user_messages = self
            .turns
            .iter()
            .filter(|t| t.role == TurnRole::Human)
            .count();
        HistorySummary {
            total: self.turns.len(),
            user_messages,
            agent_messages: self.turns.len() - user_messages,
            turns: self.last_turn(),
        }
    }

    /// Render the transcript as plain text, one block per entry.
    pub fn transcript(&self) -> String {
        let rule = "-".repeat(80);
        let mut out = format!(
            "{}\nCONVERSATION HISTORY ({} messages)\n{}\n",
            "=".repeat(80),
            self.turns.len(),
            "=".repeat(80)
        );
        for t in &self.turns {
            let who = match t.role {
                TurnRole::Human => "USER",
                TurnRole::Assistant => "AGENT",
            };
            out.push_str(&format!("\n[Turn {}] {who}:\n{}\n{rule}\n", t.turn, t.content));
        }
        out
    }
}
