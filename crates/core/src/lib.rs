//! # SkillEval Core
//!
//! Domain types, traits, and error definitions for the SkillEval agent
//! evaluation engine. This crate has **no runtime or HTTP dependencies**; it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator is defined as a trait here (LLM backends,
//! skill storage). Implementations live in their respective crates, which
//! keeps the orchestration engine testable with scripted stand-ins.

pub mod error;
pub mod message;
pub mod provider;
pub mod skill;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, ReplyError, Result, SessionError, SkillError};
pub use message::{
    ConversationSession, ConversationTurn, HistorySummary, Message, Role, SessionId, TurnRole,
};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use skill::{SkillMetadata, SkillRepository};
