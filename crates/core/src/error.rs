//! Error types for the SkillEval domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all SkillEval operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Session errors ---
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    // --- Skill errors ---
    #[error("Skill error: {0}")]
    Skill(#[from] SkillError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// The submitted conversation exceeds the model's input capacity.
    #[error("Context length exceeded: {0}")]
    ContextLengthExceeded(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl ProviderError {
    /// Whether this fault is a context-overflow the session can recover from.
    pub fn is_context_overflow(&self) -> bool {
        matches!(self, Self::ContextLengthExceeded(_))
    }
}

/// Failures surfaced by a session exchange.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Every truncation retry still overflowed the model context.
    #[error("Context overflow after {attempts} attempts (last input length: {last_length} chars)")]
    ContextOverflow { attempts: u32, last_length: usize },

    /// Any other provider fault, passed through unchanged.
    #[error(transparent)]
    Provider(ProviderError),
}

impl SessionError {
    pub fn is_context_overflow(&self) -> bool {
        matches!(self, Self::ContextOverflow { .. })
    }
}

/// A structured model reply could not be parsed.
///
/// Never escapes the reply parsers' callers: they fall back to an empty
/// selection or to the raw text.
#[derive(Debug, Clone, Error)]
pub enum ReplyError {
    #[error("Reply is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Reply is not a JSON object")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Skills directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid skill: {0}")]
    Validation(String),
}
