//! Provider trait, the abstraction over LLM backends.
//!
//! A Provider knows how to send an ordered list of role-tagged messages to
//! an LLM and get the next assistant message back.
//!
//! Implementations: OpenAI-compatible (OpenAI, vLLM, Ollama, ...), Anthropic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::error::ProviderError;
use crate::message::{Message, SessionId};

/// Configuration for a provider request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The model to use (e.g., "gpt-4o-mini", "claude-3-5-sonnet-latest")
    pub model: String,

    /// The conversation messages
    pub messages: Vec<Message>,

    /// Sampling temperature; omitted from the wire request when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Session identity the messages belong to
    pub session_id: SessionId,
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The generated message
    pub message: Message,

    /// Token usage statistics
    pub usage: Option<Usage>,

    /// Which model actually responded (may differ from requested)
    pub model: String,

    /// Provider-specific metadata
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Provider trait.
///
/// The session controller calls `complete()` without knowing which backend
/// is behind it. Context-length failures must be reported as
/// [`ProviderError::ContextLengthExceeded`] so they can be retried.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openai", "anthropic").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(&self, request: ProviderRequest) -> std::result::Result<ProviderResponse, ProviderError>;

    /// List available models for this provider.
    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }

    /// Whether the provider is reachable.
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_sampling_fields_are_omitted() {
        let req = ProviderRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![Message::user("hi")],
            temperature: None,
            max_tokens: None,
            session_id: SessionId::from("1"),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["session_id"], "1");
    }

    #[test]
    fn response_serializes_message_role() {
        let resp = ProviderResponse {
            message: Message::assistant("hello"),
            usage: None,
            model: "m".into(),
            metadata: serde_json::Map::new(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""role":"assistant""#));
        assert!(json.contains("hello"));
    }
}
