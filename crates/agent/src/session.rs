//! The session controller.
//!
//! One controller drives one agent identity: it composes each request,
//! keeps a provider-side message thread per [`SessionId`], trims that
//! thread before every call, and recovers from context overflow by halving
//! the user text and retrying on a fresh identity.

use skilleval_config::{AppConfig, SessionConfig};
use skilleval_core::error::{ProviderError, SessionError};
use skilleval_core::message::{ConversationSession, Message, Role, SessionId};
use skilleval_core::provider::{Provider, ProviderRequest, ProviderResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::trimmer::trim_messages;

/// Per-call overrides for [`SessionController::exchange_with`].
#[derive(Debug, Clone, Default)]
pub struct ExchangeOptions {
    /// Run the call on this identity instead of the controller's own.
    pub session_id: Option<SessionId>,

    /// Record (or skip recording) this exchange regardless of
    /// `SessionConfig::track_history`.
    pub track_history: Option<bool>,
}

impl ExchangeOptions {
    pub fn without_history() -> Self {
        Self {
            session_id: None,
            track_history: Some(false),
        }
    }
}

/// Drives conversational requests against one provider.
pub struct SessionController {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    config: SessionConfig,
    session_id: SessionId,
    threads: HashMap<SessionId, Vec<Message>>,
    history: ConversationSession,
}

impl SessionController {
    /// Create a controller on a fresh session identity.
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: None,
            max_tokens: None,
            config,
            session_id: SessionId::new(),
            threads: HashMap::new(),
            history: ConversationSession::new(),
        }
    }

    /// Create a controller using the model, sampling and session settings
    /// of an [`AppConfig`].
    pub fn from_config(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        let mut controller = Self::new(provider, &config.default_model, config.session.clone());
        controller.temperature = config.temperature;
        controller.max_tokens = config.max_tokens;
        controller
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Toggle the message window trimmer.
    pub fn with_trimming(mut self, enabled: bool) -> Self {
        self.config.trim_messages = enabled;
        self
    }

    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = session_id;
        self
    }

    /// The identity used by calls without an explicit override.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The system prompt used when a call does not supply one.
    pub fn system_prompt(&self) -> &str {
        &self.config.system_prompt
    }

    pub fn history(&self) -> &ConversationSession {
        &self.history
    }

    /// The provider-side thread stored for an identity.
    pub fn thread(&self, session_id: &SessionId) -> &[Message] {
        self.threads
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Send one user turn using the controller's identity and history
    /// setting. `system` falls back to the configured system prompt.
    pub async fn exchange(
        &mut self,
        user: &str,
        system: Option<&str>,
    ) -> Result<String, SessionError> {
        self.exchange_with(user, system, ExchangeOptions::default())
            .await
    }

    /// Send one user turn with per-call overrides.
    ///
    /// On [`ProviderError::ContextLengthExceeded`] the user text is cut to
    /// its first half (by characters) and the call retried, up to
    /// `max_truncation_retries` times. Any other provider fault is returned
    /// unchanged after the first failure.
    pub async fn exchange_with(
        &mut self,
        user: &str,
        system: Option<&str>,
        options: ExchangeOptions,
    ) -> Result<String, SessionError> {
        let system = system.unwrap_or(&self.config.system_prompt).to_string();
        let own_identity = options.session_id.is_none();
        let requested = options
            .session_id
            .unwrap_or_else(|| self.session_id.clone());
        let mut session_id = requested.clone();

        let mut current = user.to_string();
        let mut attempt: u32 = 0;

        let response = loop {
            attempt += 1;
            let length = current.chars().count();
            debug!(session_id = %session_id, attempt, length, "Model call");

            match self.call(&session_id, &system, &current).await {
                Ok(text) => break text,
                Err(e) if e.is_context_overflow() => {
                    if attempt > self.config.max_truncation_retries {
                        warn!(
                            session_id = %session_id,
                            attempts = attempt,
                            length,
                            "Context length still exceeded after max retries"
                        );
                        return Err(SessionError::ContextOverflow {
                            attempts: attempt,
                            last_length: length,
                        });
                    }

                    current = current.chars().take(length / 2).collect();
                    warn!(
                        session_id = %session_id,
                        attempt,
                        from = length,
                        to = length / 2,
                        "Context length exceeded, truncating user input"
                    );

                    if self.config.rotate_session_on_retry {
                        let fresh = SessionId::new();
                        if own_identity {
                            self.threads.remove(&session_id);
                            self.session_id = fresh.clone();
                        }
                        session_id = fresh;
                    }
                }
                Err(e) => return Err(SessionError::Provider(e)),
            }
        };

        // The caller cannot name a rotated explicit identity, so its thread is not kept.
        if !own_identity && session_id != requested {
            self.threads.remove(&session_id);
        }

        if options.track_history.unwrap_or(self.config.track_history) {
            self.history.push_exchange(user, response.as_str());
        }

        Ok(response)
    }

    /// Record an exchange that was driven outside [`Self::exchange`].
    pub fn record_exchange(&mut self, human: &str, assistant: &str) {
        if self.config.track_history {
            self.history.push_exchange(human, assistant);
        }
    }

    /// Clear the transcript and start over on a fresh identity.
    pub fn reset(&mut self) {
        self.history.clear();
        self.threads.clear();
        self.session_id = SessionId::new();
        debug!(session_id = %self.session_id, "Session reset");
    }

    fn compose(&self, system: &str, user: &str) -> Vec<Message> {
        if self.config.combine_system_and_user {
            vec![Message::user(format!("{system}{user}"))]
        } else {
            vec![Message::system(system), Message::user(user)]
        }
    }

    /// One provider call on `session_id`'s thread. The stored thread only
    /// changes when the call succeeds.
    async fn call(
        &mut self,
        session_id: &SessionId,
        system: &str,
        user: &str,
    ) -> Result<String, ProviderError> {
        let mut thread = self.thread(session_id).to_vec();
        thread.extend(self.compose(system, user));
        if self.config.trim_messages {
            thread = trim_messages(&thread);
        }

        let request = ProviderRequest {
            model: self.model.clone(),
            messages: thread.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            session_id: session_id.clone(),
        };

        let response = self.provider.complete(request).await?;
        let text = response_text(&response);

        thread.push(response.message);
        self.threads.insert(session_id.clone(), thread);
        Ok(text)
    }
}

/// The assistant's text, or the whole response as JSON when the provider
/// returned something other than an assistant message.
fn response_text(response: &ProviderResponse) -> String {
    match response.message.role {
        Role::Assistant => response.message.content.clone(),
        _ => serde_json::to_string(response).unwrap_or_else(|_| response.message.content.clone()),
    }
}
