//! Configuration loading, validation, and management for SkillEval.
//!
//! Loads configuration from `~/.skilleval/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.skilleval/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key (can be overridden per-provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default LLM provider
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Default model
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Sampling temperature; left to the provider when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Max tokens per LLM response; left to the provider when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Provider-specific configurations
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    /// Session controller behavior
    #[serde(default)]
    pub session: SessionConfig,

    /// Skill discovery loop settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Evaluation run settings
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

fn default_provider() -> String {
    "openai".into()
}
fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_true() -> bool {
    true
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("default_provider", &self.default_provider)
            .field("default_model", &self.default_model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("providers", &self.providers)
            .field("session", &self.session)
            .field("discovery", &self.discovery)
            .field("evaluation", &self.evaluation)
            .finish()
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("default_model", &self.default_model)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

/// How a session controller talks to its provider.
///
/// These flags are chosen by the operator per endpoint; nothing is inferred
/// from the model name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// System prompt used when a call does not supply its own
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Record completed exchanges in the session transcript
    #[serde(default = "default_true")]
    pub track_history: bool,

    /// Run the message window trimmer before every model call
    #[serde(default = "default_true")]
    pub trim_messages: bool,

    /// Send system and user text as one user message (for endpoints that
    /// reject separate system blocks)
    #[serde(default)]
    pub combine_system_and_user: bool,

    /// Start a fresh session identity on every truncation retry
    #[serde(default = "default_true")]
    pub rotate_session_on_retry: bool,

    /// Truncation retries after the first context-overflow fault
    #[serde(default = "default_max_truncation_retries")]
    pub max_truncation_retries: u32,
}

fn default_system_prompt() -> String {
    "You are a helpful assistant that can use skills to solve tasks.".into()
}
fn default_max_truncation_retries() -> u32 {
    5
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            track_history: true,
            trim_messages: true,
            combine_system_and_user: false,
            rotate_session_on_retry: true,
            max_truncation_retries: default_max_truncation_retries(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Hard cap on discovery rounds per task
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,

    /// Skill whose selection is reported as `hit_target_skill`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_skill: Option<String>,
}

fn default_max_rounds() -> u32 {
    10
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
            target_skill: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Label extractor: "sentiment", "xbrl_tag" or "yes_no"
    #[serde(default = "default_task")]
    pub task: String,

    /// Directory holding one sub-directory per skill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_dir: Option<String>,
}

fn default_task() -> String {
    "xbrl_tag".into()
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            task: default_task(),
            skills_dir: None,
        }
    }
}

const KNOWN_TASKS: &[&str] = &["sentiment", "xbrl_tag", "yes_no"];

impl AppConfig {
    /// Load configuration from the default path (~/.skilleval/config.toml).
    ///
    /// Also checks environment variables for API keys:
    /// - `SKILLEVAL_API_KEY` (highest priority)
    /// - `ANTHROPIC_API_KEY`
    /// - `OPENAI_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if config.api_key.is_none() {
            config.api_key = std::env::var("SKILLEVAL_API_KEY")
                .ok()
                .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(provider) = std::env::var("SKILLEVAL_PROVIDER") {
            config.default_provider = provider;
        }

        if let Ok(model) = std::env::var("SKILLEVAL_MODEL") {
            config.default_model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".skilleval")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::ValidationError(
                    "temperature must be between 0.0 and 2.0".into(),
                ));
            }
        }

        if self.session.max_truncation_retries > 16 {
            return Err(ConfigError::ValidationError(
                "session.max_truncation_retries must be at most 16".into(),
            ));
        }

        if self.discovery.max_rounds == 0 {
            return Err(ConfigError::ValidationError(
                "discovery.max_rounds must be at least 1".into(),
            ));
        }

        if !KNOWN_TASKS.contains(&self.evaluation.task.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "evaluation.task must be one of {KNOWN_TASKS:?}, got '{}'",
                self.evaluation.task
            )));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_provider: default_provider(),
            default_model: default_model(),
            temperature: None,
            max_tokens: None,
            providers: HashMap::new(),
            session: SessionConfig::default(),
            discovery: DiscoveryConfig::default(),
            evaluation: EvaluationConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
