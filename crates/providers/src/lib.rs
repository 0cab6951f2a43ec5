//! LLM Provider implementations for SkillEval.
//!
//! All providers implement the `skilleval_core::Provider` trait.
//! The router selects the correct provider based on configuration.

pub mod anthropic;
pub mod fault;
pub mod openai_compat;
pub mod router;

pub use anthropic::AnthropicProvider;
pub use fault::{classify_status, is_context_overflow_message};
pub use openai_compat::OpenAiCompatProvider;
pub use router::{ProviderRouter, build_from_config, is_local};
