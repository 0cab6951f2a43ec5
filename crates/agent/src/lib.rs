//! The skill orchestration engine.
//!
//! - [`SessionController`]: one agent identity talking to a provider, with
//!   window trimming and truncation retry on context overflow
//! - [`DiscoveryLoop`]: selection, bounded discovery rounds, execution
//! - [`run_declared_skills`]: the single-pass declared-skill variant
//! - [`reply`]: parsing of structured model replies

pub mod declared;
pub mod discovery;
pub mod heuristics;
pub mod reply;
pub mod session;
pub mod trimmer;

#[cfg(test)]
mod test_helpers;

pub use declared::{DeclaredSkillsOutcome, build_enriched_prompt, run_declared_skills};
pub use discovery::{
    DefaultPrompts, DiscoveryLoop, DiscoveryOutcome, DiscoveryPrompts, DiscoveryState,
};
pub use heuristics::extract_required_skills;
pub use reply::{parse_answer, parse_selection, parse_skill_names};
pub use session::{ExchangeOptions, SessionController};
pub use trimmer::trim_messages;
