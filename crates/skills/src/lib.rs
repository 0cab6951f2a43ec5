//! Skill storage collaborators for SkillEval.
//!
//! - [`InMemorySkillRepository`]: the [`SkillRepository`] used by the CLI and tests
//! - [`render_roster`] / [`render_full_context`]: prompt-ready listings
//! - [`load_skills_dir`]: reads a directory of `SKILL.md` files
//!
//! [`SkillRepository`]: skilleval_core::SkillRepository

pub mod loader;
pub mod render;
pub mod repository;

pub use loader::{load_skills_dir, parse_skill_md};
pub use render::{render_full_context, render_roster};
pub use repository::InMemorySkillRepository;
