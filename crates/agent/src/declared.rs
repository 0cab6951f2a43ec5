//! The declared-skill loop.
//!
//! A single-pass alternative to discovery: the model names the skills it
//! wants in free text, the named skills are inlined into the task, and the
//! enriched task is solved in one more call.

use serde::{Deserialize, Serialize};
use skilleval_core::error::SessionError;
use skilleval_core::skill::{SkillMetadata, SkillRepository};
use tracing::debug;

use crate::heuristics::extract_required_skills;
use crate::reply::resolve_skills;
use crate::session::{ExchangeOptions, SessionController};

/// Result of [`run_declared_skills`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclaredSkillsOutcome {
    /// Names as the model declared them
    pub required_skills: Vec<String>,
    /// The declared skills that exist in the repository
    pub loaded_skills: Vec<SkillMetadata>,
    pub response: String,
}

/// The declaration request for `task`.
pub fn declaration_prompt(task: &str) -> String {
    format!(
        "Analyze this task and declare which skills you need:\n\n\
         Task: {task}\n\n\
         Respond with: [SKILLS NEEDED: skill1, skill2, ...]"
    )
}

/// The task with the loaded skills inlined after it.
pub fn build_enriched_prompt(task: &str, skills: &[SkillMetadata]) -> String {
    let mut prompt = format!("Task: {task}\n\n");
    if skills.is_empty() {
        return prompt;
    }

    let rule = "=".repeat(80);
    prompt.push_str(&format!("{rule}\nRELEVANT SKILLS CONTEXT:\n{rule}\n"));
    for skill in skills {
        prompt.push_str(&format!("\n[SKILL: {}]\n", skill.name));
        prompt.push_str(&format!("Description: {}\n", skill.description));
        if !skill.body.is_empty() {
            prompt.push_str(&format!("Content:\n{}\n", skill.body));
        }
        prompt.push_str(&"-".repeat(80));
        prompt.push('\n');
    }
    prompt
}

/// Ask for skills, load them, and solve the enriched task.
///
/// Only the original task and the final response enter the transcript.
pub async fn run_declared_skills(
    session: &mut SessionController,
    task: &str,
    repository: &dyn SkillRepository,
) -> Result<DeclaredSkillsOutcome, SessionError> {
    let declaration = session
        .exchange_with(&declaration_prompt(task), None, ExchangeOptions::without_history())
        .await?;

    let required_skills = extract_required_skills(&declaration);
    let loaded_skills = resolve_skills(&required_skills, repository);
    debug!(
        required = ?required_skills,
        loaded = loaded_skills.len(),
        "Declared skills"
    );

    let enriched = build_enriched_prompt(task, &loaded_skills);
    let response = session
        .exchange_with(&enriched, None, ExchangeOptions::without_history())
        .await?;

    session.record_exchange(task, &response);

    Ok(DeclaredSkillsOutcome {
        required_skills,
        loaded_skills,
        response,
    })
}
