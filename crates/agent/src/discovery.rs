//! The skill discovery loop.
//!
//! A task runs in three phases over two sessions:
//!
//! 1. **Selection**: the selector session picks skills from the roster.
//! 2. **Discovery**: the executor session is shown the loaded skills and
//!    may ask for more; repeated until it asks for none or the round cap
//!    is reached.
//! 3. **Execution**: the executor session answers the task with every
//!    loaded skill in its system prompt.

use serde::{Deserialize, Serialize};
use skilleval_config::DiscoveryConfig;
use skilleval_core::error::SessionError;
use skilleval_core::skill::{SkillMetadata, SkillRepository};
use skilleval_skills::render_roster;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::reply::{parse_answer, parse_selection};
use crate::session::SessionController;

/// Placeholder substituted with the roster or the execution context.
pub const SKILL_CONTEXT: &str = "{SKILL_CONTEXT}";

/// Ready prompt strings for each phase.
pub trait DiscoveryPrompts: Send + Sync {
    /// System prompt for selection, given the rendered roster.
    fn selection(&self, roster: &str) -> String;

    /// User prompt for a discovery round, given the execution context.
    fn discovery(&self, execution_context: &str) -> String;

    /// System prompt for execution, given the execution context.
    fn execution(&self, execution_context: &str) -> String;

    /// System prompt for discovery rounds and for calls without skills.
    fn default_system(&self) -> String;
}

/// Prompt templates with a single `{SKILL_CONTEXT}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultPrompts {
    pub selection: String,
    pub discovery: String,
    pub execution: String,
    pub default_system: String,
}

impl Default for DefaultPrompts {
    fn default() -> Self {
        Self {
            selection: "You are a skill selector. The following skills are available:\n\n\
                {SKILL_CONTEXT}\n\n\
                Select the skills that help with the user's request. Respond only with a JSON \
                object of the form {\"skills\": [\"skill-name\", ...]}. Use an empty list when \
                no skill applies."
                .into(),
            discovery: "The following skills are loaded for the current task:\n\n\
                {SKILL_CONTEXT}\n\
                If these skills refer to other skills that are needed and not loaded yet, list \
                them. Respond only with a JSON object of the form {\"skills\": [\"skill-name\", \
                ...]}. Use an empty list when nothing else is needed."
                .into(),
            execution: "You are a helpful assistant. Use the following skills to solve the \
                user's request:\n\n\
                {SKILL_CONTEXT}\n\
                Respond only with a JSON object of the form {\"message\": \"<your answer>\"}."
                .into(),
            default_system: "You are a helpful assistant. Respond only with a JSON object of \
                the form {\"message\": \"<your answer>\"}."
                .into(),
        }
    }
}

impl DiscoveryPrompts for DefaultPrompts {
    fn selection(&self, roster: &str) -> String {
        self.selection.replace(SKILL_CONTEXT, roster)
    }

    fn discovery(&self, execution_context: &str) -> String {
        self.discovery.replace(SKILL_CONTEXT, execution_context)
    }

    fn execution(&self, execution_context: &str) -> String {
        self.execution.replace(SKILL_CONTEXT, execution_context)
    }

    fn default_system(&self) -> String {
        self.default_system.clone()
    }
}

/// Working state of one task's discovery. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryState {
    /// The most recent selection
    pub selected: Vec<SkillMetadata>,
    pub execution_context: String,
    pub round_count: u32,
    pub total_skills_appended: usize,
}

impl DiscoveryState {
    /// Append one skill block tagged `Skill {n}:`.
    pub fn append(&mut self, skill: &SkillMetadata) {
        self.total_skills_appended += 1;
        self.execution_context.push_str(&format!(
            "Skill {}:\n{}\n{}\n\n",
            self.total_skills_appended,
            skill.description,
            skill.body_without_heading()
        ));
    }
}

/// Result of one task run through the loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryOutcome {
    /// Names chosen in the selection phase
    pub selected_skill_names: Vec<String>,
    /// Whether the configured target skill was among them
    pub hit_target_skill: bool,
    /// Skills appended during discovery rounds
    pub new_skills_discovered: usize,
    pub discovery_rounds: u32,
    /// The round cap stopped discovery before it converged
    pub truncated: bool,
    pub execution_context: String,
    /// Parsed answer of the execution phase
    pub answer: String,
    /// Unparsed execution reply
    pub raw_response: String,
}

/// Runs selection, discovery and execution for a task.
pub struct DiscoveryLoop {
    repository: Arc<dyn SkillRepository>,
    prompts: Arc<dyn DiscoveryPrompts>,
    max_rounds: u32,
    target_skill: Option<String>,
}

impl DiscoveryLoop {
    pub fn new(repository: Arc<dyn SkillRepository>, prompts: Arc<dyn DiscoveryPrompts>) -> Self {
        let defaults = DiscoveryConfig::default();
        Self {
            repository,
            prompts,
            max_rounds: defaults.max_rounds,
            target_skill: defaults.target_skill,
        }
    }

    pub fn from_config(
        repository: Arc<dyn SkillRepository>,
        prompts: Arc<dyn DiscoveryPrompts>,
        config: &DiscoveryConfig,
    ) -> Self {
        Self::new(repository, prompts)
            .with_max_rounds(config.max_rounds)
            .with_target_skill(config.target_skill.clone())
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_target_skill(mut self, target_skill: Option<String>) -> Self {
        self.target_skill = target_skill;
        self
    }

    pub fn repository(&self) -> &Arc<dyn SkillRepository> {
        &self.repository
    }

    pub fn prompts(&self) -> &Arc<dyn DiscoveryPrompts> {
        &self.prompts
    }

    /// Run the three phases for `task`.
    pub async fn run(
        &self,
        task: &str,
        selector: &mut SessionController,
        executor: &mut SessionController,
    ) -> Result<DiscoveryOutcome, SessionError> {
        let mut state = DiscoveryState::default();

        // Selection
        let roster = render_roster(&self.repository.skills());
        let reply = selector
            .exchange(task, Some(&self.prompts.selection(&roster)))
            .await?;
        state.selected = parse_selection(&reply, self.repository.as_ref());

        let selected_skill_names: Vec<String> =
            state.selected.iter().map(|s| s.name.clone()).collect();
        let hit_target_skill = self
            .target_skill
            .as_deref()
            .is_some_and(|target| state.selected.iter().any(|s| s.is_named(target)));

        for skill in state.selected.clone() {
            state.append(&skill);
        }
        let after_selection = state.total_skills_appended;
        debug!(selected = ?selected_skill_names, hit_target_skill, "Selection done");

        // Discovery
        let default_system = self.prompts.default_system();
        while !state.selected.is_empty() && state.round_count < self.max_rounds {
            let prompt = self.prompts.discovery(&state.execution_context);
            let reply = executor.exchange(&prompt, Some(&default_system)).await?;
            state.selected = parse_selection(&reply, self.repository.as_ref());

            for skill in state.selected.clone() {
                state.append(&skill);
            }
            state.round_count += 1;
            debug!(
                round = state.round_count,
                found = state.selected.len(),
                "Discovery round"
            );
        }

        let truncated = !state.selected.is_empty();
        if truncated {
            warn!(
                max_rounds = self.max_rounds,
                pending = state.selected.len(),
                "Discovery round cap reached, executing with skills found so far"
            );
        }

        // Execution
        let system = self.prompts.execution(&state.execution_context);
        let raw_response = executor.exchange(task, Some(&system)).await?;
        let answer = parse_answer(&raw_response);

        let outcome = DiscoveryOutcome {
            selected_skill_names,
            hit_target_skill,
            new_skills_discovered: state.total_skills_appended - after_selection,
            discovery_rounds: state.round_count,
            truncated,
            execution_context: state.execution_context,
            answer,
            raw_response,
        };

        info!(
            rounds = outcome.discovery_rounds,
            new_skills = outcome.new_skills_discovered,
            truncated = outcome.truncated,
            "Skill discovery finished"
        );
        Ok(outcome)
    }
}
