//! In-memory skill repository.

use skilleval_core::skill::{SkillMetadata, SkillRepository};
use std::collections::HashMap;
use tracing::debug;

/// Skills held in memory, looked up by lowercased name.
///
/// The roster order is the order the skills were supplied in. Later skills
/// whose name collides (ignoring case) with an earlier one are dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemorySkillRepository {
    skills: Vec<SkillMetadata>,
    index: HashMap<String, usize>,
}

impl InMemorySkillRepository {
    pub fn new(skills: Vec<SkillMetadata>) -> Self {
        let mut repo = Self::default();
        for skill in skills {
            let key = skill.name.to_lowercase();
            if repo.index.contains_key(&key) {
                debug!(name = %skill.name, "Duplicate skill name ignored");
                continue;
            }
            repo.index.insert(key, repo.skills.len());
            repo.skills.push(skill);
        }
        repo
    }

    /// Borrowing view of the roster.
    pub fn as_slice(&self) -> &[SkillMetadata] {
        &self.skills
    }
}

impl SkillRepository for InMemorySkillRepository {
    fn lookup(&self, name: &str) -> Option<SkillMetadata> {
        let found = self
            .index
            .get(&name.trim().to_lowercase())
            .map(|&i| self.skills[i].clone());
        if found.is_none() {
            debug!(name, "Skill not found");
        }
        found
    }

    fn skills(&self) -> Vec<SkillMetadata> {
        self.skills.clone()
    }

    fn len(&self) -> usize {
        self.skills.len()
    }
}
