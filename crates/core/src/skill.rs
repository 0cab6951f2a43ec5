//! Skill domain types and the repository seam.
//!
//! A skill is a named bundle of description and instructional body that can
//! be injected as extra context for a task. The engine only ever reads skills
//! through [`SkillRepository`]; how they are stored is the implementor's
//! business.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Metadata and content of one skill. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMetadata {
    /// Unique name, compared case-insensitively
    pub name: String,

    /// One-line summary shown in the selection roster
    pub description: String,

    /// Full instructional body (Markdown)
    #[serde(default)]
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_tools: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    /// Where the skill was loaded from, for display only
    #[serde(default)]
    pub path: PathBuf,
}

impl SkillMetadata {
    /// Create a skill with just a name, description and body.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            body: body.into(),
            license: None,
            compatibility: None,
            allowed_tools: Vec::new(),
            metadata: BTreeMap::new(),
            path: PathBuf::new(),
        }
    }

    /// The body without its first line, which is usually a redundant heading.
    pub fn body_without_heading(&self) -> &str {
        match self.body.split_once('\n') {
            Some((_, rest)) => rest,
            None => "",
        }
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Read-only lookup of skills by name.
///
/// Implementations must be safe to share between sessions (`Arc<dyn
/// SkillRepository>`) and must not change after loading.
pub trait SkillRepository: Send + Sync {
    /// Find a skill by name, ignoring case.
    fn lookup(&self, name: &str) -> Option<SkillMetadata>;

    /// Every skill, in roster order.
    fn skills(&self) -> Vec<SkillMetadata>;

    fn len(&self) -> usize {
        self.skills().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_heading_is_dropped() {
        let skill = SkillMetadata::new("a", "desc", "# Heading\nline one\nline two");
        assert_eq!(skill.body_without_heading(), "line one\nline two");
    }

    #[test]
    fn single_line_body_drops_to_empty() {
        let skill = SkillMetadata::new("a", "desc", "# Only heading");
        assert_eq!(skill.body_without_heading(), "");
    }

    #[test]
    fn names_compare_case_insensitively() {
        let skill = SkillMetadata::new("XBRL-tag-classification", "d", "");
        assert!(skill.is_named("xbrl-TAG-classification"));
        assert!(!skill.is_named("xbrl"));
    }
}
