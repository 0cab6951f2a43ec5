//! `SKILL.md` directory loader.
//!
//! A skills directory holds one sub-directory per skill, each with a
//! `SKILL.md` file: YAML frontmatter between `---` lines, then a Markdown
//! body.

use serde::Deserialize;
use skilleval_core::error::SkillError;
use skilleval_core::skill::SkillMetadata;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SKILL_FILE: &str = "SKILL.md";

#[derive(Debug, Deserialize)]
struct Frontmatter {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    compatibility: Option<String>,
    #[serde(default, rename = "allowed-tools")]
    allowed_tools: Option<String>,
    #[serde(default)]
    metadata: BTreeMap<String, serde_yaml::Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

/// Load every valid skill under `dir`, sorted by sub-directory name.
///
/// Sub-directories without a `SKILL.md`, and skills that fail to read or
/// parse, are skipped.
pub fn load_skills_dir(dir: &Path) -> Result<Vec<SkillMetadata>, SkillError> {
    if !dir.is_dir() {
        return Err(SkillError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| SkillError::Read {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut skill_dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir() && p.join(SKILL_FILE).is_file())
        .collect();
    skill_dirs.sort();

    let mut skills = Vec::with_capacity(skill_dirs.len());
    for skill_dir in skill_dirs {
        match load_skill(&skill_dir) {
            Ok(skill) => skills.push(skill),
            Err(e) => warn!(dir = %skill_dir.display(), error = %e, "Skipping skill"),
        }
    }

    debug!(dir = %dir.display(), count = skills.len(), "Loaded skills");
    Ok(skills)
}

fn load_skill(skill_dir: &Path) -> Result<SkillMetadata, SkillError> {
    let path = skill_dir.join(SKILL_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| SkillError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let mut skill = parse_skill_md(&content, &path)?;
    skill.path = skill_dir.to_path_buf();
    Ok(skill)
}

/// Parse the contents of one `SKILL.md`.
pub fn parse_skill_md(content: &str, path: &Path) -> Result<SkillMetadata, SkillError> {
    let (frontmatter, body) = split_frontmatter(content)?;
    let fm: Frontmatter = serde_yaml::from_str(frontmatter).map_err(|e| SkillError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if fm.name.trim().is_empty() {
        return Err(SkillError::Validation("name is required".into()));
    }
    if fm.description.trim().is_empty() {
        return Err(SkillError::Validation(format!(
            "description is required for '{}'",
            fm.name
        )));
    }

    let allowed_tools = fm
        .allowed_tools
        .map(|s| s.split_whitespace().map(String::from).collect())
        .unwrap_or_default();

    let metadata = fm
        .metadata
        .into_iter()
        .chain(fm.extra)
        .map(|(k, v)| (k, yaml_to_string(v)))
        .collect();

    Ok(SkillMetadata {
        name: fm.name.trim().to_string(),
        description: fm.description.trim().to_string(),
        body: body.trim().to_string(),
        license: fm.license,
        compatibility: fm.compatibility,
        allowed_tools,
        metadata,
        path: path.to_path_buf(),
    })
}

fn split_frontmatter(content: &str) -> Result<(&str, &str), SkillError> {
    let content = content.trim_start_matches('\u{feff}').trim();

    let rest = content.strip_prefix("---").ok_or_else(|| {
        SkillError::Validation("SKILL.md must start with YAML frontmatter (---)".into())
    })?;

    let end = rest
        .find("\n---")
        .ok_or_else(|| SkillError::Validation("Missing closing --- for frontmatter".into()))?;

    Ok((rest[..end].trim(), &rest[end + 4..]))
}

fn yaml_to_string(value: serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s,
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
