//! Free-text skill name extraction.

use regex::Regex;
use std::sync::LazyLock;

static SKILLS_NEEDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[SKILLS NEEDED:\s*([^\]]+)\]").expect("Failed to compile skills-needed regex")
});

static NEED_THE_SKILL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:need|require|use).*?the\s+([a-z\-]+)\s+skill")
        .expect("Failed to compile need-the-skill regex")
});

/// Skill names declared in a free-text reply.
///
/// A `[SKILLS NEEDED: a, b]` block wins when present. Otherwise phrases like
/// "I need the number-reading skill" are collected, deduplicated in
/// first-seen order.
pub fn extract_required_skills(reply: &str) -> Vec<String> {
    if let Some(caps) = SKILLS_NEEDED.captures(reply) {
        return caps[1]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    let mut names: Vec<String> = Vec::new();
    for caps in NEED_THE_SKILL.captures_iter(reply) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
