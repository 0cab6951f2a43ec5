//! Prompt-ready renderings of a skill roster.

use skilleval_core::skill::SkillMetadata;

/// One `- **name**: description` line per skill, for the selection prompt.
pub fn render_roster(skills: &[SkillMetadata]) -> String {
    skills
        .iter()
        .map(|s| format!("- **{}**: {}", s.name, s.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every skill with its full body, for prompts that inline the whole roster.
pub fn render_full_context(skills: &[SkillMetadata]) -> String {
    let mut out =
        String::from("The following are skills information you can use as a reference for user request:\n");
    for skill in skills {
        out.push_str(&format!(
            "- **{}**:\n {}\n {}\n",
            skill.name, skill.description, skill.body
        ));
    }
    out
}
