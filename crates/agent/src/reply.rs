//! Parsing of structured model replies.
//!
//! Skill selection and discovery replies carry a JSON object with a
//! `"skills"` list. Final answers carry a JSON object with a `"message"`
//! (or similar) field. Models wrap both in code fences often enough that
//! fences are stripped before parsing.

use serde_json::{Map, Value};
use skilleval_core::error::ReplyError;
use skilleval_core::skill::{SkillMetadata, SkillRepository};
use tracing::debug;

const ANSWER_FIELDS: &[&str] = &["message", "Message", "reasoning", "response"];

/// Strip surrounding whitespace and an enclosing Markdown code fence.
pub fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with(['{', '[']) => body.trim(),
        _ => inner.trim(),
    }
}

/// Parse a reply as a JSON object.
pub fn parse_reply_object(reply: &str) -> Result<Map<String, Value>, ReplyError> {
    let value: Value = serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| ReplyError::InvalidJson(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ReplyError::NotAnObject),
    }
}

/// Skill names from a selection or discovery reply.
///
/// Reads `"skills"`, falling back to `"Skills"` when the former is missing
/// or empty. Entries that are not strings are ignored.
pub fn parse_skill_names(reply: &str) -> Result<Vec<String>, ReplyError> {
    let obj = parse_reply_object(reply)?;

    let list = non_empty_array(obj.get("skills")).or_else(|| non_empty_array(obj.get("Skills")));

    Ok(list
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default())
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => Some(items),
        _ => None,
    }
}

/// Like [`parse_skill_names`], but a malformed reply selects nothing.
pub fn selected_skill_names(reply: &str) -> Vec<String> {
    parse_skill_names(reply).unwrap_or_else(|e| {
        debug!(error = %e, "Unparseable skill reply, treating as empty selection");
        Vec::new()
    })
}

/// Resolve names through the repository in reply order; misses are skipped.
pub fn resolve_skills(names: &[String], repository: &dyn SkillRepository) -> Vec<SkillMetadata> {
    names
        .iter()
        .filter_map(|name| repository.lookup(name))
        .collect()
}

/// Parse a selection reply and resolve it in one step.
pub fn parse_selection(reply: &str, repository: &dyn SkillRepository) -> Vec<SkillMetadata> {
    resolve_skills(&selected_skill_names(reply), repository)
}

/// The answer text of a final reply.
///
/// The first truthy field among `message`, `Message`, `reasoning` and
/// `response`, stringified and trimmed. An object without any of them
/// yields an empty string. A reply that is not a JSON object is returned
/// trimmed, as is.
pub fn parse_answer(reply: &str) -> String {
    let Ok(obj) = parse_reply_object(reply) else {
        return reply.trim().to_string();
    };

    ANSWER_FIELDS
        .iter()
        .filter_map(|field| obj.get(*field))
        .find(|v| is_truthy(v))
        .map(|v| match v {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        })
        .unwrap_or_default()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Skills whose name occurs anywhere in free text, ignoring case.
pub fn mentioned_skills(text: &str, skills: &[SkillMetadata]) -> Vec<SkillMetadata> {
    let haystack = text.to_lowercase();
    skills
        .iter()
        .filter(|s| haystack.contains(&s.name.to_lowercase()))
        .cloned()
        .collect()
}
