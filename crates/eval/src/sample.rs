//! Evaluation inputs: task kinds, approaches and samples.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EvalError;
use crate::labels::{sentiment_label, xbrl_tag_label, yes_no_label};

/// Which classification task is being evaluated; selects the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Sentiment,
    XbrlTag,
    YesNo,
}

impl TaskKind {
    /// Extract this task's label from an answer.
    pub fn extract_label(&self, answer: &str) -> String {
        match self {
            Self::Sentiment => sentiment_label(answer),
            Self::XbrlTag => xbrl_tag_label(answer),
            Self::YesNo => yes_no_label(answer),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sentiment => "sentiment",
            Self::XbrlTag => "xbrl_tag",
            Self::YesNo => "yes_no",
        }
    }
}

impl FromStr for TaskKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sentiment" => Ok(Self::Sentiment),
            "xbrl_tag" | "xbrl" => Ok(Self::XbrlTag),
            "yes_no" | "yesno" => Ok(Self::YesNo),
            other => Err(EvalError::UnknownTask(other.to_string())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A context-augmentation strategy under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approach {
    /// Selection, discovery and execution with the loaded skills
    #[serde(rename = "agent_skill_based")]
    SkillBased,
    /// The task alone
    #[serde(rename = "agent_simple")]
    Simple,
    /// The task with every skill inlined
    #[serde(rename = "agent_skill_full_context")]
    FullContext,
}

impl Approach {
    pub const ALL: [Approach; 3] = [Self::SkillBased, Self::Simple, Self::FullContext];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkillBased => "agent_skill_based",
            Self::Simple => "agent_simple",
            Self::FullContext => "agent_skill_full_context",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labelled task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub index: usize,
    /// Ready task text sent to the model
    pub prompt: String,
    /// Ground-truth label
    pub label: String,
}

#[derive(Deserialize)]
struct SampleLine {
    #[serde(default)]
    index: Option<usize>,
    prompt: String,
    label: String,
}

/// Parse JSON-lines samples. Blank lines are skipped; a missing `index`
/// defaults to the sample's position.
pub fn parse_samples_jsonl(text: &str) -> Result<Vec<Sample>, EvalError> {
    let mut samples = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed: SampleLine =
            serde_json::from_str(line).map_err(|e| EvalError::Dataset {
                line: line_no + 1,
                reason: e.to_string(),
            })?;
        samples.push(Sample {
            index: parsed.index.unwrap_or(samples.len()),
            prompt: parsed.prompt,
            label: parsed.label,
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kind_from_config_strings() {
        assert_eq!("sentiment".parse::<TaskKind>().unwrap(), TaskKind::Sentiment);
        assert_eq!("xbrl_tag".parse::<TaskKind>().unwrap(), TaskKind::XbrlTag);
        assert_eq!("YES_NO".parse::<TaskKind>().unwrap(), TaskKind::YesNo);
        assert!(matches!(
            "ner".parse::<TaskKind>(),
            Err(EvalError::UnknownTask(_))
        ));
    }

    #[test]
    fn task_kind_extracts() {
        assert_eq!(TaskKind::Sentiment.extract_label("positive"), "positive");
        assert_eq!(TaskKind::YesNo.extract_label("yes"), "YES");
        assert_eq!(TaskKind::XbrlTag.extract_label("Revenues"), "Revenues");
    }

    #[test]
    fn approach_serializes_as_task_type() {
        assert_eq!(
            serde_json::to_string(&Approach::FullContext).unwrap(),
            "\"agent_skill_full_context\""
        );
        assert_eq!(Approach::SkillBased.to_string(), "agent_skill_based");
    }

    #[test]
    fn jsonl_samples() {
        let text = r#"{"index": 7, "prompt": "p1", "label": "Revenues"}

{"prompt": "p2", "label": "InterestExpense"}
"#;
        let samples = parse_samples_jsonl(text).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].index, 7);
        assert_eq!(samples[1].index, 1);
        assert_eq!(samples[1].label, "InterestExpense");
    }

    #[test]
    fn bad_jsonl_line_is_reported() {
        let err = parse_samples_jsonl("{\"prompt\": \"p\"}\n").unwrap_err();
        assert!(matches!(err, EvalError::Dataset { line: 1, .. }));
    }
}
