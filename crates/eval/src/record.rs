//! Evaluation result records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skilleval_core::message::ConversationTurn;

use crate::sample::Approach;

/// The outcome of one approach on one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub index: usize,
    pub prompt: String,
    pub true_label: String,
    pub predicted_label: String,
    /// Parsed answer text the label was extracted from
    pub raw_response: String,
    /// The true label occurs in the answer, ignoring case
    pub correct: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_skills_step1: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_target_skill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_skills_discovered: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_truncated: Option<bool>,

    pub elapsed_seconds: f64,
    pub model: String,
    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_history_agent_skill_select: Option<Vec<ConversationTurn>>,
    #[serde(default)]
    pub chat_history_agent_exec: Vec<ConversationTurn>,

    pub task_type: Approach,

    /// Set when the approach could not finish for this sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Whether `answer` contains `true_label`, ignoring case.
pub fn is_correct(true_label: &str, answer: &str) -> bool {
    answer
        .trim()
        .to_lowercase()
        .contains(&true_label.to_lowercase())
}

/// Correctness totals for one approach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub approach: Approach,
    pub total: usize,
    pub correct: usize,
    pub failed: usize,
}

impl AccuracySummary {
    /// Fraction correct, or `None` without records.
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

/// Summarise the records of one approach.
pub fn accuracy(records: &[EvaluationRecord], approach: Approach) -> AccuracySummary {
    let mine = records.iter().filter(|r| r.task_type == approach);
    let (mut total, mut correct, mut failed) = (0, 0, 0);
    for record in mine {
        total += 1;
        if record.correct {
            correct += 1;
        }
        if record.error.is_some() {
            failed += 1;
        }
    }
    AccuracySummary {
        approach,
        total,
        correct,
        failed,
    }
}
