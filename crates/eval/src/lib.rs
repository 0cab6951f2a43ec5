//! # SkillEval Eval
//!
//! Runs each evaluation sample through the three context-augmentation
//! approaches and turns the answers into labelled records.

pub mod error;
pub mod evaluator;
pub mod labels;
pub mod record;
pub mod sample;
pub mod xbrl;

#[cfg(test)]
mod test_helpers;

pub use error::EvalError;
pub use evaluator::Evaluator;
pub use labels::{
    TagMatcher, UNKNOWN, sentiment_label, xbrl_tag_label, yes_no_label, yes_no_label_loose,
};
pub use record::{AccuracySummary, EvaluationRecord, accuracy, is_correct};
pub use sample::{Approach, Sample, TaskKind, parse_samples_jsonl};
pub use xbrl::XBRL_TAGS;
