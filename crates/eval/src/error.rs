//! Evaluation errors.

use skilleval_core::error::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Unknown task '{0}', expected sentiment, xbrl_tag or yes_no")]
    UnknownTask(String),

    #[error("Invalid sample on line {line}: {reason}")]
    Dataset { line: usize, reason: String },

    #[error(transparent)]
    Session(#[from] SessionError),
}
