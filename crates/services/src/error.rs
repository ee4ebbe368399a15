//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionId;
use storage::repository::StorageError;

/// Errors emitted while starting a quiz.
///
/// Both variants are shown to the user as a failed load; nothing is retried
/// until a new quiz is requested.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("question bank unavailable: {0}")]
    BankUnavailable(#[from] StorageError),
    #[error("question bank has no questions")]
    EmptyBank,
}

/// Errors emitted by quiz session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz already finalized")]
    Finalized,
    #[error("question {id} is not part of this quiz")]
    UnknownQuestion { id: QuestionId },
    #[error("{option:?} is not an option of question {id}")]
    OptionNotOffered { id: QuestionId, option: String },
    #[error("{missing} question(s) still unanswered")]
    Incomplete { missing: usize },
}
