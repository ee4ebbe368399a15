use serde::Serialize;

use super::session::QuizState;

/// Aggregated view of quiz progress, useful for enabling the submit action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub state: QuizState,
}

impl SessionProgress {
    /// True when every question has an answer and the quiz can be submitted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == QuizState::FullyAnswered
    }
}
