use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;

use quiz_core::model::{
    Question, QuestionBank, QuestionId, QuestionReview, QuizResult, QuizSessionId, QuizSettings,
};
use quiz_core::scoring;
use quiz_core::selection::{OptionOrder, StratifiedSampler, randomize_options};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Where a quiz is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    Unanswered,
    PartiallyAnswered,
    FullyAnswered,
    Finalized,
}

#[derive(Debug, Clone, PartialEq)]
struct Finalized {
    at: DateTime<Utc>,
    result: QuizResult,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz run: the drawn questions, their option order and the answers so far.
///
/// A session is a value. Recording an answer or finalizing returns a new
/// session and leaves `self` as it was; starting a new quiz means building
/// a new session, never resetting an old one.
#[derive(Clone, PartialEq)]
pub struct QuizSession {
    id: QuizSessionId,
    questions: Vec<Question>,
    option_order: OptionOrder,
    answers: HashMap<QuestionId, String>,
    shortfall: usize,
    started_at: DateTime<Utc>,
    finalized: Option<Finalized>,
}

impl QuizSession {
    /// Draw a new quiz from `bank`.
    ///
    /// Questions are sampled per `settings` and every question's options are
    /// shuffled, all from the same generator.
    pub fn start<R: Rng + ?Sized>(
        bank: &QuestionBank,
        settings: &QuizSettings,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        let selection = StratifiedSampler::from_settings(settings).sample(bank.questions(), rng);
        let option_order = randomize_options(&selection.questions, rng);

        Self {
            id: QuizSessionId::new_random(),
            questions: selection.questions,
            option_order,
            answers: HashMap::new(),
            shortfall: selection.shortfall,
            started_at,
            finalized: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuizSessionId {
        self.id
    }

    /// Questions in presentation order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn option_order(&self) -> &OptionOrder {
        &self.option_order
    }

    /// Shuffled options for a question of this quiz.
    #[must_use]
    pub fn options_for(&self, id: &QuestionId) -> Option<&[String]> {
        self.option_order.get(id)
    }

    #[must_use]
    pub fn answers(&self) -> &HashMap<QuestionId, String> {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    /// Target slots the bank could not fill.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.shortfall
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        self.finalized.as_ref().map(|f| f.at)
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    /// Score of a finalized quiz.
    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.finalized.as_ref().map(|f| &f.result)
    }

    /// Per-question review, available once finalized.
    #[must_use]
    pub fn review(&self) -> Option<Vec<QuestionReview>> {
        self.finalized
            .as_ref()
            .map(|_| scoring::review(&self.questions, &self.answers))
    }

    /// Lifecycle state. A quiz with no questions counts as fully answered.
    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.is_finalized() {
            QuizState::Finalized
        } else if self.answers.len() == self.questions.len() {
            QuizState::FullyAnswered
        } else if self.answers.is_empty() {
            QuizState::Unanswered
        } else {
            QuizState::PartiallyAnswered
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.questions.len();
        let answered = self.answers.len();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            state: self.state(),
        }
    }

    /// Ids of questions without an answer, in presentation order.
    #[must_use]
    pub fn unanswered(&self) -> Vec<QuestionId> {
        self.questions
            .iter()
            .map(Question::id)
            .filter(|id| !self.answers.contains_key(*id))
            .cloned()
            .collect()
    }

    /// Record (or replace) the answer to one question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finalized` once the quiz is finalized,
    /// `SessionError::UnknownQuestion` if the id is not in this quiz and
    /// `SessionError::OptionNotOffered` if `option` is not one of its options.
    pub fn with_answer(
        &self,
        id: QuestionId,
        option: impl Into<String>,
    ) -> Result<Self, SessionError> {
        if self.is_finalized() {
            return Err(SessionError::Finalized);
        }

        let Some(question) = self.questions.iter().find(|q| *q.id() == id) else {
            return Err(SessionError::UnknownQuestion { id });
        };

        let option = option.into();
        if !question.offers(&option) {
            return Err(SessionError::OptionNotOffered { id, option });
        }

        let mut next = self.clone();
        next.answers.insert(id, option);
        Ok(next)
    }

    /// Grade the quiz and freeze its answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finalized` if already finalized and
    /// `SessionError::Incomplete` while any question is unanswered.
    pub fn finalize(&self, at: DateTime<Utc>) -> Result<Self, SessionError> {
        if self.is_finalized() {
            return Err(SessionError::Finalized);
        }

        let missing = self.questions.len().saturating_sub(self.answers.len());
        if missing > 0 {
            return Err(SessionError::Incomplete { missing });
        }

        let result = scoring::score(&self.questions, &self.answers);
        let mut next = self.clone();
        next.finalized = Some(Finalized { at, result });
        Ok(next)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("questions_len", &self.questions.len())
            .field("answers_len", &self.answers.len())
            .field("shortfall", &self.shortfall)
            .field("started_at", &self.started_at)
            .field("finalized_at", &self.finalized_at())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
