use std::collections::HashSet;

use thiserror::Error;

use crate::model::{CategoryName, Question, QuestionDraft, QuestionError, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("duplicate question id {id}")]
    DuplicateId { id: QuestionId },

    #[error("malformed question {id}: {source}")]
    Malformed {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },
}

/// Immutable, validated collection of questions.
///
/// Ids are unique across the bank. Bank order is kept as supplied; it decides
/// the order in which categories are first encountered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if let Some(id) = first_duplicate(&questions) {
            return Err(BankError::DuplicateId { id });
        }
        Ok(Self { questions })
    }

    /// Validate every draft and build a bank. The first invalid record wins.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Malformed` for an invalid draft, or
    /// `BankError::DuplicateId` if ids collide.
    pub fn from_drafts(drafts: impl IntoIterator<Item = QuestionDraft>) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id.clone();
                draft
                    .validate()
                    .map_err(|source| BankError::Malformed { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Question counts per category, in first-encountered order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(CategoryName, usize)> {
        let mut counts: Vec<(CategoryName, usize)> = Vec::new();
        for question in &self.questions {
            match counts.iter_mut().find(|(name, _)| name == question.category()) {
                Some((_, count)) => *count += 1,
                None => counts.push((question.category().clone(), 1)),
            }
        }
        counts
    }
}

fn first_duplicate(questions: &[Question]) -> Option<QuestionId> {
    let mut seen = HashSet::with_capacity(questions.len());
    questions
        .iter()
        .map(Question::id)
        .find(|id| !seen.insert(*id))
        .cloned()
}
