use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::model::{CategoryName, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a question record is rejected at ingestion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be blank: {raw:?}")]
    InvalidId { raw: String },

    #[error("question category cannot be empty")]
    EmptyCategory,

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least {min} options, got {got}")]
    TooFewOptions { min: usize, got: usize },

    #[error("question options cannot be empty strings")]
    EmptyOption,

    #[error("duplicate option: {option}")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not one of the options")]
    CorrectAnswerNotInOptions { answer: String },
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Minimum number of options for a multiple-choice question.
pub const MIN_OPTIONS: usize = 2;

/// Unvalidated question as it arrives from a bank source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// Prompt, option and answer text is kept verbatim; answers are later
    /// compared with exact string equality. Only the category label is
    /// trimmed, since it is used for grouping.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a field is blank, options are duplicated or
    /// too few, or the correct answer is not among the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.id.is_blank() {
            return Err(QuestionError::InvalidId {
                raw: self.id.to_string(),
            });
        }

        let category = CategoryName::new(self.category)?;

        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                min: MIN_OPTIONS,
                got: self.options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }

        if !seen.contains(self.correct_answer.as_str()) {
            return Err(QuestionError::CorrectAnswerNotInOptions {
                answer: self.correct_answer,
            });
        }

        Ok(Question {
            id: self.id,
            category,
            prompt: self.prompt,
            options: self.options,
            correct_answer: self.correct_answer,
        })
    }
}

/// A validated multiple-choice question.
///
/// `correct_answer` is always one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    category: CategoryName,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Shorthand for building and validating a draft.
    ///
    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn new(
        id: QuestionId,
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            id,
            category: category.into(),
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
        }
        .validate()
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Returns true if `option` is one of this question's options.
    #[must_use]
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(1),
            category: "Geografía".into(),
            prompt: "Capital de Francia?".into(),
            options: vec!["París".into(), "Roma".into(), "Lima".into()],
            correct_answer: "París".into(),
        }
    }

    #[test]
    fn valid_draft_validates() {
        let q = draft().validate().unwrap();
        assert_eq!(q.id(), &QuestionId::new(1));
        assert_eq!(q.category().as_str(), "Geografía");
        assert_eq!(q.options().len(), 3);
        assert!(q.is_correct("París"));
        assert!(!q.is_correct("paris"));
        assert!(q.offers("Lima"));
        assert!(!q.offers("Madrid"));
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let mut d = draft();
        d.correct_answer = "Madrid".into();
        let err = d.validate().unwrap_err();
        assert!(matches!(err, QuestionError::CorrectAnswerNotInOptions { .. }));
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let mut d = draft();
        d.prompt = "  ".into();
        assert_eq!(d.validate().unwrap_err(), QuestionError::EmptyPrompt);
    }

    #[test]
    fn prompt_text_is_kept_verbatim() {
        let mut d = draft();
        d.prompt = "  ¿Capital de Francia?\n".into();
        let q = d.validate().unwrap();
        assert_eq!(q.prompt(), "  ¿Capital de Francia?\n");
    }

    #[test]
    fn text_ids_are_accepted() {
        let mut d = draft();
        d.id = QuestionId::text("geo-01");
        assert_eq!(d.validate().unwrap().id(), &QuestionId::text("geo-01"));
    }

    #[test]
    fn blank_text_id_is_rejected() {
        let mut d = draft();
        d.id = QuestionId::text(" ");
        let err = d.validate().unwrap_err();
        assert_eq!(err, QuestionError::InvalidId { raw: " ".into() });
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let mut d = draft();
        d.options = vec!["París".into(), "París".into()];
        let err = d.validate().unwrap_err();
        assert!(matches!(err, QuestionError::DuplicateOption { .. }));
    }

    #[test]
    fn single_option_is_rejected() {
        let mut d = draft();
        d.options = vec!["París".into()];
        let err = d.validate().unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { min: 2, got: 1 });
    }

    #[test]
    fn blank_option_is_rejected() {
        let mut d = draft();
        d.options.push(" ".into());
        assert_eq!(d.validate().unwrap_err(), QuestionError::EmptyOption);
    }
}
