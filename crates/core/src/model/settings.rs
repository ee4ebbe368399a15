use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of questions drawn for a quiz when nothing else is configured.
pub const DEFAULT_QUESTION_COUNT: u32 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question count must be > 0")]
    InvalidQuestionCount,
}

/// What the sampler does when a category holds fewer questions than its quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallPolicy {
    /// Hand unfilled slots to categories that still have unused questions.
    #[default]
    Redistribute,
    /// Keep the per-category quotas and return fewer questions.
    AcceptShortfall,
}

/// Configuration for building a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    question_count: u32,
    shortfall: ShortfallPolicy,
}

impl QuizSettings {
    /// Creates quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuestionCount` if `question_count` is zero.
    pub fn new(question_count: u32, shortfall: ShortfallPolicy) -> Result<Self, SettingsError> {
        if question_count == 0 {
            return Err(SettingsError::InvalidQuestionCount);
        }
        Ok(Self {
            question_count,
            shortfall,
        })
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn shortfall(&self) -> ShortfallPolicy {
        self.shortfall
    }

    /// Target size as a `usize`, saturating on narrow platforms.
    #[must_use]
    pub fn target(&self) -> usize {
        usize::try_from(self.question_count).unwrap_or(usize::MAX)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            shortfall: ShortfallPolicy::default(),
        }
    }
}
