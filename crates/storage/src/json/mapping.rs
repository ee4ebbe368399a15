use quiz_core::model::{QuestionDraft, QuestionId};
use serde::{Deserialize, Serialize};

/// On-disk shape of one question, using the bank file's field names.
///
/// `id` is an integer or a string and keeps that form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub category: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

impl QuestionRecord {
    /// Convert into an unvalidated draft.
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            id: self.id,
            category: self.category,
            prompt: self.prompt,
            options: self.options,
            correct_answer: self.correct_answer,
        }
    }
}
