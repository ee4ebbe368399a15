//! Answer files: a JSON object from question id to the chosen option.

use std::collections::HashMap;
use std::fmt;

use quiz_core::model::{Question, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswersError {
    UnknownId { raw: String },
    AmbiguousId { raw: String },
}

impl fmt::Display for AnswersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswersError::UnknownId { raw } => {
                write!(f, "answers name question {raw:?}, which is not in this quiz")
            }
            AnswersError::AmbiguousId { raw } => {
                write!(f, "answer key {raw:?} matches both a numeric and a text id")
            }
        }
    }
}

impl std::error::Error for AnswersError {}

/// Map answer-file keys onto the quiz's question ids.
///
/// JSON object keys are always strings, so a key names the question whose id
/// prints the same way: `"12"` is id `12`, `"012"` is id `"012"`.
pub fn resolve(
    raw: HashMap<String, String>,
    questions: &[Question],
) -> Result<HashMap<QuestionId, String>, AnswersError> {
    let mut by_key: HashMap<String, Vec<&QuestionId>> = HashMap::new();
    for question in questions {
        by_key
            .entry(question.id().to_string())
            .or_default()
            .push(question.id());
    }

    let mut answers = HashMap::with_capacity(raw.len());
    for (key, option) in raw {
        match by_key.get(&key).map(Vec::as_slice) {
            Some([id]) => {
                answers.insert((*id).clone(), option);
            }
            Some([]) | None => return Err(AnswersError::UnknownId { raw: key }),
            Some(_) => return Err(AnswersError::AmbiguousId { raw: key }),
        }
    }
    Ok(answers)
}
