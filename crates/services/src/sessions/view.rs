use serde::Serialize;

use quiz_core::model::{CategoryName, QuestionId, QuizSessionId};

use super::session::{QuizSession, QuizState};

/// Presentation-agnostic rendering input for one question.
///
/// No pre-formatted strings; the UI decides how to number and lay out items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub id: QuestionId,
    pub category: CategoryName,
    pub prompt: String,
    /// Options in this quiz's shuffled order.
    pub options: Vec<String>,
    pub selected: Option<String>,
}

/// Everything the presentation layer needs to draw the quiz form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub session_id: QuizSessionId,
    pub state: QuizState,
    pub questions: Vec<QuestionView>,
}

impl QuizView {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let questions = session
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionView {
                number: index + 1,
                id: question.id().clone(),
                category: question.category().clone(),
                prompt: question.prompt().to_string(),
                options: session
                    .options_for(question.id())
                    .map_or_else(|| question.options().to_vec(), <[String]>::to_vec),
                selected: session.answer_for(question.id()).map(str::to_string),
            })
            .collect();

        Self {
            session_id: session.id(),
            state: session.state(),
            questions,
        }
    }
}
