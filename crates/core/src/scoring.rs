//! Grading of submitted answers.
//!
//! Scoring is a pure function of the question list and the answer map. It
//! does not check that every question was answered; a missing answer simply
//! counts as wrong.

use std::collections::HashMap;

use crate::model::{CategoryScore, Question, QuestionId, QuestionReview, QuizResult};

/// Grade `answers` against `questions`.
///
/// An answer is correct only if it is exactly equal to the question's
/// correct answer. Categories in the result follow first appearance in
/// `questions`.
#[must_use]
pub fn score(questions: &[Question], answers: &HashMap<QuestionId, String>) -> QuizResult {
    let mut by_category: Vec<CategoryScore> = Vec::new();

    for question in questions {
        let is_correct = answers
            .get(question.id())
            .is_some_and(|answer| question.is_correct(answer));

        let index = match by_category
            .iter()
            .position(|entry| entry.category() == question.category())
        {
            Some(index) => index,
            None => {
                by_category.push(CategoryScore::new(question.category().clone()));
                by_category.len() - 1
            }
        };
        by_category[index].record(is_correct);
    }

    QuizResult::from_categories(by_category)
}

/// Per-question breakdown in the order the questions were presented.
#[must_use]
pub fn review(
    questions: &[Question],
    answers: &HashMap<QuestionId, String>,
) -> Vec<QuestionReview> {
    questions
        .iter()
        .map(|question| {
            let submitted = answers.get(question.id()).cloned();
            let is_correct = submitted
                .as_deref()
                .is_some_and(|answer| question.is_correct(answer));
            QuestionReview {
                question_id: question.id().clone(),
                category: question.category().clone(),
                prompt: question.prompt().to_string(),
                submitted,
                correct_answer: question.correct_answer().to_string(),
                is_correct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, category: &str, correct: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            category,
            format!("Q{id}"),
            vec!["A".into(), "B".into(), "C".into()],
            correct,
        )
        .unwrap()
    }

    fn answers(pairs: &[(u64, &str)]) -> HashMap<QuestionId, String> {
        pairs
            .iter()
            .map(|(id, answer)| (QuestionId::new(*id), (*answer).to_string()))
            .collect()
    }

    #[test]
    fn half_right_is_fifty_percent() {
        let questions = vec![question(1, "x", "A"), question(2, "x", "B")];
        let result = score(&questions, &answers(&[(1, "A"), (2, "C")]));

        assert_eq!(result.overall_percent(), Some(50.0));
        assert_eq!(result.correct(), 1);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn unanswered_counts_as_wrong() {
        let questions = vec![question(1, "x", "A"), question(2, "x", "B")];
        let result = score(&questions, &answers(&[(1, "A")]));
        assert_eq!(result.correct(), 1);
        assert_eq!(result.overall_percent(), Some(50.0));
    }

    #[test]
    fn comparison_is_exact() {
        let questions = vec![question(1, "x", "A")];
        let result = score(&questions, &answers(&[(1, "a")]));
        assert_eq!(result.correct(), 0);
    }

    #[test]
    fn empty_quiz_has_no_percent() {
        let result = score(&[], &HashMap::new());
        assert_eq!(result.overall_percent(), None);
        assert_eq!(result.total(), 0);
        assert!(result.by_category().is_empty());
    }

    #[test]
    fn breakdown_by_category() {
        let questions = vec![
            question(1, "Historia", "A"),
            question(2, "Ciencia", "B"),
            question(3, "Historia", "C"),
            question(4, "Ciencia", "A"),
            question(5, "Arte", "A"),
        ];
        let result = score(
            &questions,
            &answers(&[(1, "A"), (2, "B"), (3, "A"), (4, "A")]),
        );

        let names: Vec<&str> = result
            .by_category()
            .iter()
            .map(|c| c.category().as_str())
            .collect();
        assert_eq!(names, vec!["Historia", "Ciencia", "Arte"]);

        let historia = result.category("Historia").unwrap();
        assert_eq!((historia.correct(), historia.total()), (1, 2));
        let ciencia = result.category("Ciencia").unwrap();
        assert_eq!((ciencia.correct(), ciencia.total()), (2, 2));
        assert_eq!(ciencia.percent(), Some(100.0));
        let arte = result.category("Arte").unwrap();
        assert_eq!(arte.percent(), Some(0.0));

        let summed: u32 = result.by_category().iter().map(CategoryScore::total).sum();
        assert_eq!(summed as usize, questions.len());
        assert_eq!(result.overall_percent(), Some(60.0));
    }

    #[test]
    fn scoring_leaves_inputs_alone() {
        let questions = vec![question(1, "x", "A"), question(2, "y", "B")];
        let submitted = answers(&[(1, "B")]);
        let (q_before, a_before) = (questions.clone(), submitted.clone());

        let _ = score(&questions, &submitted);
        let _ = review(&questions, &submitted);

        assert_eq!(questions, q_before);
        assert_eq!(submitted, a_before);
    }

    #[test]
    fn text_ids_are_graded_by_exact_id() {
        let by_text = Question::new(
            QuestionId::text("012"),
            "x",
            "padded",
            vec!["A".into(), "B".into()],
            "A",
        )
        .unwrap();
        let questions = vec![by_text, question(12, "x", "B")];
        let submitted: HashMap<QuestionId, String> = [
            (QuestionId::text("012"), "A".to_string()),
            (QuestionId::new(12), "A".to_string()),
        ]
        .into_iter()
        .collect();

        let result = score(&questions, &submitted);
        assert_eq!(result.correct(), 1);
        let lines = review(&questions, &submitted);
        assert!(lines[0].is_correct);
        assert!(!lines[1].is_correct);
    }

    #[test]
    fn review_lists_answers_in_order() {
        let questions = vec![question(7, "x", "A"), question(3, "y", "B")];
        let lines = review(&questions, &answers(&[(7, "A")]));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].question_id, QuestionId::new(7));
        assert_eq!(lines[0].submitted.as_deref(), Some("A"));
        assert!(lines[0].is_correct);
        assert_eq!(lines[1].submitted, None);
        assert_eq!(lines[1].correct_answer, "B");
        assert!(!lines[1].is_correct);
    }
}
