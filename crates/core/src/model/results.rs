use serde::Serialize;

use crate::model::{CategoryName, QuestionId};

/// Percentage of `correct` over `total`, or `None` when nothing was asked.
#[must_use]
pub fn percent(correct: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(f64::from(correct) / f64::from(total) * 100.0)
}

/// Correct/total tally for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    category: CategoryName,
    correct: u32,
    total: u32,
}

impl CategoryScore {
    #[must_use]
    pub fn new(category: CategoryName) -> Self {
        Self {
            category,
            correct: 0,
            total: 0,
        }
    }

    pub(crate) fn record(&mut self, is_correct: bool) {
        self.total = self.total.saturating_add(1);
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        percent(self.correct, self.total)
    }
}

/// Aggregate outcome of grading a quiz.
///
/// `by_category` is ordered by first appearance in the graded question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct QuizResult {
    correct: u32,
    total: u32,
    by_category: Vec<CategoryScore>,
}

impl QuizResult {
    pub(crate) fn from_categories(by_category: Vec<CategoryScore>) -> Self {
        let correct = by_category
            .iter()
            .fold(0_u32, |acc, c| acc.saturating_add(c.correct));
        let total = by_category
            .iter()
            .fold(0_u32, |acc, c| acc.saturating_add(c.total));
        Self {
            correct,
            total,
            by_category,
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Overall score in percent. `None` when the quiz had no questions.
    #[must_use]
    pub fn overall_percent(&self) -> Option<f64> {
        percent(self.correct, self.total)
    }

    #[must_use]
    pub fn by_category(&self) -> &[CategoryScore] {
        &self.by_category
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.by_category
            .iter()
            .find(|score| score.category.as_str() == name)
    }
}

/// One graded line of a finished quiz, as shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionReview {
    pub question_id: QuestionId,
    pub category: CategoryName,
    pub prompt: String,
    pub submitted: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_nothing_is_not_applicable() {
        assert_eq!(percent(0, 0), None);
    }

    #[test]
    fn percent_divides() {
        assert_eq!(percent(1, 4), Some(25.0));
        assert_eq!(percent(3, 3), Some(100.0));
    }

    #[test]
    fn result_totals_sum_categories() {
        let mut a = CategoryScore::new(CategoryName::new("a").unwrap());
        a.record(true);
        a.record(false);
        let mut b = CategoryScore::new(CategoryName::new("b").unwrap());
        b.record(true);

        let result = QuizResult::from_categories(vec![a, b]);
        assert_eq!(result.correct(), 2);
        assert_eq!(result.total(), 3);
        assert_eq!(result.category("a").unwrap().percent(), Some(50.0));
        assert!(result.category("c").is_none());
    }
}
