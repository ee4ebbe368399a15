use quiz_core::model::{CategoryName, QuestionReview, QuizResult};

fn format_percent(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(p) => format!("{p:.decimals$}%"),
        None => "n/a".to_string(),
    }
}

/// Lines printed by `check`.
pub fn bank_lines(total: usize, counts: &[(CategoryName, usize)]) -> Vec<String> {
    let mut lines = Vec::with_capacity(counts.len() + 1);
    lines.push(format!("{total} questions in {} categories", counts.len()));
    for (category, count) in counts {
        lines.push(format!("  {category}: {count}"));
    }
    lines
}

/// Lines printed by `score`: overall grade, per-category tallies, then the
/// per-question review.
pub fn result_lines(result: &QuizResult, review: &[QuestionReview]) -> Vec<String> {
    let mut lines = vec![format!(
        "Total score: {}",
        format_percent(result.overall_percent(), 2)
    )];

    lines.push("Results by category:".to_string());
    for score in result.by_category() {
        lines.push(format!(
            "  {}: {} of {} ({})",
            score.category(),
            score.correct(),
            score.total(),
            format_percent(score.percent(), 1)
        ));
    }

    lines.push("Answers:".to_string());
    for (index, line) in review.iter().enumerate() {
        let mark = if line.is_correct { "ok" } else { "xx" };
        lines.push(format!(
            "  [{mark}] {}. {} | yours: {} | correct: {}",
            index + 1,
            line.prompt,
            line.submitted.as_deref().unwrap_or("(none)"),
            line.correct_answer
        ));
    }
    lines
}
