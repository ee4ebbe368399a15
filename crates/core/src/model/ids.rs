use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a Question within a bank.
///
/// Bank files use integers or strings; both forms are kept exactly as
/// written, so `12` and `"012"` are different ids, and so are `12` and `"12"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(u64),
    Text(String),
}

impl QuestionId {
    /// Creates a numeric `QuestionId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self::Number(id)
    }

    /// Creates a textual `QuestionId`, kept verbatim
    #[must_use]
    pub fn text(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }

    #[must_use]
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// True for a textual id with no visible characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Identifier of a single quiz run. Every "start new test" mints a new one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizSessionId(Uuid);

impl QuizSessionId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "QuestionId({n})"),
            Self::Text(s) => write!(f, "QuestionId({s:?})"),
        }
    }
}

impl fmt::Debug for QuizSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuizSessionId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for QuizSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::new(42).to_string(), "42");
        assert_eq!(QuestionId::text("q-7").to_string(), "q-7");
        assert_eq!(QuestionId::text("012").to_string(), "012");
    }

    #[test]
    fn test_question_id_debug_shows_form() {
        assert_eq!(format!("{:?}", QuestionId::new(12)), "QuestionId(12)");
        assert_eq!(format!("{:?}", QuestionId::text("12")), "QuestionId(\"12\")");
    }

    #[test]
    fn test_numeric_and_text_ids_stay_distinct() {
        let ids: HashSet<QuestionId> = [
            QuestionId::new(12),
            QuestionId::text("012"),
            QuestionId::text("12"),
        ]
        .into_iter()
        .collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_question_id_json_keeps_its_form() {
        let number: QuestionId = serde_json::from_str("12").unwrap();
        let text: QuestionId = serde_json::from_str(r#""012""#).unwrap();
        assert_eq!(number, QuestionId::new(12));
        assert_eq!(text, QuestionId::text("012"));
        assert_eq!(serde_json::to_string(&number).unwrap(), "12");
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""012""#);
    }

    #[test]
    fn test_question_id_accessors() {
        assert_eq!(QuestionId::new(3).as_number(), Some(3));
        assert_eq!(QuestionId::new(3).as_text(), None);
        assert_eq!(QuestionId::from("q1").as_text(), Some("q1"));
        assert!(QuestionId::text("  ").is_blank());
        assert!(!QuestionId::text("q1").is_blank());
        assert!(!QuestionId::new(0).is_blank());
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(QuizSessionId::new_random(), QuizSessionId::new_random());
    }
}
