use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{BankError, QuestionBank, QuestionError};
use thiserror::Error;

use crate::json::JsonFileBankRepository;

/// Errors surfaced by bank sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found: {path}")]
    NotFound { path: PathBuf },

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    InvalidBank(#[from] BankError),
}

/// Source of the question bank a quiz is drawn from.
///
/// Implementations hand back a fully validated bank or an error; they never
/// return a partially loaded bank.
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// Load the whole bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bank cannot be read or fails validation.
    async fn load_bank(&self) -> Result<QuestionBank, StorageError>;
}

/// Bank held in memory, for tests and embedding callers.
#[derive(Clone, Default)]
pub struct InMemoryBankRepository {
    bank: Arc<QuestionBank>,
}

impl InMemoryBankRepository {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }
}

#[async_trait]
impl QuestionBankRepository for InMemoryBankRepository {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        Ok(self.bank.as_ref().clone())
    }
}

/// Bank source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub banks: Arc<dyn QuestionBankRepository>,
}

impl Storage {
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            banks: Arc::new(JsonFileBankRepository::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Question, QuestionId};

    fn build_bank() -> QuestionBank {
        let questions = (1..=3)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    "General",
                    format!("Q{id}"),
                    vec!["A".into(), "B".into()],
                    "A",
                )
                .unwrap()
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    #[tokio::test]
    async fn in_memory_returns_the_same_bank() {
        let bank = build_bank();
        let repo = InMemoryBankRepository::new(bank.clone());
        assert_eq!(repo.load_bank().await.unwrap(), bank);
        assert_eq!(repo.load_bank().await.unwrap(), bank);
    }

    #[test]
    fn repositories_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryBankRepository>();
        assert_send_sync::<JsonFileBankRepository>();
    }
}
