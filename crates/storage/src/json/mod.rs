//! Question banks stored as a JSON array of records.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::{Question, QuestionBank};
use tracing::debug;

use crate::repository::{QuestionBankRepository, StorageError};

mod mapping;

pub use mapping::QuestionRecord;

/// Parse and validate a bank from JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, missing fields
/// or ids that are neither integers nor strings, `StorageError::InvalidRecord`
/// for a record that fails validation, and `StorageError::InvalidBank` for
/// duplicate ids.
pub fn parse_bank(raw: &str) -> Result<QuestionBank, StorageError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let questions = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_draft()
                .validate()
                .map_err(|source| StorageError::InvalidRecord { index, source })
        })
        .collect::<Result<Vec<Question>, _>>()?;

    Ok(QuestionBank::new(questions)?)
}

/// Reads the bank from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileBankRepository {
    path: PathBuf,
}

impl JsonFileBankRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionBankRepository for JsonFileBankRepository {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NotFound {
                    path: self.path.clone(),
                },
                _ => StorageError::Io(e.to_string()),
            })?;

        let bank = parse_bank(&raw)?;
        debug!(
            path = %self.path.display(),
            questions = bank.len(),
            "loaded question bank"
        );
        Ok(bank)
    }
}
