#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::JsonFileBankRepository;
pub use repository::{InMemoryBankRepository, QuestionBankRepository, Storage, StorageError};
