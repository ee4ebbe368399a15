#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::{Clock, Randomness};

pub use error::{QuizServiceError, SessionError};
pub use sessions::{
    QuestionView, QuizService, QuizSession, QuizState, QuizView, SessionProgress,
};
