mod progress;
mod service;
mod session;
mod view;

// Public API of the quiz session subsystem.
pub use crate::error::{QuizServiceError, SessionError};
pub use progress::SessionProgress;
pub use service::QuizService;
pub use session::{QuizSession, QuizState};
pub use view::{QuestionView, QuizView};
