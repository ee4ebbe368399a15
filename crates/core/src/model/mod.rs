mod bank;
mod category;
mod ids;
mod question;
mod results;
mod settings;

pub use bank::{BankError, QuestionBank};
pub use category::CategoryName;
pub use ids::{QuestionId, QuizSessionId};
pub use question::{MIN_OPTIONS, Question, QuestionDraft, QuestionError};
pub use results::{CategoryScore, QuestionReview, QuizResult, percent};
pub use settings::{DEFAULT_QUESTION_COUNT, QuizSettings, SettingsError, ShortfallPolicy};
