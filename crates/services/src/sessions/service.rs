use std::sync::Arc;

use tracing::{debug, info, warn};

use quiz_core::model::{QuestionId, QuizSettings};
use quiz_core::{Clock, Randomness};
use storage::repository::QuestionBankRepository;

use super::session::QuizSession;
use crate::error::{QuizServiceError, SessionError};

/// Orchestrates loading the bank, drawing a quiz and grading it.
///
/// Every call to [`QuizService::start_quiz`] reloads the bank and builds a
/// brand new session, which is how "start new test" works.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    randomness: Randomness,
    settings: QuizSettings,
    banks: Arc<dyn QuestionBankRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, banks: Arc<dyn QuestionBankRepository>) -> Self {
        Self {
            clock,
            randomness: Randomness::default(),
            settings: QuizSettings::default(),
            banks,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_randomness(mut self, randomness: Randomness) -> Self {
        self.randomness = randomness;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Load the bank and draw a fresh quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::BankUnavailable` if the bank cannot be
    /// loaded or validated and `QuizServiceError::EmptyBank` if it holds no
    /// questions.
    pub async fn start_quiz(&self) -> Result<QuizSession, QuizServiceError> {
        let bank = self.banks.load_bank().await.map_err(|err| {
            warn!(error = %err, "failed to load question bank");
            QuizServiceError::from(err)
        })?;

        if bank.is_empty() {
            warn!("question bank is empty");
            return Err(QuizServiceError::EmptyBank);
        }

        let mut rng = self.randomness.rng();
        let session = QuizSession::start(&bank, &self.settings, &mut rng, self.clock.now());

        if session.shortfall() > 0 {
            warn!(
                requested = self.settings.question_count(),
                drawn = session.questions().len(),
                "question bank too small for requested quiz size"
            );
        }
        info!(
            session = %session.id(),
            questions = session.questions().len(),
            categories = bank.category_counts().len(),
            seeded = self.randomness.is_seeded(),
            "quiz started"
        );

        Ok(session)
    }

    /// Record an answer on a session.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::with_answer`].
    pub fn answer(
        &self,
        session: &QuizSession,
        id: QuestionId,
        option: impl Into<String>,
    ) -> Result<QuizSession, SessionError> {
        let next = session.with_answer(id.clone(), option)?;
        debug!(
            session = %next.id(),
            question = %id,
            answered = next.answers().len(),
            "answer recorded"
        );
        Ok(next)
    }

    /// Finalize a fully answered session at the service clock's time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` while answers are missing and
    /// `SessionError::Finalized` if it was already finalized.
    pub fn submit(&self, session: &QuizSession) -> Result<QuizSession, SessionError> {
        let done = session.finalize(self.clock.now())?;
        if let Some(result) = done.result() {
            info!(
                session = %done.id(),
                correct = result.correct(),
                total = result.total(),
                "quiz finalized"
            );
        }
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::model::{Question, QuestionBank, ShortfallPolicy};
    use quiz_core::time::fixed_clock;
    use storage::repository::{InMemoryBankRepository, StorageError};

    struct Unavailable;

    #[async_trait]
    impl QuestionBankRepository for Unavailable {
        async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
            Err(StorageError::Io("disk on fire".into()))
        }
    }

    fn bank(size: u64) -> QuestionBank {
        let questions = (1..=size)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    if id % 2 == 0 { "par" } else { "impar" },
                    format!("Q{id}"),
                    vec!["A".into(), "B".into()],
                    "A",
                )
                .unwrap()
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    fn service(bank: QuestionBank) -> QuizService {
        QuizService::new(fixed_clock(), Arc::new(InMemoryBankRepository::new(bank)))
    }

    #[tokio::test]
    async fn starts_with_default_fifty() {
        let session = service(bank(80)).start_quiz().await.unwrap();
        assert_eq!(session.questions().len(), 50);
    }

    #[tokio::test]
    async fn unavailable_bank_is_reported() {
        let svc = QuizService::new(fixed_clock(), Arc::new(Unavailable));
        let err = svc.start_quiz().await.unwrap_err();
        assert!(matches!(err, QuizServiceError::BankUnavailable(_)));
    }

    #[tokio::test]
    async fn empty_bank_is_reported() {
        let err = service(QuestionBank::default()).start_quiz().await.unwrap_err();
        assert!(matches!(err, QuizServiceError::EmptyBank));
    }

    #[tokio::test]
    async fn seeded_service_repeats_the_quiz() {
        let svc = service(bank(40))
            .with_settings(QuizSettings::new(10, ShortfallPolicy::Redistribute).unwrap())
            .with_randomness(Randomness::seeded(11));

        let a = svc.start_quiz().await.unwrap();
        let b = svc.start_quiz().await.unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.questions(), b.questions());
        assert_eq!(a.option_order(), b.option_order());
    }

    #[tokio::test]
    async fn submit_rejects_incomplete_quiz() {
        let svc = service(bank(6));
        let session = svc.start_quiz().await.unwrap();
        let err = svc.submit(&session).unwrap_err();
        assert_eq!(err, SessionError::Incomplete { missing: 6 });
    }
}
