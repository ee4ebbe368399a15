use std::collections::HashMap;

use rand::Rng;

use crate::model::{Question, QuestionId};
use crate::selection::shuffle::shuffle;

/// Display order of each question's options for one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionOrder {
    orders: HashMap<QuestionId, Vec<String>>,
}

impl OptionOrder {
    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&[String]> {
        self.orders.get(id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.orders.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &[String])> {
        self.orders.iter().map(|(id, options)| (id, options.as_slice()))
    }
}

/// Shuffle every question's options independently.
///
/// The result has exactly one entry per input question id.
#[must_use]
pub fn randomize_options<R: Rng + ?Sized>(questions: &[Question], rng: &mut R) -> OptionOrder {
    let orders = questions
        .iter()
        .map(|question| (question.id().clone(), shuffle(question.options(), rng)))
        .collect();
    OptionOrder { orders }
}
