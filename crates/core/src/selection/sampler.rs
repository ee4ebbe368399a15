use rand::Rng;

use crate::model::{CategoryName, Question, QuizSettings, ShortfallPolicy};
use crate::selection::shuffle::shuffle_in_place;

/// Number of questions each category contributes.
///
/// `available[i]` is the size of the i-th category in first-encountered
/// order. The target is split as `target / k` per category, with the first
/// `target % k` categories getting one extra. Quotas are capped at the
/// category size; under `Redistribute` the unfilled slots go one at a time to
/// the category with the fewest picks that still has unused questions
/// (earlier categories win ties).
#[must_use]
pub fn category_quotas(
    available: &[usize],
    target: usize,
    policy: ShortfallPolicy,
) -> Vec<usize> {
    let k = available.len();
    if k == 0 {
        return Vec::new();
    }

    let base = target / k;
    let remainder = target % k;

    let mut takes: Vec<usize> = available
        .iter()
        .enumerate()
        .map(|(index, &size)| {
            let quota = base + usize::from(index < remainder);
            quota.min(size)
        })
        .collect();

    if policy == ShortfallPolicy::Redistribute {
        let mut leftover = target.saturating_sub(takes.iter().sum());
        while leftover > 0 {
            let next = takes
                .iter()
                .zip(available)
                .enumerate()
                .filter(|(_, (take, size))| *take < *size)
                .min_by_key(|(index, (take, _))| (**take, *index))
                .map(|(index, _)| index);

            let Some(index) = next else {
                break;
            };
            takes[index] += 1;
            leftover -= 1;
        }
    }

    takes
}

/// Outcome of a stratified draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected questions in presentation order.
    pub questions: Vec<Question>,
    /// Picks per category, in first-encountered order.
    pub per_category: Vec<(CategoryName, usize)>,
    /// Slots of the target that could not be filled.
    pub shortfall: usize,
}

impl Selection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Draws a category-stratified, shuffled subset of a question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StratifiedSampler {
    target: usize,
    shortfall: ShortfallPolicy,
}

impl StratifiedSampler {
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self {
            target,
            shortfall: ShortfallPolicy::default(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &QuizSettings) -> Self {
        Self::new(settings.target()).with_shortfall(settings.shortfall())
    }

    #[must_use]
    pub fn with_shortfall(mut self, policy: ShortfallPolicy) -> Self {
        self.shortfall = policy;
        self
    }

    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Sample `questions` without modifying them.
    ///
    /// Each category is shuffled on its own and its quota taken from the
    /// front; the combined picks are then shuffled again so category
    /// boundaries do not show in the final order.
    pub fn sample<R: Rng + ?Sized>(&self, questions: &[Question], rng: &mut R) -> Selection {
        let mut groups: Vec<(&CategoryName, Vec<&Question>)> = Vec::new();
        for question in questions {
            match groups.iter_mut().find(|(name, _)| *name == question.category()) {
                Some((_, members)) => members.push(question),
                None => groups.push((question.category(), vec![question])),
            }
        }

        let sizes: Vec<usize> = groups.iter().map(|(_, members)| members.len()).collect();
        let takes = category_quotas(&sizes, self.target, self.shortfall);

        let mut picked: Vec<&Question> = Vec::with_capacity(takes.iter().sum());
        let mut per_category = Vec::with_capacity(groups.len());
        for ((name, mut members), take) in groups.into_iter().zip(takes) {
            shuffle_in_place(&mut members, rng);
            picked.extend(members.into_iter().take(take));
            per_category.push((name.clone(), take));
        }

        shuffle_in_place(&mut picked, rng);

        let shortfall = if questions.is_empty() {
            0
        } else {
            self.target.saturating_sub(picked.len())
        };

        Selection {
            questions: picked.into_iter().cloned().collect(),
            per_category,
            shortfall,
        }
    }
}

/// Stratified draw of `target` questions with the default shortfall policy.
#[must_use]
pub fn select_questions<R: Rng + ?Sized>(
    questions: &[Question],
    target: usize,
    rng: &mut R,
) -> Vec<Question> {
    StratifiedSampler::new(target).sample(questions, rng).questions
}
