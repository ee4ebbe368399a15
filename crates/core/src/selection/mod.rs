//! Randomized quiz construction: shuffling, stratified sampling and option
//! ordering. Every function takes its generator explicitly.

mod options;
mod sampler;
mod shuffle;

pub use options::{OptionOrder, randomize_options};
pub use sampler::{Selection, StratifiedSampler, category_quotas, select_questions};
pub use shuffle::{shuffle, shuffle_in_place};
