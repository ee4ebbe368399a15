#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod random;
pub mod scoring;
pub mod selection;
pub mod time;

pub use error::Error;
pub use random::Randomness;
pub use time::Clock;
