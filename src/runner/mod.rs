//! Sequential step orchestration.

pub mod sequence;

pub use sequence::{RunOptions, RunOutcome, SequenceRunner};
