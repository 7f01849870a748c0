//! Suspicion scoring and trust classification.
//!
//! This module turns a review into a 0..=100 suspicion score with a
//! per-signal breakdown, then maps that score to a trust verdict.

mod scorer;
mod trust;
mod verdict;

pub use scorer::SuspicionScorer;
pub use trust::TrustClassifier;
pub use verdict::{Classification, Confidence, ScoreResult, Signal, SignalHit, TrustVerdict};
