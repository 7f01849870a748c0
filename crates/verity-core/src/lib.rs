//! Verity Core - review trust scoring, classification, and sentiment logic.
//!
//! This crate is the decision engine behind Verity: it assigns a
//! fraud-likelihood score to short consumer-review texts, classifies each
//! review into a trust category with a confidence level, and independently
//! labels its sentiment polarity. Data acquisition and presentation live
//! outside this crate; callers hand in [`Review`] records and consume the
//! derived [`ReviewAnalysis`] fields.
//!
//! The engine is a pure function of its input and an injectable
//! [`DetectionConfig`]: no I/O, no global state, no randomness. Two
//! configuration presets ship with the crate ([`DetectionConfig::standard`]
//! and [`DetectionConfig::compact`]); tests and callers may supply their
//! own rule sets instead.
//!
//! ```
//! use verity_core::{Classification, Review, ReviewAnalyzer};
//!
//! let analyzer = ReviewAnalyzer::with_standard();
//! let review = Review::new(
//!     "Does the job",
//!     "Installed this in the garage last spring and it has run quietly since, \
//!      needing only one filter change and no other attention in daily use.",
//!     4,
//!     true,
//!     7,
//! );
//! let analysis = analyzer.analyze(&review);
//! assert_eq!(analysis.classification, Classification::Genuine);
//! ```

pub mod config;
pub mod detector;
pub mod pipeline;
pub mod review;
pub mod sentiment;

pub use config::{
    ConfigError, DetectionConfig, LengthRule, PatternRule, RepetitionRule, SentimentConfig,
    TrustThresholds,
};
pub use detector::{
    Classification, Confidence, ScoreResult, Signal, SignalHit, SuspicionScorer, TrustClassifier,
    TrustVerdict,
};
pub use pipeline::{ReviewAnalysis, ReviewAnalyzer};
pub use review::Review;
pub use sentiment::{Sentiment, SentimentAnalyzer, SentimentResult};
