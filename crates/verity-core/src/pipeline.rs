//! Review analysis pipeline.
//!
//! Composes the three engine stages over one shared configuration:
//!
//! 1. Suspicion scoring (weighted multi-signal)
//! 2. Trust classification (threshold bands)
//! 3. Sentiment analysis (lexicon polarity, content only)
//!
//! The analyzer validates and compiles its configuration once at
//! construction; per-review analysis is pure and total. A single
//! analyzer may be shared across threads without synchronization.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, DetectionConfig};
use crate::detector::{
    Classification, Confidence, SignalHit, SuspicionScorer, TrustClassifier,
};
use crate::review::Review;
use crate::sentiment::{Sentiment, SentimentAnalyzer};

/// Everything the engine derives for one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Aggregate suspicion score, 0..=100.
    pub score: u8,
    /// Trust band the score fell into.
    pub classification: Classification,
    /// Confidence attached to the classification.
    pub confidence: Confidence,
    /// Sentiment polarity of the review content.
    pub sentiment: Sentiment,
    /// Net sentiment normalized by length, in [-1.0, 1.0].
    pub compound_score: f32,
    /// The suspicion signals that fired, with point contributions.
    pub signals: Vec<SignalHit>,
}

impl ReviewAnalysis {
    /// Returns true if the review did not classify as genuine.
    pub fn is_flagged(&self) -> bool {
        self.classification != Classification::Genuine
    }
}

/// The composed review analysis pipeline.
pub struct ReviewAnalyzer {
    scorer: SuspicionScorer,
    trust: TrustClassifier,
    sentiment: SentimentAnalyzer,
}

impl ReviewAnalyzer {
    /// Builds an analyzer from the given configuration.
    ///
    /// Validates the configuration and compiles its pattern rules once;
    /// every later call is infallible.
    pub fn new(config: DetectionConfig) -> Result<Self, ConfigError> {
        let scorer = SuspicionScorer::new(&config)?;
        let trust = TrustClassifier::new(config.thresholds);
        let sentiment = SentimentAnalyzer::new(config.sentiment);
        Ok(Self {
            scorer,
            trust,
            sentiment,
        })
    }

    /// Creates an analyzer with the standard preset.
    pub fn with_standard() -> Self {
        Self::new(DetectionConfig::standard()).expect("standard preset is valid")
    }

    /// Creates an analyzer with the compact preset.
    pub fn with_compact() -> Self {
        Self::new(DetectionConfig::compact()).expect("compact preset is valid")
    }

    /// Analyzes a single review.
    pub fn analyze(&self, review: &Review) -> ReviewAnalysis {
        let scored = self.scorer.score(review);
        let verdict = self.trust.classify(scored.score);
        let sentiment = self.sentiment.analyze(&review.content);

        if verdict.classification == Classification::Fake {
            tracing::debug!(
                score = scored.score,
                signals = scored.signals.len(),
                "review classified as fake"
            );
        }

        ReviewAnalysis {
            score: scored.score,
            classification: verdict.classification,
            confidence: verdict.confidence,
            sentiment: sentiment.sentiment,
            compound_score: sentiment.compound_score,
            signals: scored.signals,
        }
    }

    /// Analyzes a batch of reviews, preserving input order.
    pub fn analyze_batch(&self, reviews: &[Review]) -> Vec<ReviewAnalysis> {
        reviews.iter().map(|review| self.analyze(review)).collect()
    }
}
