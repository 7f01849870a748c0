//! Lexicon-based sentiment polarity analysis.
//!
//! Counts exact token matches against fixed positive and negative
//! lexicons (no stemming) and derives a polarity label plus a compound
//! score normalized by text length. Independent of suspicion scoring:
//! neither component reads the other's output.

use serde::{Deserialize, Serialize};

use crate::config::SentimentConfig;

/// Sentiment polarity of a review text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Positive tokens decisively outnumber negative ones.
    Positive,
    /// Neither polarity dominates.
    Neutral,
    /// Negative tokens decisively outnumber positive ones.
    Negative,
}

impl Sentiment {
    /// Returns all sentiment labels.
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    /// Returns a human-readable name for this label.
    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Result of sentiment analysis for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// The polarity label.
    pub sentiment: Sentiment,
    /// Net polarity normalized by token count, clamped to [-1.0, 1.0].
    pub compound_score: f32,
}

impl SentimentResult {
    /// A neutral result with a zero compound score.
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            compound_score: 0.0,
        }
    }
}

/// Lexicon-based sentiment analyzer.
///
/// Tokenizes lowercased text on whitespace and counts membership in the
/// configured lexicons. Pure and total: empty text resolves to a neutral
/// result rather than an error.
pub struct SentimentAnalyzer {
    config: SentimentConfig,
}

impl SentimentAnalyzer {
    /// Creates an analyzer over the given lexicons and margin.
    pub fn new(config: SentimentConfig) -> Self {
        let config = SentimentConfig {
            positive_words: config
                .positive_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            negative_words: config
                .negative_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            margin: config.margin,
        };
        Self { config }
    }

    /// Analyzes the text using the configured margin.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        self.analyze_with_margin(text, self.config.margin)
    }

    /// Analyzes the text, requiring one polarity to outnumber the other
    /// by more than `margin` before leaving neutral.
    pub fn analyze_with_margin(&self, text: &str, margin: usize) -> SentimentResult {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        if words.is_empty() {
            return SentimentResult::neutral();
        }

        let positive = words
            .iter()
            .filter(|w| self.config.positive_words.contains(**w))
            .count();
        let negative = words
            .iter()
            .filter(|w| self.config.negative_words.contains(**w))
            .count();

        let compound_score =
            ((positive as f32 - negative as f32) / words.len() as f32).clamp(-1.0, 1.0);

        let sentiment = if positive > negative + margin {
            Sentiment::Positive
        } else if negative > positive + margin {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        SentimentResult {
            sentiment,
            compound_score,
        }
    }

    /// Returns the configuration this analyzer was built with.
    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectionConfig;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new(DetectionConfig::standard().sentiment)
    }

    fn compact_analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new(DetectionConfig::compact().sentiment)
    }

    #[test]
    fn empty_text_is_neutral() {
        let result = analyzer().analyze("");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.compound_score, 0.0);
    }

    #[test]
    fn whitespace_only_is_neutral() {
        let result = analyzer().analyze("   \t  ");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.compound_score, 0.0);
    }

    #[test]
    fn positive_text_detected() {
        let result = analyzer().analyze("great laptop love the screen");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!((result.compound_score - 0.4).abs() < 1e-6);
    }

    #[test]
    fn negative_text_detected() {
        let result = analyzer().analyze("terrible awful build with broken hinge");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!(result.compound_score < 0.0);
    }

    #[test]
    fn balanced_text_is_neutral() {
        let result = analyzer().analyze("good screen but bad speakers");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.compound_score, 0.0);
    }

    #[test]
    fn margin_gates_the_label() {
        // One net positive token: neutral under the standard margin (1),
        // positive when the margin is dropped to zero.
        let a = analyzer();
        assert_eq!(a.analyze("good value overall").sentiment, Sentiment::Neutral);
        assert_eq!(
            a.analyze_with_margin("good value overall", 0).sentiment,
            Sentiment::Positive
        );
    }

    #[test]
    fn compact_preset_uses_zero_margin() {
        let result = compact_analyzer().analyze("good value overall");
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn compact_lexicon_is_smaller() {
        // "crisp" only exists in the standard lexicon.
        let standard = analyzer();
        let compact = compact_analyzer();
        assert_eq!(
            standard.analyze_with_margin("crisp display", 0).sentiment,
            Sentiment::Positive
        );
        assert_eq!(
            compact.analyze_with_margin("crisp display", 0).sentiment,
            Sentiment::Neutral
        );
    }

    #[test]
    fn compound_score_saturates_at_bounds() {
        let a = analyzer();
        assert_eq!(a.analyze("great amazing excellent").compound_score, 1.0);
        assert_eq!(a.analyze("bad terrible awful").compound_score, -1.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = analyzer().analyze("GREAT laptop, LOVE the screen");
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn tokens_match_exactly() {
        // "great," with trailing punctuation is not a lexicon token.
        let result = analyzer().analyze_with_margin("great, but unremarkable", 0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.compound_score, 0.0);
    }
}
