//! Detection configuration: signal weights, pattern rules, thresholds,
//! and sentiment lexicons.
//!
//! All decision constants live here rather than in the components that
//! apply them, so tests and callers can swap rule sets without touching
//! global state. Two presets ship with the engine:
//!
//! - [`DetectionConfig::standard`]: the richer rule set with spam-phrase
//!   detection and four confidence bands.
//! - [`DetectionConfig::compact`]: a leaner rule set with fewer patterns
//!   and tighter thresholds.
//!
//! A config is read-only once handed to the engine and may be shared
//! freely across threads.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a configuration fails validation or compilation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Classifier thresholds are not strictly ascending within 0..=100.
    #[error(
        "thresholds must satisfy genuine_max < medium_min < fake_min <= 100, \
         got {genuine_max}/{medium_min}/{fake_min}"
    )]
    UnorderedThresholds {
        /// Upper bound of the genuine band.
        genuine_max: u8,
        /// Lower bound of medium-confidence suspicion.
        medium_min: u8,
        /// Lower bound of the fake band.
        fake_min: u8,
    },

    /// A signal weight or cap exceeds the 100-point score scale.
    #[error("weight {weight} for '{name}' exceeds the 100-point scale")]
    WeightOutOfRange {
        /// Which weight was out of range.
        name: &'static str,
        /// The offending value.
        weight: u8,
    },

    /// The repetition ratio must be a fraction of the token count.
    #[error("repetition ratio must be within (0.0, 1.0], got {0}")]
    InvalidRepetitionRatio(f32),

    /// At least one suspicious-pattern rule is required.
    #[error("pattern rule list cannot be empty")]
    NoPatterns,

    /// A pattern rule failed to compile.
    #[error("invalid pattern '{id}': {source}")]
    InvalidPattern {
        /// Identifier of the offending rule.
        id: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// A single suspicious-pattern rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Stable identifier for this rule.
    pub id: String,
    /// Regular expression matched against the lowercased full text.
    pub pattern: String,
    /// Points contributed when the pattern matches.
    pub weight: u8,
}

impl PatternRule {
    /// Creates a new pattern rule.
    pub fn new(id: impl Into<String>, pattern: impl Into<String>, weight: u8) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            weight,
        }
    }
}

/// A word-count bound with the points it contributes when crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRule {
    /// The word-count bound for this rule.
    pub words: usize,
    /// Points contributed when the bound is crossed.
    pub weight: u8,
}

/// Parameters for the repetitive-language signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepetitionRule {
    /// Minimum token count (exclusive) before the signal is evaluated.
    pub min_words: usize,
    /// Most-common-token frequency ratio (exclusive) above which the
    /// text is considered unnaturally repetitive.
    pub max_ratio: f32,
    /// Points contributed when the signal fires.
    pub weight: u8,
}

/// Ascending score thresholds separating the trust bands.
///
/// Invariant: `genuine_max < medium_min < fake_min <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustThresholds {
    /// Scores at or below this bound classify as genuine.
    pub genuine_max: u8,
    /// Scores above this bound within the suspicious band report
    /// medium rather than low confidence.
    pub medium_min: u8,
    /// Scores above this bound classify as fake.
    pub fake_min: u8,
}

/// Lexicons and margin for sentiment analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Tokens counted as positive (exact, case-insensitive match).
    pub positive_words: HashSet<String>,
    /// Tokens counted as negative (exact, case-insensitive match).
    pub negative_words: HashSet<String>,
    /// How decisively one polarity must outnumber the other before the
    /// text leaves neutral. 0 means strictly greater.
    pub margin: usize,
}

/// Process-wide detection configuration.
///
/// Initialized once, never mutated. Holds every weighted rule, the spam
/// phrase list, the classifier thresholds, and the sentiment lexicons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Points added when the purchase is unverified.
    pub unverified_weight: u8,
    /// Fires when the content word count falls below `words`.
    pub short_content: LengthRule,
    /// Fires when the content word count rises above `words`.
    pub padded_content: LengthRule,
    /// Suspicious-pattern rules, each contributing its own weight.
    pub patterns: Vec<PatternRule>,
    /// Ceiling on the summed pattern contributions.
    pub pattern_score_cap: u8,
    /// Literal phrases checked by substring membership.
    pub spam_phrases: Vec<String>,
    /// Points per matched spam phrase.
    pub spam_phrase_weight: u8,
    /// Ceiling on the summed spam-phrase contributions.
    pub spam_score_cap: u8,
    /// Points added for an extreme rating with zero helpful votes.
    pub social_proof_weight: u8,
    /// Repetitive-language signal parameters.
    pub repetition: RepetitionRule,
    /// Trust classification bands.
    pub thresholds: TrustThresholds,
    /// Sentiment lexicons and margin.
    pub sentiment: SentimentConfig,
}

impl DetectionConfig {
    /// The richer rule set: six pattern rules capped at 45 points, ten
    /// spam phrases capped at 30, and four confidence bands.
    pub fn standard() -> Self {
        Self {
            unverified_weight: 30,
            short_content: LengthRule {
                words: 20,
                weight: 25,
            },
            padded_content: LengthRule {
                words: 400,
                weight: 10,
            },
            patterns: vec![
                PatternRule::new("exclamation-run", r"!{3,}", 15),
                PatternRule::new(
                    "superlative-pair",
                    r"\b(amazing|perfect|excellent|best|worst|terrible|horrible)\b.*\b(amazing|perfect|excellent|best|worst|terrible|horrible)\b",
                    15,
                ),
                PatternRule::new(
                    "sales-pitch",
                    r"\b(buy now|don't buy|waste money|highly recommend|must buy)\b",
                    15,
                ),
                PatternRule::new("star-mention", r"\b5 stars?\b", 15),
                PatternRule::new("repeated-great", r"\b(great\s+){2,}", 15),
                PatternRule::new("repeated-perfect", r"\b(perfect\s+){2,}", 15),
            ],
            pattern_score_cap: 45,
            spam_phrases: [
                "best ever",
                "perfect perfect",
                "amazing amazing",
                "great great",
                "buy immediately",
                "don't waste",
                "highly recommend to all",
                "best purchase ever",
                "worst purchase ever",
                "complete waste",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            spam_phrase_weight: 10,
            spam_score_cap: 30,
            social_proof_weight: 15,
            repetition: RepetitionRule {
                min_words: 10,
                max_ratio: 0.12,
                weight: 20,
            },
            thresholds: TrustThresholds {
                genuine_max: 25,
                medium_min: 45,
                fake_min: 70,
            },
            sentiment: SentimentConfig {
                positive_words: Self::standard_positive_words(),
                negative_words: Self::standard_negative_words(),
                margin: 1,
            },
        }
    }

    /// The leaner rule set: four pattern rules, no spam phrases, shorter
    /// length bounds, and tighter thresholds.
    pub fn compact() -> Self {
        Self {
            unverified_weight: 30,
            short_content: LengthRule {
                words: 15,
                weight: 25,
            },
            padded_content: LengthRule {
                words: 500,
                weight: 10,
            },
            patterns: vec![
                PatternRule::new("exclamation-run", r"!!!+", 15),
                PatternRule::new(
                    "superlative-pair",
                    r"\b(amazing|perfect|excellent|best|worst|terrible|horrible)\b.*\b(amazing|perfect|excellent|best|worst|terrible|horrible)\b",
                    15,
                ),
                PatternRule::new(
                    "sales-pitch",
                    r"\b(buy now|don't buy|waste money|highly recommend|must buy)\b",
                    15,
                ),
                PatternRule::new("star-mention", r"\b5 stars?\b", 15),
            ],
            // All four rules at full weight still fit under the cap.
            pattern_score_cap: 60,
            spam_phrases: Vec::new(),
            spam_phrase_weight: 10,
            spam_score_cap: 30,
            social_proof_weight: 15,
            repetition: RepetitionRule {
                min_words: 5,
                max_ratio: 0.25,
                weight: 20,
            },
            thresholds: TrustThresholds {
                genuine_max: 35,
                medium_min: 48,
                fake_min: 60,
            },
            sentiment: SentimentConfig {
                positive_words: Self::compact_positive_words(),
                negative_words: Self::compact_negative_words(),
                margin: 0,
            },
        }
    }

    /// Validates the structural invariants of this configuration.
    ///
    /// Pattern rules are syntax-checked when the scorer compiles them;
    /// this covers everything else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.thresholds;
        if !(t.genuine_max < t.medium_min && t.medium_min < t.fake_min && t.fake_min <= 100) {
            return Err(ConfigError::UnorderedThresholds {
                genuine_max: t.genuine_max,
                medium_min: t.medium_min,
                fake_min: t.fake_min,
            });
        }

        let weights: [(&'static str, u8); 8] = [
            ("unverified_weight", self.unverified_weight),
            ("short_content.weight", self.short_content.weight),
            ("padded_content.weight", self.padded_content.weight),
            ("pattern_score_cap", self.pattern_score_cap),
            ("spam_phrase_weight", self.spam_phrase_weight),
            ("spam_score_cap", self.spam_score_cap),
            ("social_proof_weight", self.social_proof_weight),
            ("repetition.weight", self.repetition.weight),
        ];
        for (name, weight) in weights {
            if weight > 100 {
                return Err(ConfigError::WeightOutOfRange { name, weight });
            }
        }
        for rule in &self.patterns {
            if rule.weight > 100 {
                return Err(ConfigError::WeightOutOfRange {
                    name: "patterns[].weight",
                    weight: rule.weight,
                });
            }
        }

        if self.patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }

        let ratio = self.repetition.max_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::InvalidRepetitionRatio(ratio));
        }

        Ok(())
    }

    fn standard_positive_words() -> HashSet<String> {
        [
            "good",
            "great",
            "excellent",
            "amazing",
            "awesome",
            "fantastic",
            "wonderful",
            "outstanding",
            "superb",
            "brilliant",
            "perfect",
            "love",
            "recommend",
            "satisfied",
            "happy",
            "pleased",
            "impressed",
            "solid",
            "reliable",
            "quality",
            "comfortable",
            "smooth",
            "fast",
            "responsive",
            "beautiful",
            "crisp",
            "sharp",
            "premium",
            "exceptional",
            "remarkable",
            "incredible",
            "effective",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn standard_negative_words() -> HashSet<String> {
        [
            "bad",
            "terrible",
            "awful",
            "horrible",
            "worst",
            "hate",
            "disappointed",
            "poor",
            "useless",
            "broken",
            "slow",
            "expensive",
            "frustrating",
            "annoying",
            "uncomfortable",
            "unreliable",
            "problem",
            "issue",
            "defective",
            "cheap",
            "overpriced",
            "limited",
            "insufficient",
            "struggle",
            "lacks",
            "missing",
            "fail",
            "failure",
            "junk",
            "waste",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn compact_positive_words() -> HashSet<String> {
        [
            "good",
            "great",
            "excellent",
            "amazing",
            "awesome",
            "fantastic",
            "wonderful",
            "outstanding",
            "superb",
            "brilliant",
            "perfect",
            "love",
            "recommend",
            "satisfied",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn compact_negative_words() -> HashSet<String> {
        [
            "bad",
            "terrible",
            "awful",
            "horrible",
            "worst",
            "hate",
            "disappointed",
            "poor",
            "useless",
            "broken",
            "slow",
            "expensive",
            "frustrating",
            "annoying",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self::standard()
    }
}
