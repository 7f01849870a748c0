//! Weighted multi-signal suspicion scoring.
//!
//! Computes a 0..=100 suspicion score for one review from six independent
//! signals: verification status, content length, suspicious regex patterns,
//! literal spam phrases, social proof, and repetitive language. Pattern
//! rules compile once at construction; scoring itself never fails.

use std::collections::HashMap;

use regex::{Regex, RegexSet};

use super::{ScoreResult, Signal, SignalHit};
use crate::config::{ConfigError, DetectionConfig};
use crate::review::Review;

/// Weighted multi-signal suspicion scorer.
///
/// Pure function of the review and the configuration it was built with:
/// identical input always yields an identical result.
pub struct SuspicionScorer {
    config: DetectionConfig,
    /// Fast multi-pattern matcher over all pattern rules.
    pattern_set: RegexSet,
    /// Individual regexes, index-aligned with `config.patterns`, for
    /// extracting matched text.
    patterns: Vec<Regex>,
    /// Spam phrases pre-lowercased for substring checks.
    spam_phrases: Vec<String>,
}

impl SuspicionScorer {
    /// Builds a scorer from the given configuration, validating it and
    /// compiling its pattern rules.
    pub fn new(config: &DetectionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let patterns = config
            .patterns
            .iter()
            .map(|rule| {
                Regex::new(&rule.pattern).map_err(|source| ConfigError::InvalidPattern {
                    id: rule.id.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pattern_set = RegexSet::new(config.patterns.iter().map(|rule| &rule.pattern))
            .map_err(|source| ConfigError::InvalidPattern {
                id: "pattern set".to_string(),
                source,
            })?;

        let spam_phrases = config
            .spam_phrases
            .iter()
            .map(|phrase| phrase.to_lowercase())
            .collect();

        Ok(Self {
            config: config.clone(),
            pattern_set,
            patterns,
            spam_phrases,
        })
    }

    /// Scores the given review, returning the clamped score and the
    /// signals that fired.
    pub fn score(&self, review: &Review) -> ScoreResult {
        let full_text = review.full_text();
        let mut hits = Vec::new();

        // Verification status
        if !review.verified {
            hits.push(SignalHit::new(
                Signal::Unverified,
                self.config.unverified_weight,
                None,
            ));
        }

        // Content length; short and padded are mutually exclusive
        let word_count = review.content.split_whitespace().count();
        if word_count < self.config.short_content.words {
            hits.push(SignalHit::new(
                Signal::ShortContent,
                self.config.short_content.weight,
                None,
            ));
        } else if word_count > self.config.padded_content.words {
            hits.push(SignalHit::new(
                Signal::PaddedContent,
                self.config.padded_content.weight,
                None,
            ));
        }

        // Suspicious patterns, summed then capped
        let matched: Vec<usize> = self.pattern_set.matches(&full_text).into_iter().collect();
        if !matched.is_empty() {
            let raw: u32 = matched
                .iter()
                .map(|&idx| u32::from(self.config.patterns[idx].weight))
                .sum();
            let points = raw.min(u32::from(self.config.pattern_score_cap)) as u8;
            let matched_text: Vec<&str> = matched
                .iter()
                .filter_map(|&idx| self.patterns[idx].find(&full_text).map(|m| m.as_str()))
                .collect();
            hits.push(SignalHit::new(
                Signal::SuspiciousPattern,
                points,
                Some(matched_text.join(", ")),
            ));
        }

        // Spam phrases, summed then capped
        let spam: Vec<&str> = self
            .spam_phrases
            .iter()
            .filter(|phrase| full_text.contains(phrase.as_str()))
            .map(|phrase| phrase.as_str())
            .collect();
        if !spam.is_empty() {
            let raw = spam.len() as u32 * u32::from(self.config.spam_phrase_weight);
            let points = raw.min(u32::from(self.config.spam_score_cap)) as u8;
            hits.push(SignalHit::new(
                Signal::SpamPhrase,
                points,
                Some(spam.join(", ")),
            ));
        }

        // Social proof: polarizing rating with zero corroboration
        if review.helpful_votes == 0 && matches!(review.rating, 1 | 5) {
            hits.push(SignalHit::new(
                Signal::NoSocialProof,
                self.config.social_proof_weight,
                None,
            ));
        }

        // Repetitive language over the full text
        let tokens: Vec<&str> = full_text.split_whitespace().collect();
        if tokens.len() > self.config.repetition.min_words {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in &tokens {
                *counts.entry(token).or_insert(0) += 1;
            }
            // Tie-break alphabetically so identical input reports an
            // identical dominant token.
            if let Some((token, count)) = counts
                .into_iter()
                .max_by_key(|&(token, count)| (count, std::cmp::Reverse(token)))
            {
                let ratio = count as f32 / tokens.len() as f32;
                if ratio > self.config.repetition.max_ratio {
                    hits.push(SignalHit::new(
                        Signal::RepetitiveLanguage,
                        self.config.repetition.weight,
                        Some(token.to_string()),
                    ));
                }
            }
        }

        let raw: u32 = hits.iter().map(|hit| u32::from(hit.points)).sum();
        let score = raw.min(100) as u8;

        tracing::trace!(score, signals = hits.len(), "scored review");

        ScoreResult {
            score,
            signals: hits,
        }
    }
}
