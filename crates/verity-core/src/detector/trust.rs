//! Threshold-band trust classification.
//!
//! Maps a suspicion score to a classification and confidence level via
//! ordered threshold bands. The bands partition 0..=100 with no gaps and
//! no overlaps, so every score has exactly one verdict:
//!
//! - above `fake_min`: Fake, high confidence
//! - above `medium_min`: Suspicious, medium confidence
//! - above `genuine_max`: Suspicious, low confidence
//! - otherwise: Genuine, high confidence

use super::{Classification, Confidence, TrustVerdict};
use crate::config::TrustThresholds;

/// Threshold-band classifier for suspicion scores.
///
/// Thresholds are expected to be validated (strictly ascending within
/// 0..=100) before construction; `DetectionConfig::validate` enforces
/// this for the engine pipeline.
#[derive(Debug, Clone)]
pub struct TrustClassifier {
    thresholds: TrustThresholds,
}

impl TrustClassifier {
    /// Creates a classifier over the given threshold bands.
    pub fn new(thresholds: TrustThresholds) -> Self {
        Self { thresholds }
    }

    /// Classifies a suspicion score into a trust band with confidence.
    pub fn classify(&self, score: u8) -> TrustVerdict {
        let t = self.thresholds;
        if score > t.fake_min {
            TrustVerdict {
                classification: Classification::Fake,
                confidence: Confidence::High,
            }
        } else if score > t.medium_min {
            TrustVerdict {
                classification: Classification::Suspicious,
                confidence: Confidence::Medium,
            }
        } else if score > t.genuine_max {
            TrustVerdict {
                classification: Classification::Suspicious,
                confidence: Confidence::Low,
            }
        } else {
            TrustVerdict {
                classification: Classification::Genuine,
                confidence: Confidence::High,
            }
        }
    }

    /// Returns the thresholds this classifier was built with.
    pub fn thresholds(&self) -> TrustThresholds {
        self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectionConfig;

    fn classifier() -> TrustClassifier {
        TrustClassifier::new(DetectionConfig::standard().thresholds)
    }

    #[test]
    fn low_scores_are_genuine() {
        let c = classifier();
        for score in [0, 10, 25] {
            let verdict = c.classify(score);
            assert_eq!(verdict.classification, Classification::Genuine);
            assert_eq!(verdict.confidence, Confidence::High);
        }
    }

    #[test]
    fn mid_scores_are_suspicious_low() {
        let c = classifier();
        for score in [26, 35, 45] {
            let verdict = c.classify(score);
            assert_eq!(verdict.classification, Classification::Suspicious);
            assert_eq!(verdict.confidence, Confidence::Low);
        }
    }

    #[test]
    fn upper_mid_scores_are_suspicious_medium() {
        let c = classifier();
        for score in [46, 60, 70] {
            let verdict = c.classify(score);
            assert_eq!(verdict.classification, Classification::Suspicious);
            assert_eq!(verdict.confidence, Confidence::Medium);
        }
    }

    #[test]
    fn high_scores_are_fake() {
        let c = classifier();
        for score in [71, 85, 100] {
            let verdict = c.classify(score);
            assert_eq!(verdict.classification, Classification::Fake);
            assert_eq!(verdict.confidence, Confidence::High);
        }
    }

    #[test]
    fn bands_partition_the_scale() {
        // Every score lands in exactly one band, and band changes happen
        // only at the configured thresholds.
        let c = classifier();
        let mut previous = c.classify(0);
        for score in 1..=100u8 {
            let verdict = c.classify(score);
            if verdict != previous {
                assert!(
                    score == 26 || score == 46 || score == 71,
                    "unexpected band change at score {score}"
                );
            }
            previous = verdict;
        }
    }

    #[test]
    fn compact_thresholds_shift_bands() {
        let c = TrustClassifier::new(DetectionConfig::compact().thresholds);
        assert_eq!(c.classify(61).classification, Classification::Fake);
        assert_eq!(c.classify(60).classification, Classification::Suspicious);
        assert_eq!(c.classify(36).classification, Classification::Suspicious);
        assert_eq!(c.classify(35).classification, Classification::Genuine);
    }
}
