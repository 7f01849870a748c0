//! Trust verdicts and signal breakdowns for scored reviews.

use serde::{Deserialize, Serialize};

/// Coarse trust verdict for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The review looks authentic.
    Genuine,
    /// The review shows enough fraud signals to warrant scrutiny.
    Suspicious,
    /// The review is very likely fabricated.
    Fake,
}

impl Classification {
    /// Returns all classifications.
    pub fn all() -> &'static [Classification] {
        &[
            Classification::Genuine,
            Classification::Suspicious,
            Classification::Fake,
        ]
    }

    /// Returns a human-readable name for this classification.
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Genuine => "Genuine",
            Classification::Suspicious => "Suspicious",
            Classification::Fake => "Fake",
        }
    }
}

/// Qualitative certainty attached to a trust verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The score sits near a band boundary.
    Low,
    /// The score is comfortably inside its band.
    Medium,
    /// The verdict is clear-cut.
    High,
}

impl Confidence {
    /// Returns a human-readable name for this confidence level.
    pub fn name(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

/// A trust classification together with its confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustVerdict {
    /// The trust band the score fell into.
    pub classification: Classification,
    /// How certain the verdict is.
    pub confidence: Confidence,
}

/// One independently computed contributor to the suspicion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// The purchase is not confirmed.
    Unverified,
    /// The content is too short to be substantive.
    ShortContent,
    /// The content is long enough to look artificially padded.
    PaddedContent,
    /// One or more suspicious text patterns matched.
    SuspiciousPattern,
    /// One or more literal spam phrases matched.
    SpamPhrase,
    /// An extreme rating with zero corroborating votes.
    NoSocialProof,
    /// A single token dominates the text.
    RepetitiveLanguage,
}

impl Signal {
    /// Returns all signals.
    pub fn all() -> &'static [Signal] {
        &[
            Signal::Unverified,
            Signal::ShortContent,
            Signal::PaddedContent,
            Signal::SuspiciousPattern,
            Signal::SpamPhrase,
            Signal::NoSocialProof,
            Signal::RepetitiveLanguage,
        ]
    }

    /// Returns a human-readable name for this signal.
    pub fn name(&self) -> &'static str {
        match self {
            Signal::Unverified => "Unverified Purchase",
            Signal::ShortContent => "Short Content",
            Signal::PaddedContent => "Padded Content",
            Signal::SuspiciousPattern => "Suspicious Pattern",
            Signal::SpamPhrase => "Spam Phrase",
            Signal::NoSocialProof => "No Social Proof",
            Signal::RepetitiveLanguage => "Repetitive Language",
        }
    }

    /// Returns a description of what this signal indicates.
    pub fn description(&self) -> &'static str {
        match self {
            Signal::Unverified => "The purchase behind the review is not confirmed",
            Signal::ShortContent => "The review body is too short to be substantive",
            Signal::PaddedContent => "The review body looks artificially padded",
            Signal::SuspiciousPattern => "The text matches known promotional or scripted patterns",
            Signal::SpamPhrase => "The text contains canned spam phrasing",
            Signal::NoSocialProof => "A polarizing rating with no helpful votes to back it",
            Signal::RepetitiveLanguage => "A single word dominates the text unnaturally",
        }
    }
}

/// A signal that fired while scoring a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalHit {
    /// The signal that fired.
    pub signal: Signal,
    /// Points the signal contributed, after any per-category cap.
    pub points: u8,
    /// Matched text, phrase, or token behind the hit (if any).
    pub detail: Option<String>,
}

impl SignalHit {
    /// Creates a new signal hit.
    pub fn new(signal: Signal, points: u8, detail: Option<String>) -> Self {
        Self {
            signal,
            points,
            detail,
        }
    }
}

/// Outcome of suspicion scoring for one review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Aggregate suspicion score, clamped to 0..=100.
    pub score: u8,
    /// The signals that fired, with their point contributions.
    pub signals: Vec<SignalHit>,
}

impl ScoreResult {
    /// Returns true if any signal fired.
    pub fn has_signals(&self) -> bool {
        !self.signals.is_empty()
    }

    /// Returns the hit that contributed the most points, if any.
    pub fn strongest(&self) -> Option<&SignalHit> {
        self.signals.iter().max_by_key(|h| h.points)
    }

    /// Returns the hit for a specific signal, if it fired.
    pub fn hit_for(&self, signal: Signal) -> Option<&SignalHit> {
        self.signals.iter().find(|h| h.signal == signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_all_returns_all_variants() {
        assert_eq!(Classification::all().len(), 3);
    }

    #[test]
    fn signal_all_returns_all_variants() {
        assert_eq!(Signal::all().len(), 7);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Classification::Genuine.name(), "Genuine");
        assert_eq!(Confidence::Medium.name(), "Medium");
        assert_eq!(Signal::NoSocialProof.name(), "No Social Proof");
    }

    #[test]
    fn empty_result_has_no_signals() {
        let result = ScoreResult::default();
        assert!(!result.has_signals());
        assert!(result.strongest().is_none());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn strongest_returns_max_points() {
        let result = ScoreResult {
            score: 55,
            signals: vec![
                SignalHit::new(Signal::Unverified, 30, None),
                SignalHit::new(Signal::ShortContent, 25, None),
            ],
        };
        assert_eq!(result.strongest().unwrap().signal, Signal::Unverified);
    }

    #[test]
    fn hit_for_finds_signal() {
        let result = ScoreResult {
            score: 25,
            signals: vec![SignalHit::new(
                Signal::SpamPhrase,
                25,
                Some("best ever".to_string()),
            )],
        };
        assert!(result.hit_for(Signal::SpamPhrase).is_some());
        assert!(result.hit_for(Signal::Unverified).is_none());
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&Classification::Suspicious).unwrap(),
            "\"suspicious\""
        );
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Signal::RepetitiveLanguage).unwrap(),
            "\"repetitive_language\""
        );
    }
}
