//! Review input record.

use serde::{Deserialize, Serialize};

/// A single consumer review handed to the engine.
///
/// Fields absent from a source record deserialize to documented defaults
/// (empty text, rating 0, unverified, zero votes) rather than failing,
/// so upstream data quality issues never surface as errors here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review headline. May be empty.
    #[serde(default)]
    pub title: String,
    /// Review body. May be empty.
    #[serde(default)]
    pub content: String,
    /// Star rating in 1..=5. 0 means the source record carried none.
    #[serde(default)]
    pub rating: u8,
    /// Whether the purchase is confirmed.
    #[serde(default)]
    pub verified: bool,
    /// Helpful-vote count.
    #[serde(default)]
    pub helpful_votes: u32,
}

impl Review {
    /// Creates a new review record.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        rating: u8,
        verified: bool,
        helpful_votes: u32,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            rating,
            verified,
            helpful_votes,
        }
    }

    /// Lowercased title and body joined with a single space.
    ///
    /// Shared view for the text-based suspicion signals.
    pub(crate) fn full_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let review: Review = serde_json::from_str(r#"{"title": "Great product"}"#).unwrap();
        assert_eq!(review.title, "Great product");
        assert_eq!(review.content, "");
        assert_eq!(review.rating, 0);
        assert!(!review.verified);
        assert_eq!(review.helpful_votes, 0);
    }

    #[test]
    fn empty_record_deserializes() {
        let review: Review = serde_json::from_str("{}").unwrap();
        assert_eq!(review, Review::default());
    }

    #[test]
    fn full_text_lowercases_and_joins() {
        let review = Review::new("Great Laptop", "Battery LIFE is solid", 4, true, 3);
        assert_eq!(review.full_text(), "great laptop battery life is solid");
    }

    #[test]
    fn full_text_with_empty_title() {
        let review = Review::new("", "Works fine", 3, true, 0);
        assert_eq!(review.full_text(), " works fine");
    }

    #[test]
    fn serde_round_trip() {
        let review = Review::new("Title", "Content body", 5, true, 12);
        let json = serde_json::to_string(&review).unwrap();
        let back: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(review, back);
    }
}
