//! Recommendation types for the Bookshelf SDK.
//!
//! Provides the per-query recommendation record. Recommendations are
//! ephemeral: the server produces them for a single query and the client
//! never persists them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single recommended book for a free-text query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecommendation {
    /// Title of the recommended book.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Why the server recommends this book for the query.
    pub rationale: String,
}

impl fmt::Display for BookRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_display() {
        let rec = BookRecommendation {
            title: "The Dispossessed".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            rationale: "Anarchist moon physics.".to_string(),
        };
        assert_eq!(rec.to_string(), "The Dispossessed by Ursula K. Le Guin");
    }

    #[test]
    fn test_recommendation_serde() {
        let json = r#"{
            "title": "The Dispossessed",
            "author": "Ursula K. Le Guin",
            "rationale": "You liked utopias with footnotes."
        }"#;
        let rec: BookRecommendation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(rec.title, "The Dispossessed");
        assert_eq!(rec.rationale, "You liked utopias with footnotes.");
    }
}
