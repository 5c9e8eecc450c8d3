//! Review types for the Bookshelf SDK.
//!
//! Provides the book review type and its create payload.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review of a book.
///
/// Always scoped to a book: `book_id` names the parent collection and the
/// server assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Server-assigned review ID.
    pub id: String,

    /// ID of the reviewed book.
    pub book_id: String,

    /// Star rating, 1 through 5.
    pub rating: u8,

    /// Review text.
    pub text: String,

    /// Display name of the reviewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5 for book {}", self.rating, self.book_id)
    }
}

/// Payload for creating a review.
///
/// `book_id` selects the collection the review is posted into; the caller
/// must set it to the target book before the create call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    /// ID of the reviewed book.
    pub book_id: String,

    /// Star rating, 1 through 5.
    pub rating: u8,

    /// Review text.
    pub text: String,

    /// Display name of the reviewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
}

impl NewReview {
    /// Creates a review payload for the given book.
    #[must_use]
    pub fn new(book_id: impl Into<String>, rating: u8, text: impl Into<String>) -> Self {
        Self {
            book_id: book_id.into(),
            rating,
            text: text.into(),
            reviewer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_review() -> Review {
        Review {
            id: "rev-1".to_string(),
            book_id: "book-1".to_string(),
            rating: 4,
            text: "Slow start, strong finish.".to_string(),
            reviewer: Some("ada".to_string()),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp"),
        }
    }

    #[test]
    fn test_review_display() {
        let review = create_test_review();
        assert_eq!(review.to_string(), "4/5 for book book-1");
    }

    #[test]
    fn test_review_serde_camel_case() {
        let review = create_test_review();
        let json = serde_json::to_value(&review).expect("serialize");
        assert_eq!(json["bookId"], "book-1");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_new_review_carries_book_id() {
        let input = NewReview::new("b7", 5, "Loved it.");
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(json["bookId"], "b7");
        assert!(json.get("id").is_none());
        assert!(json.get("reviewer").is_none());
    }
}
