//! Book types for the Bookshelf SDK.
//!
//! Provides the catalog entry type and its create/update payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A book in the catalog.
///
/// The server is the source of truth for `id`; the client never assigns or
/// rewrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Server-assigned book ID.
    pub id: String,

    /// Title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// ISBN-13, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Back-cover description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// Year of first publication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,

    /// Genre label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Payload for creating a book.
///
/// Same shape as [`Book`] minus the server-assigned `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    /// Title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// ISBN-13, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Back-cover description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// Year of first publication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,

    /// Genre label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl NewBook {
    /// Creates a payload with the required fields only.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: None,
            description: None,
            cover_url: None,
            published_year: None,
            genre: None,
        }
    }
}

/// Partial update for a book.
///
/// Fields left as `None` are omitted from the request body and remain
/// untouched on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New author name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// New ISBN-13.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// New publication year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,

    /// New genre label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl BookPatch {
    /// Returns true if the patch carries no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.isbn.is_none()
            && self.description.is_none()
            && self.cover_url.is_none()
            && self.published_year.is_none()
            && self.genre.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_book() -> Book {
        Book {
            id: "book-1".to_string(),
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            isbn: Some("9780441478125".to_string()),
            description: None,
            cover_url: None,
            published_year: Some(1969),
            genre: Some("science fiction".to_string()),
        }
    }

    #[test]
    fn test_book_display() {
        let book = create_test_book();
        assert_eq!(
            book.to_string(),
            "The Left Hand of Darkness by Ursula K. Le Guin"
        );
    }

    #[test]
    fn test_book_serde_camel_case() {
        let book = create_test_book();
        let json = serde_json::to_value(&book).expect("serialize");
        assert_eq!(json["id"], "book-1");
        assert_eq!(json["publishedYear"], 1969);
        assert!(json.get("coverUrl").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_book_deserialize() {
        let json = r#"{
            "id": "b2",
            "title": "Piranesi",
            "author": "Susanna Clarke",
            "publishedYear": 2020
        }"#;
        let book: Book = serde_json::from_str(json).expect("deserialize");
        assert_eq!(book.id, "b2");
        assert_eq!(book.published_year, Some(2020));
        assert!(book.isbn.is_none());
    }

    #[test]
    fn test_new_book_has_no_id() {
        let input = NewBook::new("Piranesi", "Susanna Clarke");
        let json = serde_json::to_value(&input).expect("serialize");
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Piranesi");
    }

    #[test]
    fn test_book_patch_skips_unset_fields() {
        let patch = BookPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).expect("serialize");
        assert_eq!(json, r#"{"title":"Renamed"}"#);
    }

    #[test]
    fn test_book_patch_is_empty() {
        assert!(BookPatch::default().is_empty());
        let patch = BookPatch {
            genre: Some("fantasy".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
