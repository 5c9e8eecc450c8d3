//! Reading list types for the Bookshelf SDK.
//!
//! Provides the user-curated list type and its create/update payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-curated reading list.
///
/// `id`, `created_at`, and `updated_at` are assigned by the server on
/// create and refreshed on every update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingList {
    /// Server-assigned list ID.
    pub id: String,

    /// List name.
    pub name: String,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// IDs of the books on the list, in display order.
    #[serde(default)]
    pub items: Vec<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ReadingList {
    /// Returns true if the list contains the given book.
    #[must_use]
    pub fn contains(&self, book_id: &str) -> bool {
        self.items.iter().any(|id| id == book_id)
    }

    /// Number of books on the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ReadingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} books)", self.name, self.items.len())
    }
}

/// Payload for creating a reading list.
///
/// Same shape as [`ReadingList`] minus the server-assigned fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReadingList {
    /// List name.
    pub name: String,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// IDs of the books to seed the list with.
    #[serde(default)]
    pub items: Vec<String>,
}

impl NewReadingList {
    /// Creates an empty list payload with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            items: Vec::new(),
        }
    }
}

/// Partial update for a reading list.
///
/// Fields left as `None` are omitted from the request body and remain
/// untouched on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListPatch {
    /// New list name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Replacement set of book IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}
