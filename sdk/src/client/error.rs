//! Client error types.
//!
//! Provides error types for HTTP client operations. The API contract
//! exposes exactly one failure signal per operation: a fixed message
//! naming what failed. Not-found on a single-book fetch is a valid
//! outcome, not an error, and never appears here.

use std::fmt;

/// The client operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// GET `/books`.
    FetchBooks,
    /// GET `/books/{id}`.
    FetchBook,
    /// POST `/books`.
    CreateBook,
    /// PUT `/books/{id}`.
    UpdateBook,
    /// DELETE `/books/{id}`.
    DeleteBook,
    /// POST `/recommendations`.
    GetRecommendations,
    /// GET `/reading-lists`.
    FetchReadingLists,
    /// POST `/reading-lists`.
    CreateReadingList,
    /// PUT `/reading-lists/{id}`.
    UpdateReadingList,
    /// DELETE `/reading-lists/{id}`.
    DeleteReadingList,
    /// GET `/books/{bookId}/reviews`.
    FetchReviews,
    /// POST `/books/{bookId}/reviews`.
    CreateReview,
}

impl Operation {
    /// Human-readable phrase naming the operation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FetchBooks => "fetch books",
            Self::FetchBook => "fetch book",
            Self::CreateBook => "create book",
            Self::UpdateBook => "update book",
            Self::DeleteBook => "delete book",
            Self::GetRecommendations => "get recommendations",
            Self::FetchReadingLists => "fetch reading lists",
            Self::CreateReadingList => "create reading list",
            Self::UpdateReadingList => "update reading list",
            Self::DeleteReadingList => "delete reading list",
            Self::FetchReviews => "fetch reviews",
            Self::CreateReview => "create review",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client errors.
#[derive(Debug)]
pub enum ClientError {
    /// The operation's HTTP exchange failed: transport error or
    /// non-success status, deliberately not distinguished.
    Failed(Operation),

    /// Success status but the body could not be deserialized.
    Deserialization(String),

    /// Invalid configuration.
    InvalidConfig(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(operation) => write!(f, "failed to {operation}"),
            Self::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}
