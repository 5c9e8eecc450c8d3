//! Bookshelf SDK - Rust client library for the Bookshelf catalog API.
//!
//! This crate wraps the catalog's REST resources — books, recommendations,
//! reading lists, and reviews — behind a typed async client. A bearer
//! token is attached whenever the configured [`SessionProvider`] yields
//! one; without a session, reads still work anonymously.
//!
//! # Entity Types
//!
//! - [`Book`], [`NewBook`], [`BookPatch`] — catalog entries
//! - [`ReadingList`], [`NewReadingList`], [`ReadingListPatch`] — curated lists
//! - [`Review`], [`NewReview`] — per-book reviews
//! - [`BookRecommendation`] — ephemeral query results
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf_sdk::{BookshelfClient, NewReview, StaticSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BookshelfClient::from_env()?
//!         .with_session_provider(StaticSession::new("id-token"));
//!
//!     let review = NewReview::new("book-1", 5, "A keeper.");
//!     client.create_review(&review).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod notify;
pub mod types;

pub use auth::{SessionError, SessionProvider, StaticSession};
pub use client::{BookshelfClient, ClientConfig, ClientError, Operation};
pub use notify::{LogNotifier, Notifier};
pub use types::{
    Book, BookPatch, BookRecommendation, NewBook, NewReadingList, NewReview, ReadingList,
    ReadingListPatch, Review,
};
