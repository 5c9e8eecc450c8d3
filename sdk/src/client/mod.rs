//! HTTP client for the Bookshelf catalog API.
//!
//! This module provides a type-safe HTTP client for the books,
//! recommendations, reading-lists, and reviews resources.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf_sdk::client::{BookshelfClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BookshelfClient::with_base_url("https://api.bookshelf.example/v1")?;
//!
//!     // Browse the catalog anonymously
//!     let books = client.list_books().await?;
//!     println!("Found {} books", books.len());
//!
//!     // A missing book is a value, not an error
//!     if client.get_book("no-such-id").await?.is_none() {
//!         println!("not in the catalog");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, Operation};
pub use http::BookshelfClient;
