//! Core types for the Bookshelf SDK.
//!
//! This module provides the entity types exchanged with the Bookshelf
//! catalog API. They are plain records: the client passes them through
//! unmodified and the server owns every generated field.

pub mod book;
pub mod reading_list;
pub mod recommendation;
pub mod review;

pub use book::{Book, BookPatch, NewBook};
pub use reading_list::{NewReadingList, ReadingList, ReadingListPatch};
pub use recommendation::BookRecommendation;
pub use review::{NewReview, Review};
