//! Collections and documents for schema-less data storage.
//!
//! # Documents
//!
//! A [`Document`] is an insertion-ordered map from field name to [`crate::common::Value`].
//! Values nest: a field may hold another document or an array.
//!
//! ```rust,ignore
//! use docstore::doc;
//!
//! let user = doc! {
//!     _id: "u1",
//!     name: "Alice",
//!     address: { city: "NYC" },
//! };
//! ```
//!
//! # Collections
//!
//! A [`Collection`] is an ordered sequence of documents. It implements the
//! operation bodies; the store adds locking and lazy creation on top.
//!
//! # Matching
//!
//! Queries are documents too. See [`matcher`] for the two containment
//! predicates and which operation uses which.

mod collection;
mod cursor;
mod document;
mod find_options;
pub mod matcher;
mod projection;

pub use collection::*;
pub use cursor::DocumentCursor;
pub use document::*;
pub use find_options::*;
pub use projection::Projection;
