//! # DocStore - In-Process Document Store
//!
//! DocStore is a small, thread-safe, collection-oriented document store that
//! lives entirely in memory. It keeps named collections of schema-less
//! documents and answers queries expressed as partial documents.
//!
//! ## Key Features
//!
//! - **Schema-less**: documents are ordered maps of nested [`common::Value`]s
//! - **Query by example**: a query is a document the record must contain
//! - **Identity**: inserts reject a second document with the same `_id`
//! - **Lazy reads**: `find` returns a single-pass cursor with optional
//!   projection, sorting and skipping
//! - **Isolation**: documents are copied on the way in and on the way out
//! - **Concurrency**: per-collection read-write locks under a store-wide gate
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docstore::doc;
//! use docstore::collection::projected;
//! use docstore::store::DocumentStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DocumentStore::builder().open()?;
//!
//! store.insert_one("users", &doc!{ _id: "u1", name: "Alice", address: { city: "NYC" } })?;
//!
//! let found = store.find_one("users", &doc!{ address: { city: "NYC" } })?;
//! assert!(found.is_some());
//!
//! let names: Vec<_> = store
//!     .find("users", &doc!{}, projected(doc!{ name: 1 }))?
//!     .collect();
//! assert_eq!(names, vec![doc!{ name: "Alice" }]);
//!
//! store.stop();
//! # Ok(())
//! # }
//! ```
//!
//! ## Matching
//!
//! Two containment predicates are used, see [`collection::matcher`]:
//!
//! - `count` and `delete` compare top-level fields only, nested documents
//!   must be equal as a whole
//! - `find`, `find_one`, `upsert_one` and `update_many` descend into nested
//!   documents, so a query may name only part of a nested document
//!
//! ## Modules
//!
//! - [`collection`]: documents, collections, cursors and find options
//! - [`common`]: values, sort orders and constants
//! - [`errors`]: error types
//! - [`store`]: the store, its builder and configuration

pub mod collection;
pub mod common;
pub mod errors;
pub mod store;

pub use collection::{Document, DocumentCursor, FindOptions, Projection, UpsertOutcome};
pub use errors::{ErrorKind, StoreError, StoreResult};
pub use store::{DocumentStore, DocumentStoreBuilder, SymbolicMemory};
