use crate::collection::{Document, DocumentCursor, FindOptions, UpsertOutcome};
use crate::errors::StoreResult;
use crate::store::DocumentStore;

/// Abstract memory interface a document store is consumed through.
///
/// # Purpose
/// Lets components depend on a memory backend without naming the concrete
/// store, so they can be handed an `Arc<dyn SymbolicMemory>`.
///
/// # Key Responsibilities
/// - **Lifecycle**: reset the memory with `start` and `stop`
/// - **Reads**: count, lazily find and find a single document
/// - **Writes**: insert, upsert, update and delete documents
///
/// # Thread Safety
/// Implementers must be `Send + Sync`; every method takes `&self`.
pub trait SymbolicMemory: Send + Sync {
    /// Initializes the memory to empty.
    fn start(&self);

    /// Clears the memory.
    fn stop(&self);

    /// Counts documents whose top-level fields contain `query`.
    fn count(&self, collection: &str, query: &Document) -> StoreResult<usize>;

    /// Lazily yields documents containing `query` at every depth.
    fn find(&self, collection: &str, query: &Document, options: FindOptions) -> StoreResult<DocumentCursor>;

    /// First document containing `query` at every depth.
    fn find_one(&self, collection: &str, query: &Document) -> StoreResult<Option<Document>>;

    /// Appends one document.
    fn insert_one(&self, collection: &str, record: &Document) -> StoreResult<()>;

    /// Appends all documents, or none.
    fn insert(&self, collection: &str, records: &[Document]) -> StoreResult<()>;

    /// Replaces the first match or appends.
    fn upsert_one(&self, collection: &str, record: &Document, query: &Document) -> StoreResult<UpsertOutcome>;

    /// Merges `patch` into every match.
    fn update_many(&self, collection: &str, query: &Document, patch: &Document) -> StoreResult<usize>;

    /// Removes every document whose top-level fields contain `query`.
    fn delete(&self, collection: &str, query: &Document) -> StoreResult<usize>;
}

impl SymbolicMemory for DocumentStore {
    fn start(&self) {
        DocumentStore::start(self)
    }

    fn stop(&self) {
        DocumentStore::stop(self)
    }

    fn count(&self, collection: &str, query: &Document) -> StoreResult<usize> {
        DocumentStore::count(self, collection, query)
    }

    fn find(&self, collection: &str, query: &Document, options: FindOptions) -> StoreResult<DocumentCursor> {
        DocumentStore::find(self, collection, query, options)
    }

    fn find_one(&self, collection: &str, query: &Document) -> StoreResult<Option<Document>> {
        DocumentStore::find_one(self, collection, query)
    }

    fn insert_one(&self, collection: &str, record: &Document) -> StoreResult<()> {
        DocumentStore::insert_one(self, collection, record)
    }

    fn insert(&self, collection: &str, records: &[Document]) -> StoreResult<()> {
        DocumentStore::insert(self, collection, records)
    }

    fn upsert_one(&self, collection: &str, record: &Document, query: &Document) -> StoreResult<UpsertOutcome> {
        DocumentStore::upsert_one(self, collection, record, query)
    }

    fn update_many(&self, collection: &str, query: &Document, patch: &Document) -> StoreResult<usize> {
        DocumentStore::update_many(self, collection, query, patch)
    }

    fn delete(&self, collection: &str, query: &Document) -> StoreResult<usize> {
        DocumentStore::delete(self, collection, query)
    }
}
