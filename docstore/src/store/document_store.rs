use crate::collection::{Collection, Document, DocumentCursor, FindOptions, UpsertOutcome};
use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::store::{DocumentStoreBuilder, StoreConfig};
use dashmap::DashMap;
use itertools::Itertools;
use parking_lot::RwLock;
use std::sync::Arc;

/// An in-process, collection-oriented document store.
///
/// `DocumentStore` maps collection names to ordered sequences of schema-less
/// [`Document`]s. Every operation addresses a single named collection. Reads
/// on a missing collection behave as if it were empty; writes create it.
///
/// The store is an explicit object: clones share the same state through an
/// `Arc`, and separately built stores are fully independent.
///
/// # Isolation
///
/// Documents handed to the store are copied before they are stored, and every
/// document handed back is a copy. Callers never hold references into the
/// store.
///
/// # Concurrency
///
/// - a store-wide gate is held shared by every operation and exclusively by
///   [`DocumentStore::start`] and [`DocumentStore::stop`]
/// - each collection sits behind its own read-write lock: `count`, `find` and
///   `find_one` take it shared, writes take it exclusively for the whole
///   operation, so no operation observes another one half done
/// - [`DocumentStore::find`] snapshots the collection under the read lock and
///   releases it before returning; the cursor iterates the snapshot
///
/// # Examples
///
/// ```rust,ignore
/// use docstore::doc;
/// use docstore::store::DocumentStore;
///
/// let store = DocumentStore::builder().open()?;
/// store.insert_one("users", &doc!{ _id: "u1", name: "Alice", address: { city: "NYC" } })?;
///
/// let alice = store.find_one("users", &doc!{ address: { city: "NYC" } })?;
/// assert!(alice.is_some());
///
/// store.update_many("users", &doc!{ name: "Alice" }, &doc!{ name: "Alicia" })?;
/// assert_eq!(store.count("users", &doc!{ name: "Alicia" })?, 1);
/// ```
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<DocumentStoreInner>,
}

struct DocumentStoreInner {
    store_config: StoreConfig,
    gate: RwLock<()>,
    collections: DashMap<String, Arc<RwLock<Collection>>>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Creates a new [`DocumentStoreBuilder`].
    pub fn builder() -> DocumentStoreBuilder {
        DocumentStoreBuilder::new()
    }

    /// Creates an empty store with the default configuration.
    pub fn new() -> Self {
        DocumentStore::with_config(StoreConfig::new())
    }

    pub(crate) fn with_config(store_config: StoreConfig) -> Self {
        let collections = DashMap::with_capacity(store_config.initial_capacity());
        DocumentStore {
            inner: Arc::new(DocumentStoreInner {
                store_config,
                gate: RwLock::new(()),
                collections,
            }),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.store_config
    }

    /// Initializes the store to empty. Waits for in-flight operations.
    pub fn start(&self) {
        let _gate = self.inner.gate.write();
        self.inner.collections.clear();
        log::debug!("Document store started");
    }

    /// Clears the store. Waits for in-flight operations.
    ///
    /// The store stays usable afterwards; it simply holds no collections.
    pub fn stop(&self) {
        let _gate = self.inner.gate.write();
        let dropped = self.inner.collections.len();
        self.inner.collections.clear();
        log::debug!("Document store stopped, {} collection(s) cleared", dropped);
    }

    /// Names of all collections created so far, sorted.
    pub fn collection_names(&self) -> Vec<String> {
        let _gate = self.inner.gate.read();
        self.inner
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .sorted()
            .collect()
    }

    pub fn has_collection(&self, collection: &str) -> bool {
        let _gate = self.inner.gate.read();
        self.inner.collections.contains_key(collection)
    }

    /// Counts documents whose top-level fields contain every pair of `query`.
    ///
    /// Nested documents in the query must equal the stored ones exactly.
    pub fn count(&self, collection: &str, query: &Document) -> StoreResult<usize> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        Ok(match self.existing(collection) {
            Some(handle) => handle.read().count(query),
            None => 0,
        })
    }

    /// Opens a lazy cursor over documents containing `query` at every depth.
    ///
    /// With default options the cursor yields matches in collection order.
    /// See [`FindOptions`] for projection, sorting and skipping.
    pub fn find(&self, collection: &str, query: &Document, options: FindOptions) -> StoreResult<DocumentCursor> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        Ok(match self.existing(collection) {
            Some(handle) => handle.read().find(query, options),
            None => DocumentCursor::empty(),
        })
    }

    /// Same as [`DocumentStore::find`] with default options.
    pub fn find_all(&self, collection: &str, query: &Document) -> StoreResult<DocumentCursor> {
        self.find(collection, query, FindOptions::new())
    }

    /// Returns a copy of the first document containing `query` at every depth.
    pub fn find_one(&self, collection: &str, query: &Document) -> StoreResult<Option<Document>> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        Ok(self
            .existing(collection)
            .and_then(|handle| handle.read().find_one(query)))
    }

    /// Appends a copy of `record`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DuplicateKey`] if a stored document has the same non-null
    /// identity value.
    pub fn insert_one(&self, collection: &str, record: &Document) -> StoreResult<()> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        let handle = self.get_or_create(collection);
        let mut guard = handle.write();
        guard.insert_one(record.clone())?;
        log::trace!("Inserted 1 document into {}", collection);
        Ok(())
    }

    /// Appends copies of all `records` in order, or none of them.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DuplicateKey`] naming the first record whose identity
    /// collides with an already stored document. Repeats within `records`
    /// are not detected.
    pub fn insert(&self, collection: &str, records: &[Document]) -> StoreResult<()> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        let handle = self.get_or_create(collection);
        let mut guard = handle.write();
        let inserted = guard.insert(records.to_vec())?;
        log::trace!("Inserted {} document(s) into {}", inserted, collection);
        Ok(())
    }

    /// Replaces the first document containing `query` with a copy of `record`,
    /// keeping its position; appends it when nothing matches.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DuplicateKey`] when nothing matches and the identity of
    /// `record` is already taken.
    pub fn upsert_one(&self, collection: &str, record: &Document, query: &Document) -> StoreResult<UpsertOutcome> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        let handle = self.get_or_create(collection);
        let mut guard = handle.write();
        let outcome = guard.upsert_one(record.clone(), query)?;
        log::trace!("Upserted into {}: {:?}", collection, outcome);
        Ok(outcome)
    }

    /// Merges `patch` into every document containing `query` at every depth.
    /// Returns the number of updated documents.
    pub fn update_many(&self, collection: &str, query: &Document, patch: &Document) -> StoreResult<usize> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        let updated = match self.existing(collection) {
            Some(handle) => handle.write().update_many(query, patch),
            None => 0,
        };
        log::trace!("Updated {} document(s) in {}", updated, collection);
        Ok(updated)
    }

    /// Removes every document whose top-level fields contain every pair of
    /// `query`. Returns the number of removed documents.
    pub fn delete(&self, collection: &str, query: &Document) -> StoreResult<usize> {
        validate_collection_name(collection)?;
        let _gate = self.inner.gate.read();
        let removed = match self.existing(collection) {
            Some(handle) => handle.write().delete(query),
            None => 0,
        };
        log::trace!("Deleted {} document(s) from {}", removed, collection);
        Ok(removed)
    }

    fn existing(&self, collection: &str) -> Option<Arc<RwLock<Collection>>> {
        self.inner
            .collections
            .get(collection)
            .map(|entry| entry.value().clone())
    }

    fn get_or_create(&self, collection: &str) -> Arc<RwLock<Collection>> {
        if let Some(handle) = self.existing(collection) {
            return handle;
        }

        let entry = self
            .inner
            .collections
            .entry(collection.to_string())
            .or_insert_with(|| {
                log::debug!("Creating collection {}", collection);
                Arc::new(RwLock::new(Collection::new(
                    collection,
                    self.inner.store_config.shared_id_field(),
                )))
            });
        entry.value().clone()
    }
}

fn validate_collection_name(collection: &str) -> StoreResult<()> {
    if collection.is_empty() {
        log::error!("Collection name cannot be empty");
        return Err(StoreError::new(
            "Collection name cannot be empty",
            ErrorKind::InvalidArgument,
        ));
    }
    Ok(())
}
