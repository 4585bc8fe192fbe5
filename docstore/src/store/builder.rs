use crate::errors::{StoreError, StoreResult};
use crate::store::{DocumentStore, StoreConfig};

/// Builder for creating and configuring a [`DocumentStore`].
///
/// Configuration errors are captured as they happen and returned from
/// [`DocumentStoreBuilder::open`], so the builder chain itself never fails.
///
/// # Examples
///
/// ```rust,ignore
/// use docstore::store::DocumentStore;
///
/// let store = DocumentStore::builder().open()?;
///
/// let store = DocumentStore::builder()
///     .id_field("key")
///     .initial_capacity(8)
///     .open()?;
/// ```
#[derive(Default)]
pub struct DocumentStoreBuilder {
    error: Option<StoreError>,
    store_config: StoreConfig,
}

impl DocumentStoreBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        DocumentStoreBuilder {
            error: None,
            store_config: StoreConfig::new(),
        }
    }

    /// Sets the identity field checked for uniqueness on insert.
    pub fn id_field(mut self, id_field: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.store_config.set_id_field(id_field) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Reserves room for `capacity` collections.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.store_config.set_initial_capacity(capacity);
        self
    }

    /// Opens a started, empty store, or returns the first configuration error.
    pub fn open(self) -> StoreResult<DocumentStore> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let store = DocumentStore::with_config(self.store_config);
        store.start();
        Ok(store)
    }
}
