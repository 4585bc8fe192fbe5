//! Configuration for a document store.

use crate::common::DOC_ID;
use crate::errors::{ErrorKind, StoreError, StoreResult};
use std::sync::Arc;

/// Settings a [`crate::store::DocumentStore`] is opened with.
///
/// # Examples
///
/// ```rust,ignore
/// use docstore::store::DocumentStore;
///
/// let store = DocumentStore::builder()
///     .id_field("_id")
///     .initial_capacity(16)
///     .open()?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    id_field: Arc<str>,
    initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreConfig {
    /// Creates a configuration with `_id` as identity field.
    pub fn new() -> Self {
        StoreConfig {
            id_field: Arc::from(DOC_ID),
            initial_capacity: 0,
        }
    }

    /// Name of the field whose value must be unique within a collection.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    pub(crate) fn shared_id_field(&self) -> Arc<str> {
        self.id_field.clone()
    }

    /// Sets the identity field.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::InvalidOperation] if the name is empty.
    pub fn set_id_field(&mut self, id_field: &str) -> StoreResult<()> {
        if id_field.is_empty() {
            log::error!("Identity field name cannot be empty");
            return Err(StoreError::new(
                "Identity field name cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }
        self.id_field = Arc::from(id_field);
        Ok(())
    }

    /// Number of collections to reserve room for up front.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn set_initial_capacity(&mut self, capacity: usize) {
        self.initial_capacity = capacity;
    }
}
