use crate::collection::cursor::DocumentCursor;
use crate::collection::matcher::{matches_flat, matches_recursive};
use crate::collection::{Document, FindOptions};
use crate::common::Value;
use crate::errors::{StoreError, StoreResult};
use im::Vector;
use std::sync::Arc;

/// What `upsert_one` did with the incoming document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A matching document at this position was replaced.
    Replaced(usize),
    /// Nothing matched; the document was appended.
    Inserted,
}

/// A named, insertion-ordered sequence of documents.
///
/// `Collection` holds no lock of its own. The store wraps each collection in a
/// read-write lock and calls these methods with the appropriate guard held, so
/// each method runs as one atomic step.
///
/// Documents live in a persistent vector: taking a snapshot for a cursor is
/// O(1), and later writes copy only the touched chunks, never the documents a
/// snapshot still refers to.
pub struct Collection {
    name: String,
    id_field: Arc<str>,
    documents: Vector<Document>,
}

impl Collection {
    pub(crate) fn new(name: &str, id_field: Arc<str>) -> Self {
        Collection {
            name: name.to_string(),
            id_field,
            documents: Vector::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents matching `query` under the flat predicate.
    pub fn count(&self, query: &Document) -> usize {
        self.documents
            .iter()
            .filter(|doc| matches_flat(doc, query))
            .count()
    }

    /// Opens a cursor over a snapshot of the current contents.
    pub fn find(&self, query: &Document, options: FindOptions) -> DocumentCursor {
        DocumentCursor::new(self.documents.clone(), query.clone(), options)
    }

    /// First document matching `query` under the recursive predicate.
    pub fn find_one(&self, query: &Document) -> Option<Document> {
        self.documents
            .iter()
            .find(|doc| matches_recursive(doc, query))
            .cloned()
    }

    /// Appends `document` unless its identity collides with a stored one.
    pub fn insert_one(&mut self, document: Document) -> StoreResult<()> {
        self.ensure_unique(&document)?;
        self.documents.push_back(document);
        Ok(())
    }

    /// Appends all `documents` in order, or none of them.
    ///
    /// Every document is checked against the contents present before the call.
    /// Identities repeated inside the batch itself are not checked.
    pub fn insert(&mut self, documents: Vec<Document>) -> StoreResult<usize> {
        for document in &documents {
            self.ensure_unique(document)?;
        }

        let inserted = documents.len();
        self.documents.extend(documents);
        Ok(inserted)
    }

    /// Replaces the first document matching `query` under the recursive
    /// predicate, or falls back to [`Collection::insert_one`].
    pub fn upsert_one(&mut self, document: Document, query: &Document) -> StoreResult<UpsertOutcome> {
        let position = self
            .documents
            .iter()
            .position(|doc| matches_recursive(doc, query));

        match position {
            Some(index) => {
                self.documents.set(index, document);
                Ok(UpsertOutcome::Replaced(index))
            }
            None => {
                self.insert_one(document)?;
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    /// Merges `patch` into every document matching `query` under the
    /// recursive predicate. Identity uniqueness is not enforced here.
    pub fn update_many(&mut self, query: &Document, patch: &Document) -> usize {
        let mut updated = 0;
        for doc in self.documents.iter_mut() {
            if matches_recursive(doc, query) {
                doc.merge(patch);
                updated += 1;
            }
        }
        updated
    }

    /// Removes every document matching `query` under the flat predicate.
    pub fn delete(&mut self, query: &Document) -> usize {
        let before = self.documents.len();
        self.documents.retain(|doc| !matches_flat(doc, query));
        before - self.documents.len()
    }

    fn ensure_unique(&self, document: &Document) -> StoreResult<()> {
        let id = match document.get(&self.id_field) {
            None | Some(Value::Null) => return Ok(()),
            Some(id) => id,
        };

        if self
            .documents
            .iter()
            .any(|doc| doc.get(&self.id_field) == Some(id))
        {
            log::error!(
                "Duplicate key error: {} {} already exists in collection {}",
                self.id_field,
                id,
                self.name
            );
            return Err(StoreError::duplicate_key(id));
        }
        Ok(())
    }
}
