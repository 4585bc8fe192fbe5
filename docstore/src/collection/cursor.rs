use crate::collection::matcher::matches_recursive;
use crate::collection::{Document, FindOptions, Projection};
use crate::common::SortableFields;
use im::Vector;
use std::iter::FusedIterator;

/// A lazy, single-pass cursor over the result of a `find`.
///
/// The cursor iterates a snapshot of the collection taken when `find` was
/// called. Snapshotting a persistent vector is O(1) and shares structure with
/// the live collection; writes performed after `find` returned are not visible
/// through the cursor, and the cursor never blocks writers.
///
/// Matching, skipping, projection and copying happen one document at a time
/// as the cursor is advanced. When sorting is requested, the whole matching
/// set is collected and sorted on the first call to `next`.
///
/// A cursor cannot be rewound. Call `find` again to iterate a second time.
pub struct DocumentCursor {
    snapshot: Vector<Document>,
    position: usize,
    query: Document,
    projection: Option<Projection>,
    sort_by: Option<SortableFields>,
    sorted: Option<std::vec::IntoIter<Document>>,
    to_skip: usize,
}

impl DocumentCursor {
    pub(crate) fn new(snapshot: Vector<Document>, query: Document, options: FindOptions) -> Self {
        let to_skip = options.skip_count();
        DocumentCursor {
            snapshot,
            position: 0,
            query,
            projection: options.projection,
            sort_by: options.sort_by,
            sorted: None,
            to_skip,
        }
    }

    /// A cursor that yields nothing, used for missing collections.
    pub(crate) fn empty() -> Self {
        DocumentCursor::new(Vector::new(), Document::new(), FindOptions::default())
    }

    /// Consumes the cursor and returns its first document, if any.
    pub fn first(mut self) -> Option<Document> {
        self.next()
    }

    fn next_match(&mut self) -> Option<Document> {
        if let Some(sort_by) = self.sort_by.take() {
            let mut matches: Vec<Document> = self
                .snapshot
                .iter()
                .filter(|doc| matches_recursive(doc, &self.query))
                .cloned()
                .collect();
            // stable, so equal keys keep collection order
            matches.sort_by(|a, b| sort_by.compare(a, b));
            self.sorted = Some(matches.into_iter());
            self.snapshot = Vector::new();
        }

        if let Some(sorted) = self.sorted.as_mut() {
            return sorted.next();
        }

        while self.position < self.snapshot.len() {
            let doc = &self.snapshot[self.position];
            self.position += 1;
            if matches_recursive(doc, &self.query) {
                return Some(doc.clone());
            }
        }
        None
    }
}

impl Iterator for DocumentCursor {
    type Item = Document;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let doc = self.next_match()?;
            if self.to_skip > 0 {
                self.to_skip -= 1;
                continue;
            }

            return Some(match &self.projection {
                Some(projection) => projection.apply(&doc),
                None => doc,
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.sorted {
            Some(sorted) => sorted.len(),
            None => self.snapshot.len().saturating_sub(self.position),
        };
        (0, Some(remaining))
    }
}

impl FusedIterator for DocumentCursor {}
