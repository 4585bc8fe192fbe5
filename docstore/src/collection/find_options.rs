use crate::collection::{Document, Projection};
use crate::common::{SortOrder, SortableFields};
use crate::errors::StoreResult;

/// Options for controlling `find` operations.
///
/// With the defaults (no projection, no sort, no skip) matching documents are
/// produced in collection order, one at a time, fully lazily. Options combine
/// by method chaining.
///
/// # Examples
///
/// ```rust,ignore
/// use docstore::collection::FindOptions;
/// use docstore::common::SortOrder;
///
/// let options = FindOptions::new()
///     .project(doc!{ name: 1 })
///     .sort_by("age", SortOrder::Descending)
///     .skip(10);
///
/// let options = order_by("name", SortOrder::Ascending);
/// let options = skip_by(5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub(crate) projection: Option<Projection>,
    pub(crate) sort_by: Option<SortableFields>,
    pub(crate) skip: Option<usize>,
}

/// Creates `FindOptions` that keeps only the fields included by `projection`.
pub fn projected(projection: impl Into<Projection>) -> FindOptions {
    FindOptions::new().project(projection)
}

/// Creates `FindOptions` with sorting by a field.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> FindOptions {
    FindOptions::new().sort_by(field_name, sort_order)
}

/// Creates `FindOptions` that skips a number of results.
pub fn skip_by(skip: usize) -> FindOptions {
    FindOptions::new().skip(skip)
}

impl FindOptions {
    /// Creates a new `FindOptions` with default settings.
    pub fn new() -> FindOptions {
        FindOptions::default()
    }

    /// Restricts returned documents to the fields included by `projection`.
    ///
    /// An empty projection is treated as no projection at all.
    pub fn project(mut self, projection: impl Into<Projection>) -> Self {
        let projection = projection.into();
        self.projection = if projection.is_empty() {
            None
        } else {
            Some(projection)
        };
        self
    }

    /// Adds a sort field. Repeated calls add tie-breakers.
    pub fn sort_by(mut self, field_name: &str, sort_order: SortOrder) -> Self {
        let fields = self.sort_by.take().unwrap_or_default();
        self.sort_by = Some(fields.add_sorted_field(field_name.to_string(), sort_order));
        self
    }

    /// Sorts by a `{field: 1 | -1}` document.
    pub fn sort_by_document(mut self, spec: &Document) -> StoreResult<Self> {
        let fields = SortableFields::from_document(spec)?;
        self.sort_by = if fields.is_empty() { None } else { Some(fields) };
        Ok(self)
    }

    /// Skips the first `skip` matching documents.
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn sort_fields(&self) -> Option<&SortableFields> {
        self.sort_by.as_ref()
    }

    pub fn skip_count(&self) -> usize {
        self.skip.unwrap_or(0)
    }
}

impl From<Projection> for FindOptions {
    fn from(projection: Projection) -> Self {
        projected(projection)
    }
}
