use crate::collection::Document;
use crate::common::Value;
use crate::errors::{ErrorKind, StoreError, StoreResult};
use std::cmp::Ordering;

/// Specifies the direction for sorting documents.
///
/// Used with [`crate::collection::FindOptions::sort_by`]:
/// ```text
/// let options = FindOptions::new().sort_by("age", SortOrder::Descending);
/// let cursor = store.find("users", &doc!{}, options)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A)
    Descending,
}

/// An ordered list of top-level fields to sort query results by.
///
/// Earlier fields take precedence; later fields break ties. A document that
/// lacks a sort field is ordered as if the field held `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortableFields {
    sorting_order: Vec<(String, SortOrder)>,
}

impl SortableFields {
    pub fn new() -> SortableFields {
        SortableFields {
            sorting_order: Vec::new(),
        }
    }

    /// Builds sort fields from a `{field: 1 | -1}` document.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::InvalidArgument] if a direction is anything other
    /// than `1` or `-1`.
    pub fn from_document(spec: &Document) -> StoreResult<SortableFields> {
        let mut fields = SortableFields::new();
        for (field, direction) in spec.iter() {
            let order = match direction.as_integer() {
                Some(1) => SortOrder::Ascending,
                Some(-1) => SortOrder::Descending,
                _ => {
                    log::error!("Invalid sort direction {} for field {}", direction, field);
                    return Err(StoreError::new(
                        &format!("Invalid sort direction {} for field {}", direction, field),
                        ErrorKind::InvalidArgument,
                    ));
                }
            };
            fields = fields.add_sorted_field(field.clone(), order);
        }
        Ok(fields)
    }

    pub fn add_sorted_field(mut self, field_name: String, sort_order: SortOrder) -> Self {
        self.sorting_order.push((field_name, sort_order));
        self
    }

    pub fn sorting_order(&self) -> &[(String, SortOrder)] {
        &self.sorting_order
    }

    pub fn is_empty(&self) -> bool {
        self.sorting_order.is_empty()
    }

    /// Compares two documents by the configured fields.
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        for (field, order) in &self.sorting_order {
            let left = a.get(field).unwrap_or(&Value::Null);
            let right = b.get(field).unwrap_or(&Value::Null);
            let ordering = match order {
                SortOrder::Ascending => left.compare(right),
                SortOrder::Descending => right.compare(left),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    #[test]
    fn test_from_document() {
        let fields = SortableFields::from_document(&doc! { age: (-1), name: 1 }).unwrap();
        assert_eq!(
            fields.sorting_order(),
            &[
                ("age".to_string(), SortOrder::Descending),
                ("name".to_string(), SortOrder::Ascending)
            ]
        );
    }

    #[test]
    fn test_from_document_rejects_bad_direction() {
        let err = SortableFields::from_document(&doc! { age: "up" }).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_compare_with_tie_breaker() {
        let fields = SortableFields::new()
            .add_sorted_field("age".to_string(), SortOrder::Ascending)
            .add_sorted_field("name".to_string(), SortOrder::Descending);

        let a = doc! { age: 30, name: "Bob" };
        let b = doc! { age: 30, name: "Alice" };
        let c = doc! { age: 25, name: "Zed" };

        assert_eq!(fields.compare(&a, &b), Ordering::Less);
        assert_eq!(fields.compare(&c, &a), Ordering::Less);
    }

    #[test]
    fn test_missing_field_sorts_as_null() {
        let fields = SortableFields::new().add_sorted_field("age".to_string(), SortOrder::Ascending);
        assert_eq!(fields.compare(&doc! {}, &doc! { age: 1 }), Ordering::Less);
    }
}
