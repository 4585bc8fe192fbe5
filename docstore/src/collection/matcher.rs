//! Containment predicates between a query document and a stored record.
//!
//! Two predicates exist and they disagree on nested documents:
//!
//! - [`matches_flat`] compares the query's top-level pairs against the record's
//!   top-level pairs. A nested document in the query must equal the record's
//!   nested document exactly. Used by `count` and `delete`.
//! - [`matches_recursive`] descends into nested documents, so a query
//!   sub-document only has to be contained in the record's sub-document. Used
//!   by `find`, `find_one`, `upsert_one` and `update_many`.
//!
//! The empty query matches every record under both predicates.

use crate::collection::Document;
use crate::common::Value;

/// Returns `true` if every top-level `(key, value)` pair of `query` appears
/// verbatim in `record`.
pub fn matches_flat(record: &Document, query: &Document) -> bool {
    query
        .iter()
        .all(|(key, value)| record.get(key).is_some_and(|it| it == value))
}

/// Returns `true` if `record` contains `query` at every nesting depth.
///
/// For each `(key, value)` of the query the key must exist in the record. A
/// document value is matched recursively against the record's value, which
/// must itself be a document; any other value must be equal.
pub fn matches_recursive(record: &Document, query: &Document) -> bool {
    query.iter().all(|(key, expected)| match record.get(key) {
        None => false,
        Some(actual) => match expected {
            Value::Document(sub_query) => actual
                .as_document()
                .is_some_and(|sub_record| matches_recursive(sub_record, sub_query)),
            _ => actual == expected,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    fn alice() -> Document {
        doc! {
            _id: "u1",
            name: "Alice",
            address: { city: "NYC", zip: 10001 },
            tags: ["a", "b"],
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_flat(&alice(), &doc! {}));
        assert!(matches_recursive(&alice(), &doc! {}));
        assert!(matches_flat(&doc! {}, &doc! {}));
    }

    #[test]
    fn scalar_fields_match_under_both() {
        let query = doc! { name: "Alice", _id: "u1" };
        assert!(matches_flat(&alice(), &query));
        assert!(matches_recursive(&alice(), &query));
    }

    #[test]
    fn missing_key_never_matches() {
        let query = doc! { age: 30 };
        assert!(!matches_flat(&alice(), &query));
        assert!(!matches_recursive(&alice(), &query));
    }

    #[test]
    fn null_query_value_requires_present_null_field() {
        let record = doc! { a: (Value::Null) };
        assert!(matches_flat(&record, &doc! { a: (Value::Null) }));
        assert!(!matches_flat(&doc! {}, &doc! { a: (Value::Null) }));
        assert!(!matches_recursive(&doc! {}, &doc! { a: (Value::Null) }));
    }

    #[test]
    fn partial_nested_query_diverges() {
        let query = doc! { address: { city: "NYC" } };
        assert!(matches_recursive(&alice(), &query));
        assert!(!matches_flat(&alice(), &query));
    }

    #[test]
    fn exact_nested_query_matches_under_both() {
        let query = doc! { address: { zip: 10001, city: "NYC" } };
        assert!(matches_recursive(&alice(), &query));
        assert!(matches_flat(&alice(), &query));
    }

    #[test]
    fn recursive_predicate_descends_multiple_levels() {
        let record = doc! { a: { b: { c: 1, d: 2 }, e: 3 } };
        assert!(matches_recursive(&record, &doc! { a: { b: { c: 1 } } }));
        assert!(!matches_recursive(&record, &doc! { a: { b: { c: 2 } } }));
        assert!(matches_recursive(&record, &doc! { a: { b: {} } }));
    }

    #[test]
    fn recursive_predicate_needs_document_under_document_query() {
        let record = doc! { address: "NYC" };
        assert!(!matches_recursive(&record, &doc! { address: { city: "NYC" } }));
        assert!(!matches_recursive(&record, &doc! { address: {} }));
    }

    #[test]
    fn arrays_compare_by_equality() {
        assert!(matches_recursive(&alice(), &doc! { tags: ["a", "b"] }));
        assert!(!matches_recursive(&alice(), &doc! { tags: ["a"] }));
        assert!(!matches_flat(&alice(), &doc! { tags: ["b", "a"] }));
    }

    #[test]
    fn numbers_match_across_widths() {
        let record = doc! { n: (5u64) };
        assert!(matches_flat(&record, &doc! { n: 5 }));
        assert!(matches_recursive(&record, &doc! { n: (5.0f64) }));
    }
}
