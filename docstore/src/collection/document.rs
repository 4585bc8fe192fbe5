use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::common::{wrap_items, Value, DOC_ID};
use std::borrow::Cow;
use std::fmt::{Debug, Display};

type FieldVec = SmallVec<[String; 8]>;

/// A schema-less record: an insertion-ordered mapping from field name to [Value].
///
/// Field order follows insertion. Overwriting an existing field keeps its
/// position, new fields are appended and removing a field keeps the relative
/// order of the rest. Two documents are equal when they hold the same fields
/// with equal values, regardless of field order.
///
/// The field `_id` is the identity field. It is otherwise an ordinary field and
/// may hold any [Value]; the store only looks at it when checking uniqueness
/// on insert.
///
/// Cloning a document is a deep copy (see [Value]).
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    data: IndexMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of top-level fields.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates `value` with `key`, replacing any previous value in place.
    ///
    /// Any string is a valid field name, the empty string included, so a
    /// document built with `put` accepts the same keys as one collected from
    /// an iterator.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut doc = Document::new();
    /// doc.put("name", "Alice");
    /// doc.put("address", doc! { city: "NYC" });
    /// assert_eq!(doc.size(), 2);
    /// ```
    pub fn put<'a, T: Into<Value>>(&mut self, key: impl Into<Cow<'a, str>>, value: T) {
        self.data.insert(key.into().into_owned(), value.into());
    }

    /// Returns the value of a top-level field, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.data.get_mut(key)
    }

    /// Returns the value of the `_id` field, if present.
    pub fn id(&self) -> Option<&Value> {
        self.get(DOC_ID)
    }

    pub fn has_id(&self) -> bool {
        self.data.contains_key(DOC_ID)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.shift_remove(key)
    }

    /// Returns the top-level field names in order.
    pub fn fields(&self) -> FieldVec {
        self.data.keys().cloned().collect()
    }

    /// Copies every field of `other` into this document.
    ///
    /// Fields already present are overwritten in place, new fields are
    /// appended, fields absent from `other` are left untouched. This is a
    /// shallow, top-level merge: a nested document in `other` replaces the
    /// nested document here as a whole.
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.data.iter() {
            self.data.insert(key.clone(), value.clone());
        }
    }

    /// Iterates over `(field, value)` pairs in field order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.data.iter()
    }

    pub(crate) fn to_pretty_json(&self, indent: usize) -> String {
        let items = self
            .data
            .iter()
            .map(|(key, value)| format!("\"{}\": {}", key, value.to_pretty_json(indent + 2)))
            .collect();
        wrap_items("{", "}", items, indent)
    }

    pub(crate) fn to_debug_string(&self, indent: usize) -> String {
        let items = self
            .data
            .iter()
            .map(|(key, value)| format!("\"{}\": {}", key, value.to_debug_string(indent + 2)))
            .collect();
        wrap_items("{", "}", items, indent)
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_debug_string(0))
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_pretty_json(0))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Document {
            data: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Document] with JSON-like syntax.
///
/// # Examples
///
/// ```rust
/// use docstore::doc;
///
/// let empty = doc!{};
///
/// let user = doc!{
///     _id: "u1",
///     name: "Alice",
///     address: {
///         city: "NYC"
///     },
///     tags: ["admin", "user"]
/// };
/// assert_eq!(user.size(), 4);
///
/// let base = 100;
/// let with_expr = doc!{ "score": (base * 2) };
/// ```
#[macro_export]
macro_rules! doc {
    ({}) => {
        $crate::collection::Document::new()
    };

    () => {
        $crate::collection::Document::new()
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put($crate::collection::normalize(stringify!($key)), $crate::doc_value!($value));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
