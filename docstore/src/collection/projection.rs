use crate::collection::Document;
use crate::common::{Value, PROJECTION_INCLUDE};
use crate::errors::{ErrorKind, StoreError, StoreResult};

/// A field-inclusion filter applied to documents before they are returned.
///
/// A projection names fields together with an inclusion flag. Projecting a
/// document keeps only the fields that are present in the document, named in
/// the projection and flagged for inclusion. The result keeps the document's
/// field order, not the projection's.
///
/// # Examples
///
/// ```rust,ignore
/// use docstore::collection::Projection;
/// use docstore::doc;
///
/// // {field: 1} form
/// let projection = Projection::from_document(&doc!{ name: 1, age: 0 });
///
/// // list-of-names form
/// let projection = Projection::include(["name", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    fields: Vec<(String, bool)>,
}

impl Projection {
    /// Builds a projection from a `{field: flag}` document.
    ///
    /// A field is included when its flag equals `1` (any numeric width) or is
    /// `true`. Every other flag excludes the field.
    pub fn from_document(spec: &Document) -> Projection {
        let fields = spec
            .iter()
            .map(|(field, flag)| (field.clone(), is_include_flag(flag)))
            .collect();
        Projection { fields }
    }

    /// Builds a projection that includes every named field.
    pub fn include<I, S>(fields: I) -> Projection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection {
            fields: fields.into_iter().map(|it| (it.into(), true)).collect(),
        }
    }

    /// Builds a projection from a dynamically typed value: either a
    /// `{field: flag}` document or an array of field names.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::InvalidArgument] for any other value, or for an
    /// array holding something other than strings.
    pub fn from_value(spec: &Value) -> StoreResult<Projection> {
        match spec {
            Value::Document(doc) => Ok(Projection::from_document(doc)),
            Value::Array(names) => {
                let mut fields = Vec::with_capacity(names.len());
                for name in names {
                    match name.as_string() {
                        Some(name) => fields.push((name.clone(), true)),
                        None => {
                            log::error!("Projection field name must be a string, found {}", name);
                            return Err(StoreError::new(
                                &format!("Projection field name must be a string, found {}", name),
                                ErrorKind::InvalidArgument,
                            ));
                        }
                    }
                }
                Ok(Projection { fields })
            }
            _ => {
                log::error!("Projection must be a document or an array of field names, found {}", spec);
                Err(StoreError::new(
                    "Projection must be a document or an array of field names",
                    ErrorKind::InvalidArgument,
                ))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `field` is named and flagged for inclusion.
    pub fn includes(&self, field: &str) -> bool {
        self.fields
            .iter()
            .any(|(name, include)| *include && name == field)
    }

    /// Returns a new document holding only the included fields of `doc`.
    pub fn apply(&self, doc: &Document) -> Document {
        doc.iter()
            .filter(|(field, _)| self.includes(field))
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect()
    }
}

impl From<Document> for Projection {
    fn from(spec: Document) -> Self {
        Projection::from_document(&spec)
    }
}

impl From<&Document> for Projection {
    fn from(spec: &Document) -> Self {
        Projection::from_document(spec)
    }
}

fn is_include_flag(flag: &Value) -> bool {
    match flag {
        Value::Bool(include) => *include,
        _ => flag.is_number() && *flag == Value::I64(PROJECTION_INCLUDE),
    }
}
