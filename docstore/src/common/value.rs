use crate::collection::Document;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

/// Compare two floats for equality, treating NaN as equal to NaN.
#[inline]
fn num_eq_float(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else {
        a == b
    }
}

/// Compare two floats with NaN sorted after every other number.
#[inline]
fn num_cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// A dynamically typed value held by a [Document] field.
///
/// The same representation is used for stored records, queries, patches and
/// projections. Scalars, sequences ([Value::Array]) and nested mappings
/// ([Value::Document]) may be nested to any depth.
///
/// Every variant owns its data, so `clone()` is a structural deep copy: the
/// clone shares nothing with the original and mutating one never affects the
/// other. This is what the store relies on to hand out isolated copies.
///
/// # Equality
/// - integers compare by numeric value across widths (`I32(1) == U64(1)`)
/// - floats compare across widths, and `NaN` equals `NaN`
/// - an integer equals a float with the same numeric value (`I64(1) == F64(1.0)`)
/// - documents compare field by field, arrays element by element
/// - values of different kinds are never equal
///
/// # Usage
/// ```text
/// let v1: Value = 42.into();
/// let v2 = Value::from("hello");
/// let doc = doc! { "age": 42, "name": "Alice" };
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Represents a null value.
    #[default]
    Null,
    /// Represents a boolean value.
    Bool(bool),
    /// Represents a signed 8-bit integer value.
    I8(i8),
    /// Represents an unsigned 8-bit integer value.
    U8(u8),
    /// Represents a signed 16-bit integer value.
    I16(i16),
    /// Represents an unsigned 16-bit integer value.
    U16(u16),
    /// Represents a signed 32-bit integer value.
    I32(i32),
    /// Represents an unsigned 32-bit integer value.
    U32(u32),
    /// Represents a signed 64-bit integer value.
    I64(i64),
    /// Represents an unsigned 64-bit integer value.
    U64(u64),
    /// Represents a 32-bit floating point value.
    F32(f32),
    /// Represents a 64-bit floating point value.
    F64(f64),
    /// Represents a character value.
    Char(char),
    /// Represents a string value.
    String(String),
    /// Represents a byte array value.
    Bytes(Vec<u8>),
    /// Represents an ordered sequence of values.
    Array(Vec<Value>),
    /// Represents a nested document.
    Document(Document),
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_debug_string(0))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_pretty_json(0))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_integer(), other.as_integer()) {
            return a == b;
        }

        if self.is_number() && other.is_number() {
            if let (Some(a), Some(b)) = (self.as_decimal(), other.as_decimal()) {
                return num_eq_float(a, b);
            }
        }

        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Document(a), Value::Document(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Creates a [Value] from anything convertible into one.
    #[inline]
    pub fn from<T: Into<Value>>(value: T) -> Value {
        value.into()
    }

    /// Creates a [Value::Array] from a vector of convertible items.
    pub fn from_vec<T: Into<Value>>(values: Vec<T>) -> Value {
        Value::Array(values.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn as_bool(&self) -> Option<&bool> {
        match self {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i32(&self) -> Option<&i32> {
        match self {
            Value::I32(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<&i64> {
        match self {
            Value::I64(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<&f64> {
        match self {
            Value::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the numeric value of any integer variant, widened to `i128`.
    #[inline]
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::I8(v) => Some(*v as i128),
            Value::U8(v) => Some(*v as i128),
            Value::I16(v) => Some(*v as i128),
            Value::U16(v) => Some(*v as i128),
            Value::I32(v) => Some(*v as i128),
            Value::U32(v) => Some(*v as i128),
            Value::I64(v) => Some(*v as i128),
            Value::U64(v) => Some(*v as i128),
            _ => None,
        }
    }

    /// Returns the numeric value of any number variant as `f64`.
    #[inline]
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            _ => self.as_integer().map(|v| v as f64),
        }
    }

    #[inline]
    pub fn as_char(&self) -> Option<&char> {
        match self {
            Value::Char(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the string value if the [Value] is [Value::String].
    #[inline]
    pub fn as_string(&self) -> Option<&String> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> Option<&Vec<u8>> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the nested document if the [Value] is [Value::Document].
    #[inline]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_document_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Document(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    /// Checks if the [Value] is an integer type.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.as_integer().is_some()
    }

    /// Checks if the [Value] is a floating point type.
    #[inline]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Value::F32(_) | Value::F64(_))
    }

    /// Checks if the [Value] is a number type.
    #[inline]
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_decimal()
    }

    /// Takes the value, replacing it with [Value::Null].
    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Null)
    }

    /// Total ordering used for sorting query results.
    ///
    /// Numbers compare numerically across variants. Values of different kinds
    /// are ordered by kind: null, bool, number, char/string, bytes, array,
    /// document. Documents fall back to comparing their rendered form.
    pub fn compare(&self, other: &Value) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_integer(), other.as_integer()) {
            return a.cmp(&b);
        }

        if self.is_number() && other.is_number() {
            if let (Some(a), Some(b)) = (self.as_decimal(), other.as_decimal()) {
                return num_cmp_float(a, b);
            }
        }

        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Char(a), Value::Char(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Char(a), Value::String(b)) => a.to_string().cmp(b),
            (Value::String(a), Value::Char(b)) => a.cmp(&b.to_string()),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    let ord = x.compare(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (Value::Document(a), Value::Document(b)) => a.to_string().cmp(&b.to_string()),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Char(_) | Value::String(_) => 3,
            Value::Bytes(_) => 4,
            Value::Array(_) => 5,
            Value::Document(_) => 6,
            _ => 2,
        }
    }

    pub(crate) fn to_pretty_json(&self, indent: usize) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(v) => v.to_string(),
            Value::I8(v) => v.to_string(),
            Value::U8(v) => v.to_string(),
            Value::I16(v) => v.to_string(),
            Value::U16(v) => v.to_string(),
            Value::I32(v) => v.to_string(),
            Value::U32(v) => v.to_string(),
            Value::I64(v) => v.to_string(),
            Value::U64(v) => v.to_string(),
            Value::F32(v) => v.to_string(),
            Value::F64(v) => v.to_string(),
            Value::Char(v) => format!("\"{}\"", v),
            Value::String(v) => format!("\"{}\"", v),
            Value::Document(v) => v.to_pretty_json(indent),
            Value::Array(v) => {
                let items: Vec<String> = v.iter().map(|it| it.to_pretty_json(indent + 2)).collect();
                wrap_items("[", "]", items, indent)
            }
            Value::Bytes(v) => {
                let items: Vec<String> = v.iter().map(|it| it.to_string()).collect();
                wrap_items("[", "]", items, indent)
            }
        }
    }

    pub(crate) fn to_debug_string(&self, indent: usize) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(v) => format!("bool({})", v),
            Value::I8(v) => format!("i8({})", v),
            Value::U8(v) => format!("u8({})", v),
            Value::I16(v) => format!("i16({})", v),
            Value::U16(v) => format!("u16({})", v),
            Value::I32(v) => format!("i32({})", v),
            Value::U32(v) => format!("u32({})", v),
            Value::I64(v) => format!("i64({})", v),
            Value::U64(v) => format!("u64({})", v),
            Value::F32(v) => format!("f32({})", v),
            Value::F64(v) => format!("f64({})", v),
            Value::Char(v) => format!("char(\"{}\")", v),
            Value::String(v) => format!("string(\"{}\")", v),
            Value::Document(v) => format!("object({})", v.to_debug_string(indent)),
            Value::Array(v) => {
                let items: Vec<String> = v.iter().map(|it| it.to_debug_string(indent + 2)).collect();
                format!("array({})", wrap_items("[", "]", items, indent))
            }
            Value::Bytes(v) => {
                let items: Vec<String> = v.iter().map(|it| it.to_string()).collect();
                format!("bytes({})", wrap_items("[", "]", items, indent))
            }
        }
    }
}

/// Lays out already rendered items one per line between `open` and `close`.
pub(crate) fn wrap_items(open: &str, close: &str, items: Vec<String>, indent: usize) -> String {
    if items.is_empty() {
        return format!("{}{}", open, close);
    }

    let indent_str = " ".repeat(indent + 2);
    let body = items
        .iter()
        .map(|item| format!("{}{}", indent_str, item))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{}\n{}\n{}{}", open, body, " ".repeat(indent), close)
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
    Document => Document,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&Document> for Value {
    fn from(value: &Document) -> Self {
        Value::Document(value.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::from_vec(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
