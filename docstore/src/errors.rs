use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

use crate::common::Value;

/// Error kinds for store operations.
///
/// Not-found conditions are never errors in this crate: a missing collection or
/// an unmatched query yields an empty cursor, `None` or a zero count.
///
/// # Examples
///
/// ```rust,ignore
/// use docstore::errors::{StoreError, ErrorKind, StoreResult};
///
/// fn example() -> StoreResult<()> {
///     Err(StoreError::new("Collection name cannot be empty", ErrorKind::InvalidArgument))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A stored document already carries the `_id` of an incoming document
    DuplicateKey,
    /// The caller broke the operation contract (empty collection name, malformed projection)
    InvalidArgument,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::DuplicateKey => write!(f, "Duplicate key"),
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type of the document store.
///
/// `StoreError` carries a message, a kind, an optional cause and a backtrace
/// captured at construction. Duplicate key errors also carry the offending
/// identity value, available through [`StoreError::duplicate_id`].
///
/// # Examples
///
/// ```rust,ignore
/// use docstore::errors::{StoreError, ErrorKind};
///
/// let err = StoreError::new("Collection name cannot be empty", ErrorKind::InvalidArgument);
/// let wrapped = StoreError::new_with_cause("Failed to open store", ErrorKind::InvalidOperation, err);
/// ```
#[derive(Clone)]
pub struct StoreError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<StoreError>>,
    duplicate_id: Option<Value>,
    backtrace: Arc<Backtrace>,
}

impl StoreError {
    /// Creates a new `StoreError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        StoreError {
            message: message.to_string(),
            error_kind,
            cause: None,
            duplicate_id: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a new `StoreError` that wraps `cause`.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: StoreError) -> Self {
        StoreError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            duplicate_id: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a [`ErrorKind::DuplicateKey`] error naming the colliding id.
    pub fn duplicate_key(id: &Value) -> Self {
        let mut error = StoreError::new(
            &format!("Duplicate key error: _id {} already exists.", id),
            ErrorKind::DuplicateKey,
        );
        error.duplicate_id = Some(id.clone());
        error
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&StoreError> {
        self.cause.as_deref()
    }

    /// The identity value that collided, for duplicate key errors.
    pub fn duplicate_id(&self) -> Option<&Value> {
        self.duplicate_id.as_ref()
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for StoreError {
    fn from(msg: &str) -> Self {
        StoreError::new(msg, ErrorKind::InternalError)
    }
}
