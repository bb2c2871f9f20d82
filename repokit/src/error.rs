//! Error types for DAO operations
//!
//! Two failure classes exist: argument validation errors raised before any
//! query is issued, and store errors surfaced by the underlying driver. Store
//! errors keep the original [`sqlx::Error`] as their source so callers can
//! inspect the untranslated driver failure.
//!
//! # Example
//!
//! ```rust
//! use repokit::error::DaoError;
//!
//! let error = DaoError::invalid_argument("amount must be greater than zero");
//! assert!(error.is_validation());
//! ```

use std::fmt;

use thiserror::Error;

/// Result type for DAO operations
pub type DaoResult<T> = std::result::Result<T, DaoError>;

/// Operation being performed when a DAO error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaoOperation {
    /// Fetching a single entity by identifier
    GetById,
    /// Fetching every entity of the configured type
    GetAll,
    /// Counting rows for a paginated listing
    Count,
    /// Fetching one page of a paginated listing
    GetPage,
    /// Removing an entity
    Delete,
    /// Building and persisting a new entity
    Create,
    /// Establishing a database connection
    Connect,
}

impl fmt::Display for DaoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetById => write!(f, "get_by_id"),
            Self::GetAll => write!(f, "get_all"),
            Self::Count => write!(f, "count"),
            Self::GetPage => write!(f, "get_page"),
            Self::Delete => write!(f, "delete"),
            Self::Create => write!(f, "create"),
            Self::Connect => write!(f, "connect"),
        }
    }
}

/// Error returned by DAO operations
///
/// # Example
///
/// ```rust
/// use repokit::error::DaoError;
///
/// let error = DaoError::invalid_argument("amount must be greater than zero");
/// assert_eq!(
///     error.to_string(),
///     "invalid argument: amount must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum DaoError {
    /// An argument failed validation before any store access
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// The underlying store reported a failure
    ///
    /// The driver error is preserved untranslated as [`source`](std::error::Error::source).
    #[error("store error during {operation}: {source}")]
    Store {
        /// The operation being performed when the store failed
        operation: DaoOperation,
        /// The untranslated driver error
        #[source]
        source: sqlx::Error,
    },

    /// Configuration loading failed
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl DaoError {
    /// Create a validation error for an invalid argument
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wrap a driver error with the operation that triggered it
    pub fn store(operation: DaoOperation, source: sqlx::Error) -> Self {
        Self::Store { operation, source }
    }

    /// Whether this error was raised by argument validation, before any
    /// store access
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether this error came from the underlying store
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(format!("{}", DaoOperation::GetById), "get_by_id");
        assert_eq!(format!("{}", DaoOperation::GetAll), "get_all");
        assert_eq!(format!("{}", DaoOperation::Count), "count");
        assert_eq!(format!("{}", DaoOperation::GetPage), "get_page");
        assert_eq!(format!("{}", DaoOperation::Delete), "delete");
        assert_eq!(format!("{}", DaoOperation::Create), "create");
        assert_eq!(format!("{}", DaoOperation::Connect), "connect");
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = DaoError::invalid_argument("page overflowed");
        assert_eq!(error.to_string(), "invalid argument: page overflowed");
    }

    #[test]
    fn test_invalid_argument_is_validation() {
        let error = DaoError::invalid_argument("bad");
        assert!(error.is_validation());
        assert!(!error.is_store());
    }

    #[test]
    fn test_store_error_display_includes_operation() {
        let error = DaoError::store(DaoOperation::Create, sqlx::Error::RowNotFound);
        let display = error.to_string();
        assert!(display.starts_with("store error during create:"));
        assert!(error.is_store());
        assert!(!error.is_validation());
    }

    #[test]
    fn test_store_error_preserves_source() {
        use std::error::Error as _;

        let error = DaoError::store(DaoOperation::GetAll, sqlx::Error::PoolClosed);
        let source = error.source().expect("store errors carry a source");
        assert!(source.downcast_ref::<sqlx::Error>().is_some());
    }
}
