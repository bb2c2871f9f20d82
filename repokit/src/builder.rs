//! Builder capability producing a new entity
//!
//! A [`Builder`] is a single-method factory: it yields one fully-formed
//! entity on demand, with no partial states. Any `FnOnce() -> E` closure is
//! a builder; fallible construction implements the trait directly and its
//! failure propagates unchanged through [`Dao::create`](crate::dao::Dao::create).
//!
//! # Example
//!
//! ```rust
//! use repokit::builder::Builder;
//!
//! struct Greeting(String);
//!
//! // Closures build infallibly
//! let built = (|| Greeting("hello".to_string())).build().unwrap();
//! assert_eq!(built.0, "hello");
//! ```

use crate::error::DaoResult;

/// Factory capability producing one fully-formed entity
pub trait Builder<E> {
    /// Produce the entity to be persisted
    ///
    /// # Errors
    ///
    /// Construction failures are returned unchanged to the `create` caller.
    fn build(self) -> DaoResult<E>;
}

impl<E, F> Builder<E> for F
where
    F: FnOnce() -> E,
{
    fn build(self) -> DaoResult<E> {
        Ok(self())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DaoError;

    #[derive(Debug, PartialEq)]
    struct Note {
        body: String,
    }

    #[test]
    fn test_closure_builder() {
        let builder = || Note {
            body: "draft".to_string(),
        };
        let note = builder.build().unwrap();
        assert_eq!(
            note,
            Note {
                body: "draft".to_string()
            }
        );
    }

    struct FailingBuilder;

    impl Builder<Note> for FailingBuilder {
        fn build(self) -> DaoResult<Note> {
            Err(DaoError::invalid_argument("note body missing"))
        }
    }

    #[test]
    fn test_fallible_builder_propagates() {
        let error = FailingBuilder.build().unwrap_err();
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "invalid argument: note body missing");
    }
}
