//! Entity descriptor: the table and id column a DAO operates on
//!
//! The descriptor is an explicit configuration value handed to the DAO at
//! construction instead of being supplied through subclassing. Because the
//! descriptor's names are interpolated into SQL statements, they are
//! validated against SQL identifier rules when the descriptor is built.
//!
//! # Example
//!
//! ```rust
//! use repokit::descriptor::EntityDescriptor;
//!
//! let descriptor = EntityDescriptor::new("users", "id").unwrap();
//! assert_eq!(descriptor.table(), "users");
//! assert_eq!(descriptor.id_column(), "id");
//!
//! // Anything that is not a plain identifier is rejected
//! assert!(EntityDescriptor::new("users; DROP TABLE users", "id").is_err());
//! ```

use crate::entity::Entity;
use crate::error::{DaoError, DaoResult};

/// PostgreSQL caps identifier length at 63 bytes
const MAX_IDENTIFIER_LEN: usize = 63;

/// Table and id column names for one entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    table: String,
    id_column: String,
}

impl EntityDescriptor {
    /// Create a descriptor from explicit table and id column names
    ///
    /// # Errors
    ///
    /// Returns a validation error when either name is not a plain SQL
    /// identifier.
    pub fn new(table: impl Into<String>, id_column: impl Into<String>) -> DaoResult<Self> {
        let table = table.into();
        let id_column = id_column.into();
        validate_identifier(&table)?;
        validate_identifier(&id_column)?;
        Ok(Self { table, id_column })
    }

    /// Create a descriptor from an entity's declared table and id column
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let descriptor = EntityDescriptor::of::<User>()?;
    /// ```
    pub fn of<E: Entity>() -> DaoResult<Self> {
        Self::new(E::table(), E::id_column())
    }

    /// The table this descriptor points at
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The primary key column of the table
    pub fn id_column(&self) -> &str {
        &self.id_column
    }
}

/// Check that a name is a plain SQL identifier safe to interpolate
///
/// Accepts ASCII letters, digits, and underscores, not starting with a
/// digit, up to the PostgreSQL identifier length limit. Quoted or qualified
/// names are deliberately not supported.
pub(crate) fn validate_identifier(name: &str) -> DaoResult<()> {
    if name.is_empty() {
        return Err(DaoError::invalid_argument("identifier must not be empty"));
    }
    if name.len() > MAX_IDENTIFIER_LEN {
        return Err(DaoError::invalid_argument(format!(
            "identifier '{name}' exceeds {MAX_IDENTIFIER_LEN} bytes"
        )));
    }
    let mut chars = name.chars();
    let first = chars.next().unwrap_or('0');
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(DaoError::invalid_argument(format!(
            "identifier '{name}' must start with a letter or underscore"
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(DaoError::invalid_argument(format!(
            "identifier '{name}' contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_accessors() {
        let descriptor = EntityDescriptor::new("orders", "order_id").unwrap();
        assert_eq!(descriptor.table(), "orders");
        assert_eq!(descriptor.id_column(), "order_id");
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("users").is_ok());
        assert!(validate_identifier("_audit_log").is_ok());
        assert!(validate_identifier("t2_shadow").is_ok());
    }

    #[test]
    fn test_rejects_empty_identifier() {
        let error = validate_identifier("").unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(validate_identifier("2fast").is_err());
    }

    #[test]
    fn test_rejects_injection_attempts() {
        assert!(validate_identifier("users; DROP TABLE users").is_err());
        assert!(validate_identifier("users--").is_err());
        assert!(validate_identifier("users\"").is_err());
        assert!(validate_identifier("schema.users").is_err());
    }

    #[test]
    fn test_rejects_overlong_identifier() {
        let name = "a".repeat(MAX_IDENTIFIER_LEN + 1);
        assert!(validate_identifier(&name).is_err());
        let name = "a".repeat(MAX_IDENTIFIER_LEN);
        assert!(validate_identifier(&name).is_ok());
    }

    #[test]
    fn test_descriptor_rejects_bad_table() {
        assert!(EntityDescriptor::new("users; --", "id").is_err());
        assert!(EntityDescriptor::new("users", "id; --").is_err());
    }
}
