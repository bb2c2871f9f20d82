//! Entity contract binding a Rust type to its table
//!
//! An [`Entity`] declares where its rows live, how its identifier is typed,
//! which columns an INSERT supplies, and how a new instance's values bind
//! onto that INSERT. Row decoding comes from `sqlx::FromRow`, usually
//! derived.
//!
//! # Example
//!
//! ```rust
//! use repokit::entity::Entity;
//! use sqlx::postgres::PgArguments;
//! use sqlx::query::QueryAs;
//! use sqlx::Postgres;
//!
//! #[derive(sqlx::FromRow)]
//! struct User {
//!     id: Option<i64>,
//!     name: String,
//!     email: String,
//! }
//!
//! impl Entity for User {
//!     type Id = i64;
//!
//!     fn table() -> &'static str {
//!         "users"
//!     }
//!
//!     fn insert_columns() -> &'static [&'static str] {
//!         &["name", "email"]
//!     }
//!
//!     fn bind_insert<'q>(
//!         &'q self,
//!         query: QueryAs<'q, Postgres, Self, PgArguments>,
//!     ) -> QueryAs<'q, Postgres, Self, PgArguments> {
//!         query.bind(&self.name).bind(&self.email)
//!     }
//!
//!     fn id(&self) -> Option<&Self::Id> {
//!         self.id.as_ref()
//!     }
//! }
//! ```

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// A domain object persisted by identifier in a PostgreSQL table
///
/// Implementations describe the persistence mapping for one table. The DAO
/// never inspects entity fields directly; everything it needs flows through
/// this trait and the `FromRow` decoding bound.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// The unique key type identifying one row (e.g. `i64`, `Uuid`)
    type Id: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + Sync;

    /// Table the entity's rows live in
    fn table() -> &'static str;

    /// Primary key column, `"id"` unless overridden
    fn id_column() -> &'static str {
        "id"
    }

    /// Columns supplied by an INSERT, in bind order
    ///
    /// Store-assigned columns (the identifier, default timestamps) are
    /// omitted; the full row comes back through `RETURNING *`.
    fn insert_columns() -> &'static [&'static str];

    /// Bind this instance's values onto an INSERT, matching
    /// [`insert_columns`](Entity::insert_columns) order
    fn bind_insert<'q>(
        &'q self,
        query: QueryAs<'q, Postgres, Self, PgArguments>,
    ) -> QueryAs<'q, Postgres, Self, PgArguments>
    where
        Self: Sized;

    /// The persisted identifier, or `None` before the store has assigned one
    fn id(&self) -> Option<&Self::Id>;
}
