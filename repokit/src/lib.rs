//! # repokit
//!
//! Generic data-access repository over SQLx: typed get-by-id, list-all,
//! paginated listing, delete, and create operations for any entity type,
//! backed by a shared PostgreSQL pool.
//!
//! ## Features
//!
//! - **Generic CRUD**: [`Dao`](dao::Dao) trait with a [`PgDao`](dao::PgDao)
//!   implementation parameterized by entity type
//! - **Pagination**: [`PaginatedResult`](page::PaginatedResult) with
//!   1-based page numbers and ceiling-division page counts
//! - **Builders**: [`Builder`](builder::Builder) factory capability for
//!   create, closures included
//! - **Validated statements**: table and column names are
//!   identifier-checked before they reach generated SQL
//! - **Pool management**: configuration via Figment and pool creation with
//!   retry, for callers that do not already own a pool
//!
//! ## Example
//!
//! ```rust,no_run
//! use repokit::prelude::*;
//! use sqlx::postgres::PgArguments;
//! use sqlx::query::QueryAs;
//! use sqlx::Postgres;
//!
//! #[derive(sqlx::FromRow)]
//! struct User {
//!     id: Option<i64>,
//!     name: String,
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
//!         &["name"]
//!     }
//!
//!     fn bind_insert<'q>(
//!         &'q self,
//!         query: QueryAs<'q, Postgres, Self, PgArguments>,
//!     ) -> QueryAs<'q, Postgres, Self, PgArguments> {
//!         query.bind(&self.name)
//!     }
//!
//!     fn id(&self) -> Option<&i64> {
//!         self.id.as_ref()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> DaoResult<()> {
//!     let config = DatabaseConfig::load()?;
//!     let pool = repokit::database::connect(&config).await?;
//!
//!     let dao: PgDao<User> = PgDao::for_entity(pool)?;
//!
//!     let created = dao
//!         .create(|| User {
//!             id: None,
//!             name: "alice".to_string(),
//!         })
//!         .await?;
//!
//!     let page = dao.get_page(0, 25).await?;
//!     println!("page {} of {}", page.page_number, page.total_pages);
//!
//!     dao.delete(&created).await?;
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod dao;
pub mod database;
pub mod descriptor;
pub mod entity;
pub mod error;
pub mod observability;
pub mod page;

pub use builder::Builder;
pub use config::DatabaseConfig;
pub use dao::{Dao, PgDao};
pub use descriptor::EntityDescriptor;
pub use entity::Entity;
pub use error::{DaoError, DaoOperation, DaoResult};
pub use page::{total_pages, PaginatedResult};

/// Commonly used types, importable in one line
pub mod prelude {
    pub use crate::builder::Builder;
    pub use crate::config::DatabaseConfig;
    pub use crate::dao::{Dao, PgDao};
    pub use crate::descriptor::EntityDescriptor;
    pub use crate::entity::Entity;
    pub use crate::error::{DaoError, DaoOperation, DaoResult};
    pub use crate::page::PaginatedResult;
}
