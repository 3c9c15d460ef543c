//! veltis Database Library
//!
//! PostgreSQL persistence for veltis: connection pool, embedded migrations,
//! and the entity models used by the customer administration services.
//!
//! # Modules
//!
//! - [`pool`] - Connection pool wrapper (`DbPool`)
//! - [`migrations`] - Embedded SQL migrations
//! - [`models`] - Entity models (`Customer`, `InvitationCodeBind`)
//! - [`error`] - Database error type (`DbError`)

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

// Re-export main types for convenient access
pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{Customer, CustomerQueryCriteria, InvitationCodeBind};
pub use pool::DbPool;
