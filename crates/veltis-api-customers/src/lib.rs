//! Customer Administration API.
//!
//! CRUD and export operations for customer records, scoped per caller through
//! invitation-code bindings. Mounted under `/customers` by the enclosing
//! gateway, which owns authentication and inserts the [`veltis_core::Caller`]
//! into request extensions.
//!
//! # Modules
//!
//! - [`services`] - `CustomerService` (authorization scoping, verification, export)
//! - [`handlers`] - axum endpoint handlers
//! - [`router`] - route configuration (`customers_router`)
//! - [`models`] - request/response types with pagination envelope
//! - [`middleware`] - admin role guard
//! - [`export`] - XLSX workbook rendering
//! - [`error`] - `ApiCustomersError` with RFC 7807 responses

pub mod error;
pub mod export;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiCustomersError;
pub use router::{customers_router, CustomersState};
pub use services::CustomerService;
