//! Customer Administration API router configuration.
//!
//! Configures routes for customer management endpoints:
//! - GET /customers - List customers (with pagination and filters)
//! - POST /customers - Create a new customer
//! - PUT /customers/:id - Update a customer
//! - DELETE /customers - Batch delete customers by id list
//! - GET /customers/download - Export visible customers as XLSX

use crate::handlers::{
    create_customer_handler, delete_customers_handler, download_customers_handler,
    list_customers_handler, update_customer_handler,
};
use crate::middleware::admin_guard;
use crate::services::CustomerService;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for customer administration routes.
#[derive(Clone)]
pub struct CustomersState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Customer service for CRUD and export operations.
    pub customer_service: Arc<CustomerService>,
}

impl CustomersState {
    /// Create a new customers state.
    pub fn new(pool: PgPool) -> Self {
        let customer_service = Arc::new(CustomerService::new(pool.clone()));
        Self {
            pool,
            customer_service,
        }
    }
}

/// Create the customer administration router with all endpoints.
///
/// All endpoints require authentication with the "admin" role; the enclosing
/// gateway inserts the authenticated `Caller` into request extensions.
///
/// # Arguments
///
/// * `state` - The customers state containing the service
///
/// # Returns
///
/// A configured Axum router for the `/customers` prefix.
pub fn customers_router(state: CustomersState) -> Router {
    Router::new()
        // Register /download BEFORE the parameterized routes to avoid path capture
        .route("/download", get(download_customers_handler))
        .route("/", get(list_customers_handler))
        .route("/", post(create_customer_handler))
        .route("/", delete(delete_customers_handler))
        .route("/:id", put(update_customer_handler))
        // Admin guard middleware requires the "admin" role on the caller
        .layer(middleware::from_fn(admin_guard))
        .layer(axum::Extension(state.customer_service))
        .layer(axum::Extension(state.pool))
}
