//! List customers endpoint handler.
//!
//! GET /customers - List customers with pagination and optional filters.

use crate::error::ApiCustomersError;
use crate::models::{CustomerListResponse, ListCustomersQuery};
use crate::services::CustomerService;
use axum::{extract::Query, Extension, Json};
use std::sync::Arc;
use veltis_core::Caller;

/// Lists the customers visible to the authenticated caller.
///
/// Non-privileged callers only ever see customers registered under their own
/// invitation code, regardless of the filters they request.
#[utoipa::path(
    get,
    path = "/customers",
    params(ListCustomersQuery),
    responses(
        (status = 200, description = "List of customers", body = CustomerListResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Customers"
)]
pub async fn list_customers_handler(
    Extension(caller): Extension<Caller>,
    Extension(customer_service): Extension<Arc<CustomerService>>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<CustomerListResponse>, ApiCustomersError> {
    tracing::info!(
        user_id = %caller.user_id,
        offset = query.offset(),
        limit = query.limit(),
        name_filter = ?query.customer_name,
        "Listing customers"
    );

    let response = customer_service.query_page(&caller, &query).await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup with database
    // See crates/veltis-api-customers/tests/customer_crud_tests.rs
}
