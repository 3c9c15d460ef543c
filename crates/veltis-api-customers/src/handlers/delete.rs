//! Delete customers endpoint handler.
//!
//! DELETE /customers - Batch delete customers by id list.

use crate::error::ApiCustomersError;
use crate::services::CustomerService;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use veltis_core::{Caller, CustomerId};

/// Deletes the customers named in the request body.
///
/// Ids with no matching customer are skipped without error.
#[utoipa::path(
    delete,
    path = "/customers",
    request_body = Vec<Uuid>,
    responses(
        (status = 204, description = "Customers deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Customers"
)]
pub async fn delete_customers_handler(
    Extension(caller): Extension<Caller>,
    Extension(customer_service): Extension<Arc<CustomerService>>,
    Json(ids): Json<Vec<Uuid>>,
) -> Result<StatusCode, ApiCustomersError> {
    let customer_ids: Vec<CustomerId> = ids.into_iter().map(CustomerId::from_uuid).collect();

    tracing::info!(
        user_id = %caller.user_id,
        count = customer_ids.len(),
        "Deleting customers"
    );

    customer_service.delete_all(&customer_ids).await?;

    Ok(StatusCode::NO_CONTENT)
}
