//! Update customer endpoint handler.
//!
//! PUT /customers/:id - Update an existing customer.

use crate::error::ApiCustomersError;
use crate::models::{CustomerResponse, UpdateCustomerRequest};
use crate::services::CustomerService;
use axum::{extract::Path, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use veltis_core::{Caller, CustomerId};

/// Updates an existing customer.
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(
        ("id" = String, Path, description = "Customer ID"),
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 400, description = "Validation error or invalid invitation code"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer name or account already taken"),
    ),
    security(("bearerAuth" = [])),
    tag = "Customers"
)]
pub async fn update_customer_handler(
    Extension(caller): Extension<Caller>,
    Extension(customer_service): Extension<Arc<CustomerService>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiCustomersError> {
    let customer_uuid = Uuid::parse_str(&id)
        .map_err(|_| ApiCustomersError::Validation("Invalid customer ID format".to_string()))?;
    let customer_id = CustomerId::from_uuid(customer_uuid);

    tracing::info!(
        user_id = %caller.user_id,
        customer_id = %customer_id,
        "Updating customer"
    );

    let response = customer_service.update(customer_id, &request).await?;

    Ok(Json(response))
}
