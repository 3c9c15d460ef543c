//! Create customer endpoint handler.
//!
//! POST /customers - Register a new customer.

use crate::error::ApiCustomersError;
use crate::models::{CreateCustomerRequest, CustomerResponse};
use crate::services::CustomerService;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use veltis_core::Caller;

/// Creates a new customer.
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Validation error or invalid invitation code"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 409, description = "Customer name or account already taken"),
    ),
    security(("bearerAuth" = [])),
    tag = "Customers"
)]
pub async fn create_customer_handler(
    Extension(caller): Extension<Caller>,
    Extension(customer_service): Extension<Arc<CustomerService>>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiCustomersError> {
    tracing::info!(
        user_id = %caller.user_id,
        "Creating customer"
    );
    tracing::debug!(customer_num = %request.customer_num, "Create customer account");

    let response = customer_service.create(&request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
