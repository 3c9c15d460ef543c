//! Download customers endpoint handler.
//!
//! GET /customers/download - Export the caller-visible customers as XLSX.

use crate::error::ApiCustomersError;
use crate::models::ListCustomersQuery;
use crate::services::CustomerService;
use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
    Extension,
};
use std::sync::Arc;
use veltis_core::Caller;

/// Content type for XLSX workbooks.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Exports the customers visible to the caller as a spreadsheet.
///
/// Accepts the same filters as the list endpoint; pagination parameters are
/// ignored, the export always renders the full visible set.
#[utoipa::path(
    get,
    path = "/customers/download",
    params(ListCustomersQuery),
    responses(
        (status = 200, description = "XLSX workbook", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Customers"
)]
pub async fn download_customers_handler(
    Extension(caller): Extension<Caller>,
    Extension(customer_service): Extension<Arc<CustomerService>>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Response, ApiCustomersError> {
    let customers = customer_service
        .query_all(&caller, query.criteria())
        .await?;

    tracing::info!(
        user_id = %caller.user_id,
        rows = customers.len(),
        "Exporting customers"
    );

    let mut buf = Vec::new();
    customer_service.download(&customers, &mut buf)?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"customers.xlsx\"",
            ),
        ],
        buf,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup with database
    // See crates/veltis-api-customers/tests/customer_crud_tests.rs
}
