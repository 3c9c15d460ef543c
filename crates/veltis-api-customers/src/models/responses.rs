//! Response models for the Customer Administration API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use veltis_db::Customer;

/// Customer information returned in API responses.
///
/// The stored password value is deliberately absent; it only appears in the
/// spreadsheet export.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerResponse {
    /// Unique identifier for the customer.
    pub id: Uuid,

    /// Login account.
    pub customer_num: String,

    /// Display name.
    pub customer_name: String,

    /// Invitation code the customer is registered under.
    pub invitation_code: String,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,

    /// When the customer was last updated.
    pub updated_at: DateTime<Utc>,

    /// System user owning the invitation code at creation time.
    pub created_by: Uuid,

    /// System user owning the invitation code at the last update.
    pub updated_by: Uuid,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            customer_num: customer.customer_num.clone(),
            customer_name: customer.customer_name.clone(),
            invitation_code: customer.invitation_code.clone(),
            created_at: customer.created_at,
            updated_at: customer.updated_at,
            created_by: customer.created_by,
            updated_by: customer.updated_by,
        }
    }
}

/// Response for listing customers with pagination.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerListResponse {
    /// List of customers.
    pub customers: Vec<CustomerResponse>,

    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of matching records.
    pub total_count: i64,

    /// Current offset.
    pub offset: i64,

    /// Page size.
    pub limit: i64,

    /// Whether more records are available.
    pub has_more: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from query results.
    #[must_use]
    pub fn new(total_count: i64, offset: i64, limit: i64) -> Self {
        Self {
            total_count,
            offset,
            limit,
            has_more: offset + limit < total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_has_more_true() {
        let meta = PaginationMeta::new(100, 0, 20);
        assert!(meta.has_more);
    }

    #[test]
    fn test_pagination_meta_has_more_false() {
        let meta = PaginationMeta::new(15, 0, 20);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_pagination_meta_last_page() {
        let meta = PaginationMeta::new(100, 80, 20);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_customer_response_omits_password() {
        let customer = Customer {
            id: Uuid::new_v4(),
            customer_num: "A1".to_string(),
            customer_name: "Alice".to_string(),
            password: "secret".to_string(),
            invitation_code: "INV1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: Uuid::new_v4(),
            updated_by: Uuid::new_v4(),
        };
        let response = CustomerResponse::from(&customer);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["customer_num"], "A1");
    }
}
