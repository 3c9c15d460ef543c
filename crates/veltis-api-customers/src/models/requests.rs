//! Request models for the Customer Administration API.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use veltis_db::CustomerQueryCriteria;

/// Request to create a new customer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    /// Login account, unique across customers.
    pub customer_num: String,

    /// Display name, unique across customers.
    pub customer_name: String,

    /// Stored password value, opaque to this layer.
    pub password: String,

    /// Invitation code the customer registers under.
    pub invitation_code: String,
}

/// Request to update an existing customer.
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    /// New login account (optional).
    #[serde(default)]
    pub customer_num: Option<String>,

    /// New display name (optional).
    #[serde(default)]
    pub customer_name: Option<String>,

    /// New stored password value (optional).
    #[serde(default)]
    pub password: Option<String>,

    /// New invitation code (optional).
    #[serde(default)]
    pub invitation_code: Option<String>,
}

/// Query parameters for listing customers.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListCustomersQuery {
    /// Offset for pagination (default: 0).
    #[serde(default)]
    pub offset: Option<i64>,

    /// Maximum number of customers to return (default: 20, max: 100).
    #[serde(default)]
    pub limit: Option<i64>,

    /// Filter by display name (case-insensitive partial match).
    #[serde(default)]
    pub customer_name: Option<String>,

    /// Filter by login account (exact match).
    #[serde(default)]
    pub customer_num: Option<String>,

    /// Filter by invitation code (exact match). Overridden for
    /// non-privileged callers.
    #[serde(default)]
    pub invitation_code: Option<String>,
}

impl ListCustomersQuery {
    /// Default page size.
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Maximum allowed page size.
    pub const MAX_LIMIT: i64 = 100;

    /// Get the offset, defaulting to 0.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Get the limit, clamped to valid range.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    /// The filter portion of the query, before authorization scoping.
    #[must_use]
    pub fn criteria(&self) -> CustomerQueryCriteria {
        CustomerQueryCriteria {
            customer_name: self.customer_name.clone(),
            customer_num: self.customer_num.clone(),
            invitation_code: self.invitation_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_customers_query_defaults() {
        let query = ListCustomersQuery {
            offset: None,
            limit: None,
            customer_name: None,
            customer_num: None,
            invitation_code: None,
        };
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 20);
    }

    #[test]
    fn test_list_customers_query_clamping() {
        let query = ListCustomersQuery {
            offset: Some(-5),
            limit: Some(500),
            customer_name: None,
            customer_num: None,
            invitation_code: None,
        };
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 100);
    }

    #[test]
    fn test_criteria_carries_filters() {
        let query = ListCustomersQuery {
            offset: None,
            limit: None,
            customer_name: Some("ali".to_string()),
            customer_num: Some("A1".to_string()),
            invitation_code: Some("INV1".to_string()),
        };
        let criteria = query.criteria();
        assert_eq!(criteria.customer_name.as_deref(), Some("ali"));
        assert_eq!(criteria.customer_num.as_deref(), Some("A1"));
        assert_eq!(criteria.invitation_code.as_deref(), Some("INV1"));
    }
}
