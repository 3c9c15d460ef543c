//! Customer management service.
//!
//! Orchestrates authorization scoping, duplicate detection, audit stamping,
//! and the spreadsheet export on top of the persistence layer.

use crate::error::ApiCustomersError;
use crate::export;
use crate::models::{
    CreateCustomerRequest, CustomerListResponse, CustomerResponse, ListCustomersQuery,
    PaginationMeta, UpdateCustomerRequest,
};
use sqlx::{PgConnection, PgPool};
use std::io::Write;
use uuid::Uuid;
use veltis_core::{Caller, CustomerId};
use veltis_db::{Customer, CustomerQueryCriteria, InvitationCodeBind};

/// The caller identity exempt from invitation-code row filtering.
pub const PRIVILEGED_USERNAME: &str = "admin";

/// Which stamps verify-and-fill writes.
enum VerifyMode {
    Create,
    Update,
}

/// Reject empty or whitespace-only values for a required field.
fn require_field(field: &str, value: &str) -> Result<String, ApiCustomersError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiCustomersError::Validation(format!(
            "{field} is required"
        )));
    }
    Ok(trimmed.to_string())
}

/// Shared pre-write validation and audit stamping for create/update.
///
/// Uniqueness checks inspect only the first matching row; with the UNIQUE
/// constraints in the schema there can be at most one. The invitation code
/// must resolve to at least one binding; the first binding's owning user
/// becomes the audit author.
async fn verify_and_fill(
    conn: &mut PgConnection,
    customer: &mut Customer,
    mode: VerifyMode,
) -> Result<(), ApiCustomersError> {
    let by_name = Customer::find_all_by_customer_name(conn, &customer.customer_name).await?;
    if let Some(first) = by_name.first() {
        if first.id != customer.id {
            return Err(ApiCustomersError::NameConflict);
        }
    }

    let by_num = Customer::find_all_by_customer_num(conn, &customer.customer_num).await?;
    if let Some(first) = by_num.first() {
        if first.id != customer.id {
            return Err(ApiCustomersError::AccountConflict);
        }
    }

    let binds =
        InvitationCodeBind::find_all_by_invitation_code(conn, &customer.invitation_code).await?;
    let Some(bind) = binds.first() else {
        return Err(ApiCustomersError::InvalidInvitationCode);
    };

    let now = chrono::Utc::now();
    match mode {
        VerifyMode::Create => {
            customer.created_at = now;
            customer.updated_at = now;
            customer.created_by = bind.user_id;
            customer.updated_by = bind.user_id;
        }
        VerifyMode::Update => {
            customer.updated_at = now;
            customer.updated_by = bind.user_id;
        }
    }

    Ok(())
}

/// Service for customer management operations.
#[derive(Clone)]
pub struct CustomerService {
    pool: PgPool,
}

impl CustomerService {
    /// Create a new customer service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the database pool reference.
    ///
    /// This is useful for testing and direct database operations.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List one page of the customers visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns `ApiCustomersError::Database` if a query fails.
    pub async fn query_page(
        &self,
        caller: &Caller,
        query: &ListCustomersQuery,
    ) -> Result<CustomerListResponse, ApiCustomersError> {
        let offset = query.offset();
        let limit = query.limit();
        let criteria = self.scope_criteria(caller, query.criteria()).await?;

        let total_count = Customer::count(&self.pool, &criteria).await?;
        let customers = Customer::find_page(&self.pool, &criteria, offset, limit).await?;

        let responses: Vec<CustomerResponse> =
            customers.iter().map(CustomerResponse::from).collect();
        let pagination = PaginationMeta::new(total_count, offset, limit);

        tracing::debug!(
            total_count,
            returned = responses.len(),
            offset,
            limit,
            "Listed customers"
        );

        Ok(CustomerListResponse {
            customers: responses,
            pagination,
        })
    }

    /// List all customers visible to the caller, unpaginated.
    ///
    /// Used by the export path, which renders the full visible set.
    pub async fn query_all(
        &self,
        caller: &Caller,
        criteria: CustomerQueryCriteria,
    ) -> Result<Vec<Customer>, ApiCustomersError> {
        let criteria = self.scope_criteria(caller, criteria).await?;
        Ok(Customer::find_all(&self.pool, &criteria).await?)
    }

    /// Restrict the criteria to the caller's invitation code.
    ///
    /// The privileged account sees all customers. Any other caller has the
    /// invitation-code filter overwritten with their own binding's code, or
    /// with the empty string when no binding exists, which matches nothing
    /// since every stored code is non-empty.
    async fn scope_criteria(
        &self,
        caller: &Caller,
        mut criteria: CustomerQueryCriteria,
    ) -> Result<CustomerQueryCriteria, ApiCustomersError> {
        if caller.username != PRIVILEGED_USERNAME {
            let binds =
                InvitationCodeBind::find_by_user_id(&self.pool, *caller.user_id.as_uuid()).await?;
            let code = binds
                .first()
                .map(|b| b.invitation_code.clone())
                .unwrap_or_default();

            if code.is_empty() {
                tracing::debug!(
                    user_id = %caller.user_id,
                    "Caller has no invitation-code binding; query will match nothing"
                );
            }

            criteria.invitation_code = Some(code);
        }
        Ok(criteria)
    }

    /// Create a new customer.
    ///
    /// # Errors
    ///
    /// - `ApiCustomersError::Validation` if a required field is empty or the
    ///   invitation code is unresolvable
    /// - `ApiCustomersError::NameConflict` / `AccountConflict` if the display
    ///   name or account is already taken
    /// - `ApiCustomersError::Database` if the database operation fails
    pub async fn create(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ApiCustomersError> {
        let customer_num = require_field("customer_num", &request.customer_num)?;
        let customer_name = require_field("customer_name", &request.customer_name)?;
        let invitation_code = require_field("invitation_code", &request.invitation_code)?;
        if request.password.is_empty() {
            return Err(ApiCustomersError::Validation(
                "password is required".to_string(),
            ));
        }

        let now = chrono::Utc::now();
        let mut customer = Customer {
            id: Uuid::new_v4(),
            customer_num,
            customer_name,
            password: request.password.clone(),
            invitation_code,
            created_at: now,
            updated_at: now,
            // Authoritative stamps come from verify_and_fill.
            created_by: Uuid::nil(),
            updated_by: Uuid::nil(),
        };

        let mut tx = self.pool.begin().await?;
        verify_and_fill(&mut *tx, &mut customer, VerifyMode::Create).await?;
        let customer = Customer::insert(&mut *tx, &customer).await?;
        tx.commit().await?;

        tracing::info!(
            customer_id = %customer.id,
            created_by = %customer.created_by,
            "Customer created"
        );

        Ok(CustomerResponse::from(&customer))
    }

    /// Update an existing customer.
    ///
    /// Loads the current record, merges the provided fields onto it, re-runs
    /// verification, restamps the updater fields, and persists.
    ///
    /// # Errors
    ///
    /// - `ApiCustomersError::NotFound` if no customer has this id
    /// - `ApiCustomersError::NameConflict` / `AccountConflict` if the new
    ///   display name or account is owned by a different customer
    /// - `ApiCustomersError::Validation` if a provided field is empty or the
    ///   invitation code is unresolvable
    /// - `ApiCustomersError::Database` if the database operation fails
    pub async fn update(
        &self,
        id: CustomerId,
        request: &UpdateCustomerRequest,
    ) -> Result<CustomerResponse, ApiCustomersError> {
        let mut tx = self.pool.begin().await?;

        let existing = Customer::find_all_by_id(&mut *tx, *id.as_uuid()).await?;
        let mut customer = existing
            .into_iter()
            .next()
            .ok_or(ApiCustomersError::NotFound)?;

        if let Some(num) = &request.customer_num {
            customer.customer_num = require_field("customer_num", num)?;
        }
        if let Some(name) = &request.customer_name {
            customer.customer_name = require_field("customer_name", name)?;
        }
        if let Some(code) = &request.invitation_code {
            customer.invitation_code = require_field("invitation_code", code)?;
        }
        if let Some(password) = &request.password {
            if password.is_empty() {
                return Err(ApiCustomersError::Validation(
                    "password must not be empty".to_string(),
                ));
            }
            customer.password = password.clone();
        }

        verify_and_fill(&mut *tx, &mut customer, VerifyMode::Update).await?;
        let customer = Customer::upsert(&mut *tx, &customer).await?;
        tx.commit().await?;

        tracing::info!(
            customer_id = %id,
            updated_by = %customer.updated_by,
            "Customer updated"
        );

        Ok(CustomerResponse::from(&customer))
    }

    /// Batch-delete customers by identifier list.
    ///
    /// Missing ids are skipped; the whole batch is one transaction. Returns
    /// the number of rows removed.
    pub async fn delete_all(&self, ids: &[CustomerId]) -> Result<u64, ApiCustomersError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let mut tx = self.pool.begin().await?;
        let removed = Customer::delete_by_ids(&mut *tx, &uuids).await?;
        tx.commit().await?;

        tracing::info!(requested = ids.len(), removed, "Customers deleted");
        Ok(removed)
    }

    /// Render the customers as an XLSX workbook and write it to `sink`.
    ///
    /// One row per customer, eight fixed columns. Fails with the export or
    /// I/O error class; nothing is written on serialization failure.
    pub fn download<W: Write>(
        &self,
        customers: &[Customer],
        sink: &mut W,
    ) -> Result<(), ApiCustomersError> {
        let bytes = export::write_workbook(customers)?;
        sink.write_all(&bytes)?;

        tracing::debug!(rows = customers.len(), "Rendered customer export");
        Ok(())
    }
}
