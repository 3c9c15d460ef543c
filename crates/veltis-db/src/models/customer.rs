//! Customer model.
//!
//! A customer is an end account managed through the admin backend. Each
//! customer carries the invitation code it was registered under; the code's
//! owning system user is recorded as the audit author on every write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

/// A customer record.
///
/// `customer_num` (the login account) and `customer_name` (the display name)
/// are unique across all customers; both are additionally enforced by UNIQUE
/// constraints in the schema. `created_by`/`updated_by` hold the id of the
/// system user owning the invitation code, not the caller.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Customer {
    /// Unique customer identifier.
    pub id: Uuid,

    /// Login account, unique.
    pub customer_num: String,

    /// Display name, unique.
    pub customer_name: String,

    /// Stored password value, opaque at this layer.
    pub password: String,

    /// Invitation code the customer is registered under.
    pub invitation_code: String,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,

    /// System user owning the invitation code at creation time.
    pub created_by: Uuid,

    /// System user owning the invitation code at the last update.
    pub updated_by: Uuid,
}

/// Filter criteria for customer scans.
///
/// `customer_name` matches case-insensitively on a substring; the other two
/// fields match exactly. An empty-string `invitation_code` matches no rows,
/// since every stored code is non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerQueryCriteria {
    /// Substring filter on the display name (case-insensitive).
    pub customer_name: Option<String>,

    /// Exact filter on the login account.
    pub customer_num: Option<String>,

    /// Exact filter on the invitation code.
    pub invitation_code: Option<String>,
}

/// Escape LIKE special characters (`%`, `_`, `\`) in a search pattern.
///
/// Returns a lowercased, escaped string suitable for use in `LOWER(col) LIKE $N`.
fn escape_like(input: &str) -> String {
    input
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Append the criteria's WHERE fragments to `sql`, starting at `$1`.
///
/// Returns the next free parameter index. Bind order must follow
/// `bind_criteria`.
fn push_criteria_clauses(sql: &mut String, criteria: &CustomerQueryCriteria) -> usize {
    let mut param_index = 1;

    if criteria.customer_name.is_some() {
        sql.push_str(&format!(" AND LOWER(customer_name) LIKE ${param_index}"));
        param_index += 1;
    }

    if criteria.customer_num.is_some() {
        sql.push_str(&format!(" AND customer_num = ${param_index}"));
        param_index += 1;
    }

    if criteria.invitation_code.is_some() {
        sql.push_str(&format!(" AND invitation_code = ${param_index}"));
        param_index += 1;
    }

    param_index
}

macro_rules! bind_criteria {
    ($query:expr, $criteria:expr) => {{
        let mut q = $query;
        if let Some(name) = &$criteria.customer_name {
            q = q.bind(format!("%{}%", escape_like(name)));
        }
        if let Some(num) = &$criteria.customer_num {
            q = q.bind(num);
        }
        if let Some(code) = &$criteria.invitation_code {
            q = q.bind(code);
        }
        q
    }};
}

impl Customer {
    /// Scan all customers matching the criteria, unpaginated.
    pub async fn find_all(
        pool: &PgPool,
        criteria: &CustomerQueryCriteria,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = String::from("SELECT * FROM customers WHERE TRUE");
        push_criteria_clauses(&mut sql, criteria);
        sql.push_str(" ORDER BY created_at DESC");

        let q = bind_criteria!(sqlx::query_as::<_, Self>(&sql), criteria);
        q.fetch_all(pool).await
    }

    /// Scan one page of customers matching the criteria.
    pub async fn find_page(
        pool: &PgPool,
        criteria: &CustomerQueryCriteria,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = String::from("SELECT * FROM customers WHERE TRUE");
        let param_index = push_criteria_clauses(&mut sql, criteria);
        sql.push_str(&format!(
            " ORDER BY created_at DESC LIMIT ${param_index} OFFSET ${}",
            param_index + 1
        ));

        let q = bind_criteria!(sqlx::query_as::<_, Self>(&sql), criteria);
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count customers matching the criteria (for pagination).
    pub async fn count(
        pool: &PgPool,
        criteria: &CustomerQueryCriteria,
    ) -> Result<i64, sqlx::Error> {
        let mut sql = String::from("SELECT COUNT(*) FROM customers WHERE TRUE");
        push_criteria_clauses(&mut sql, criteria);

        let q = bind_criteria!(sqlx::query_scalar::<_, i64>(&sql), criteria);
        q.fetch_one(pool).await
    }

    /// Find customers by identifier (0 or 1 row).
    ///
    /// Takes a connection so the lookup participates in the caller's
    /// transaction.
    pub async fn find_all_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_all(conn)
        .await
    }

    /// Find customers by login account.
    pub async fn find_all_by_customer_num(
        conn: &mut PgConnection,
        customer_num: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM customers
            WHERE customer_num = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(customer_num)
        .fetch_all(conn)
        .await
    }

    /// Find customers by display name.
    pub async fn find_all_by_customer_name(
        conn: &mut PgConnection,
        customer_name: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM customers
            WHERE customer_name = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(customer_name)
        .fetch_all(conn)
        .await
    }

    /// Insert a new customer row.
    pub async fn insert(conn: &mut PgConnection, customer: &Self) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO customers
                (id, customer_num, customer_name, password, invitation_code,
                 created_at, updated_at, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            ",
        )
        .bind(customer.id)
        .bind(&customer.customer_num)
        .bind(&customer.customer_name)
        .bind(&customer.password)
        .bind(&customer.invitation_code)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .bind(customer.created_by)
        .bind(customer.updated_by)
        .fetch_one(conn)
        .await
    }

    /// Insert-or-replace a customer row by primary key.
    pub async fn upsert(conn: &mut PgConnection, customer: &Self) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO customers
                (id, customer_num, customer_name, password, invitation_code,
                 created_at, updated_at, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                customer_num = EXCLUDED.customer_num,
                customer_name = EXCLUDED.customer_name,
                password = EXCLUDED.password,
                invitation_code = EXCLUDED.invitation_code,
                updated_at = EXCLUDED.updated_at,
                updated_by = EXCLUDED.updated_by
            RETURNING *
            ",
        )
        .bind(customer.id)
        .bind(&customer.customer_num)
        .bind(&customer.customer_name)
        .bind(&customer.password)
        .bind(&customer.invitation_code)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .bind(customer.created_by)
        .bind(customer.updated_by)
        .fetch_one(conn)
        .await
    }

    /// Batch-delete customers by identifier list.
    ///
    /// Missing ids are skipped silently; returns the number of rows removed.
    pub async fn delete_by_ids(conn: &mut PgConnection, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            DELETE FROM customers
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }
}
