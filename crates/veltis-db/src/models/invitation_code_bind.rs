//! Invitation-code binding model.
//!
//! Maps a system user to the invitation code it owns. Customer queries are
//! scoped through these bindings, and the owning user becomes the audit
//! author on customer writes. This table is maintained elsewhere; this crate
//! only reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

/// A binding between a system user and an invitation code.
///
/// A user is assumed to hold at most one active binding in the authorization
/// path; lookups return rows oldest-first so "first match" is deterministic.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InvitationCodeBind {
    /// Unique binding identifier.
    pub id: Uuid,

    /// System user owning the code.
    pub user_id: Uuid,

    /// The invitation code string.
    pub invitation_code: String,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl InvitationCodeBind {
    /// Find the bindings owned by a user, oldest first.
    pub async fn find_by_user_id(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM invitation_code_binds
            WHERE user_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Find the bindings for an invitation code, oldest first.
    ///
    /// Takes a connection so the lookup participates in the caller's
    /// transaction.
    pub async fn find_all_by_invitation_code(
        conn: &mut PgConnection,
        invitation_code: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM invitation_code_binds
            WHERE invitation_code = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(invitation_code)
        .fetch_all(conn)
        .await
    }
}

#[cfg(test)]
mod tests {
    // Lookup tests require a real database and live in the integration tests
    // of veltis-api-customers.
}
