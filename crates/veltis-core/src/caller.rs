//! Caller identity.
//!
//! The enclosing request-handling layer authenticates each request and inserts
//! a [`Caller`] into the request extensions. Services read the caller's
//! username and user id from it; they never resolve identity themselves.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// The authenticated identity behind the current request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caller {
    /// Identifier of the system user making the request.
    pub user_id: UserId,

    /// Login name of the system user making the request.
    pub username: String,

    /// Roles granted to the user (e.g. "admin").
    pub roles: Vec<String>,
}

impl Caller {
    /// Create a caller identity.
    #[must_use]
    pub fn new(user_id: UserId, username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            roles,
        }
    }

    /// Whether the caller holds the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
