//! Strongly Typed Identifiers
//!
//! This module provides type-safe identifier types for veltis.
//! Using the newtype pattern, these types prevent accidental misuse of
//! different ID types at compile time.
//!
//! # Example
//!
//! ```
//! use veltis_core::{CustomerId, UserId};
//!
//! let customer = CustomerId::new();
//! let user = UserId::new();
//!
//! // Type safety: cannot pass UserId where CustomerId is expected
//! fn requires_customer(id: CustomerId) -> String {
//!     id.to_string()
//! }
//!
//! let result = requires_customer(customer);
//! // requires_customer(user); // This would not compile!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying UUID parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for customer records.
    ///
    /// # Example
    ///
    /// ```
    /// use veltis_core::CustomerId;
    /// use uuid::Uuid;
    ///
    /// // Create a new random CustomerId
    /// let customer_id = CustomerId::new();
    /// println!("Customer: {}", customer_id);
    ///
    /// // Create from existing UUID
    /// let uuid = Uuid::new_v4();
    /// let customer_id = CustomerId::from_uuid(uuid);
    /// assert_eq!(customer_id.as_uuid(), &uuid);
    /// ```
    CustomerId
);

define_id!(
    /// Strongly typed identifier for system users.
    ///
    /// System users are the operators of the admin backend; customer records
    /// reference them through invitation-code bindings.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = CustomerId::new();
        let b = CustomerId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_display_matches_uuid() {
        let uuid = Uuid::new_v4();
        let id = CustomerId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_from_str_valid() {
        let uuid = Uuid::new_v4();
        let parsed: CustomerId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed.as_uuid(), &uuid);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<UserId, _> = "not-a-uuid".parse();
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "UserId");
    }

    #[test]
    fn test_serde_transparent() {
        let uuid = Uuid::new_v4();
        let id = CustomerId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
        let back: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
