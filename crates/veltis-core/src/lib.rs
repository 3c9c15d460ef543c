//! veltis Core Library
//!
//! Shared types for veltis.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (CustomerId, UserId)
//! - [`caller`] - Authenticated caller identity (Caller)
//!
//! # Example
//!
//! ```
//! use veltis_core::{Caller, CustomerId, UserId};
//!
//! // Create strongly typed IDs
//! let customer_id = CustomerId::new();
//! let user_id = UserId::new();
//!
//! let caller = Caller::new(user_id, "ops", vec!["admin".to_string()]);
//! assert!(caller.has_role("admin"));
//! ```

pub mod caller;
pub mod ids;

// Re-export main types for convenient access
pub use caller::Caller;
pub use ids::{CustomerId, UserId};
