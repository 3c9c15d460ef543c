//! Services for the Customer Administration API.

pub mod customer_service;

pub use customer_service::{CustomerService, PRIVILEGED_USERNAME};
