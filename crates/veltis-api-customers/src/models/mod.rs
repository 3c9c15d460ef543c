//! Request and response models for the Customer Administration API.

pub mod requests;
pub mod responses;

pub use requests::{CreateCustomerRequest, ListCustomersQuery, UpdateCustomerRequest};
pub use responses::{CustomerListResponse, CustomerResponse, PaginationMeta};
