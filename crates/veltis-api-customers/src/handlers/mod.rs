//! HTTP handlers for the Customer Administration API.

pub mod create;
pub mod delete;
pub mod download;
pub mod list;
pub mod update;

pub use create::create_customer_handler;
pub use delete::delete_customers_handler;
pub use download::download_customers_handler;
pub use list::list_customers_handler;
pub use update::update_customer_handler;
