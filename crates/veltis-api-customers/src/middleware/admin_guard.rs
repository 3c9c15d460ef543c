//! Admin role guard middleware.
//!
//! This middleware checks that the authenticated caller has the "admin" role
//! before allowing access to protected endpoints.

use crate::error::ApiCustomersError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use veltis_core::Caller;

/// Required role for customer administration operations.
pub const ADMIN_ROLE: &str = "admin";

/// Middleware that requires the authenticated caller to have the "admin" role.
///
/// The enclosing authentication layer must have inserted a [`Caller`] into the
/// request extensions. If no caller is found, 401 is returned; if the caller
/// lacks the admin role, 403.
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use veltis_api_customers::middleware::admin_guard;
///
/// let router = Router::new()
///     .route("/customers", get(list_customers))
///     .layer(middleware::from_fn(admin_guard));
/// ```
///
/// # Errors
///
/// - `ApiCustomersError::Unauthorized` (401): no caller in request extensions
/// - `ApiCustomersError::Forbidden` (403): caller doesn't have the "admin" role
pub async fn admin_guard(request: Request<Body>, next: Next) -> Result<Response, ApiCustomersError> {
    let caller = request
        .extensions()
        .get::<Caller>()
        .ok_or(ApiCustomersError::Unauthorized)?;

    if !caller.has_role(ADMIN_ROLE) {
        tracing::warn!(
            user_id = %caller.user_id,
            roles = ?caller.roles,
            "Access denied: admin role required"
        );
        return Err(ApiCustomersError::Forbidden);
    }

    tracing::debug!(
        user_id = %caller.user_id,
        "Admin access granted"
    );

    Ok(next.run(request).await)
}
