//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use catalog_core::error::CoreError;

use crate::auth::jwt::authenticate;
use crate::error::AppError;
use crate::state::AppState;

/// Message for requests that carry no usable `Authorization` header.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Message for requests whose bearer credential is empty or rejected.
pub const INVALID_CREDENTIALS: &str = "Invalid authentication credentials";

/// Authenticated caller extracted from the `Authorization: Bearer` header.
///
/// Add it as a handler parameter to require authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(subject = %auth.subject, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Token subject, or `"default"` when tokens are not verified.
    pub subject: String,
}

/// Pull the credential out of an `Authorization` header value.
///
/// - no header, or a blank one: "Not authenticated"
/// - a scheme other than `Bearer`, or an empty credential: "Invalid authentication credentials"
pub fn bearer_credential(header: Option<&str>) -> Result<&str, CoreError> {
    let header = header
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| CoreError::Unauthorized(NOT_AUTHENTICATED.into()))?;

    let (scheme, credential) = header.split_once(' ').unwrap_or((header, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let credential = credential.trim();
    if credential.is_empty() {
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));
    }
    Ok(credential)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = bearer_credential(header)?;
        let subject = authenticate(token, &state.config.jwt)?;

        Ok(AuthUser { subject })
    }
}
