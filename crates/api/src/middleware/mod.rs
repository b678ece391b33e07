//! Request extractors that gate handlers.
//!
//! - [`auth::AuthUser`] -- Requires a bearer token on mutating routes.

pub mod auth;
