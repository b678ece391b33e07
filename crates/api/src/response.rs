//! Small response bodies shared across handlers.

use serde::Serialize;

/// `{ "message": "..." }` body for operations that return no entity.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
