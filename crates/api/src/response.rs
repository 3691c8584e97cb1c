//! Shared response types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
