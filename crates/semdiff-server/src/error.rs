//! Error-to-HTTP Mapping
//!
//! Domain errors carry the failure taxonomy; this module decides the
//! status code and what the caller is allowed to see. Client errors keep
//! their message; unexpected failures are logged server-side and
//! surfaced as an opaque 500.

use rocket::http::Status;
use rocket::serde::json::Json;
use tracing::{error, warn};

use semdiff_domain::error::Error;

use crate::models::ErrorResponse;

/// The standard failure type of every handler
pub type ApiError = (Status, Json<ErrorResponse>);

/// Map a domain error to an HTTP status and error payload
pub fn from_error(err: Error) -> ApiError {
    match &err {
        Error::InvalidInput { .. } => (Status::BadRequest, ErrorResponse::new(err.to_string())),
        Error::UnknownModel { .. } => (Status::NotFound, ErrorResponse::new(err.to_string())),
        Error::ResourceUnavailable { .. } | Error::ModelUnavailable { .. } => {
            warn!(error = %err, "dependency unavailable");
            (
                Status::ServiceUnavailable,
                ErrorResponse::new(err.to_string()),
            )
        }
        _ => {
            // Unexpected failures propagate here unmodified; log the
            // cause, hide it from the caller.
            error!(error = %err, "unhandled error while serving request");
            (
                Status::InternalServerError,
                ErrorResponse::new("Internal Server Error"),
            )
        }
    }
}
