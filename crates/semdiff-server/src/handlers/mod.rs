//! Request Handlers
//!
//! One module per endpoint group. Validation lives here, at the
//! boundary: the strict semantic path rejects out-of-range thresholds
//! and uncataloged models before the core sees them, while the document
//! path fills configured defaults in instead.

/// Document comparison (lenient path)
pub mod compare;
/// Service metadata endpoints
pub mod meta;
/// Semantic comparison (strict path)
pub mod semantic;

use rocket::http::Status;
use tracing::{debug, info};

use semdiff_domain::constants::{SIMILARITY_THRESHOLD_MAX, SIMILARITY_THRESHOLD_MIN};
use semdiff_domain::value_objects::model::is_cataloged;

use crate::error::ApiError;
use crate::models::ErrorResponse;
use crate::state::AppState;

/// Reject thresholds outside the accepted range
pub(crate) fn validate_threshold(threshold: f32) -> Result<(), ApiError> {
    if !(SIMILARITY_THRESHOLD_MIN..=SIMILARITY_THRESHOLD_MAX).contains(&threshold) {
        info!("Provided similarity threshold is out of the defined valid range [0,1]");
        return Err((
            Status::BadRequest,
            ErrorResponse::new(
                "Provided similarity threshold is out of the defined valid range [0,1]",
            ),
        ));
    }
    Ok(())
}

/// Reject model selectors that do not name a cataloged model
pub(crate) fn validate_model(model: &str) -> Result<(), ApiError> {
    if !is_cataloged(model) {
        info!("Invalid model selected. {model} does not exist.");
        return Err((
            Status::NotFound,
            ErrorResponse::new(format!("Invalid model selected. {model} does not exist.")),
        ));
    }
    Ok(())
}

/// Record the language-support verdict in the append-only cache
pub(crate) fn note_language_support(state: &AppState, language: &str) {
    let segmenter = state.service.segmenter().clone();
    let linguistic = state
        .languages
        .check_or_insert_with(language, || segmenter.is_linguistic(language));
    debug!(language, linguistic, "language support verdict");
}
