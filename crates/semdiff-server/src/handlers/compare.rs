//! Document Comparison Handler
//!
//! The lenient entry path: a missing threshold falls back to the
//! configured service default, and an unknown model selector resolves to
//! the catalog default instead of failing. A threshold that *is*
//! supplied must still be in range.

use rocket::State;
use rocket::post;
use rocket::serde::json::Json;
use tracing::info;

use semdiff_application::use_cases::ComparisonRequest;

use crate::error::{ApiError, from_error};
use crate::handlers::{note_language_support, validate_threshold};
use crate::models::{CompareRequest, CompareResponse};
use crate::state::AppState;

/// Compare two documents and report missing and extra sentences
///
/// POST /semdiff/v1/articles/compare
#[post("/articles/compare", format = "json", data = "<payload>")]
pub async fn compare_documents(
    state: &State<AppState>,
    payload: Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    info!("Calling document compare endpoint.");
    let payload = payload.into_inner();

    if let Some(threshold) = payload.comparison_threshold {
        validate_threshold(threshold)?;
    }

    note_language_support(state, &payload.article_text_blob_1_language);
    note_language_support(state, &payload.article_text_blob_2_language);

    let request = ComparisonRequest {
        text_a: payload.article_text_blob_1,
        text_b: payload.article_text_blob_2,
        lang_a: payload.article_text_blob_1_language,
        lang_b: payload.article_text_blob_2_language,
        threshold: Some(
            payload
                .comparison_threshold
                .unwrap_or(state.default_threshold),
        ),
        model: Some(
            payload
                .model_name
                .unwrap_or_else(|| state.default_model.clone()),
        ),
    };

    let outcome = state.service.compare(&request).await.map_err(from_error)?;

    Ok(Json(CompareResponse {
        comparisons: vec![outcome.into()],
    }))
}
