//! Semantic Comparison Handlers
//!
//! The strict entry path: the threshold must lie in [0, 1] (400
//! otherwise) and the model selector must name a cataloged model (404
//! otherwise) before the core is invoked. The default threshold here is
//! 0.75, deliberately different from the document path's configured
//! 0.65.

use rocket::State;
use rocket::serde::json::Json;
use rocket::{get, post};
use tracing::info;
use validator::Validate;

use semdiff_application::use_cases::ComparisonRequest;
use semdiff_domain::constants::{DEFAULT_EMBEDDING_MODEL, SEMANTIC_COMPARE_DEFAULT_THRESHOLD};

use crate::error::{ApiError, from_error};
use crate::handlers::{note_language_support, validate_model, validate_threshold};
use crate::models::{ArticleComparisonResponse, ErrorResponse, SemanticCompareRequest};
use crate::state::AppState;

/// Compare two text blobs (query parameters)
///
/// GET /semdiff/v1/comparison/semantic
#[get("/comparison/semantic?<text_a>&<text_b>&<similarity_threshold>&<model_name>&<lang_a>&<lang_b>")]
pub async fn semantic_compare(
    state: &State<AppState>,
    text_a: String,
    text_b: String,
    similarity_threshold: Option<f32>,
    model_name: Option<String>,
    lang_a: Option<String>,
    lang_b: Option<String>,
) -> Result<Json<ArticleComparisonResponse>, ApiError> {
    info!("Calling semantic comparison endpoint.");

    let threshold = similarity_threshold.unwrap_or(SEMANTIC_COMPARE_DEFAULT_THRESHOLD);
    validate_threshold(threshold)?;

    let model = model_name.unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string());
    validate_model(&model)?;

    run_semantic(
        state,
        text_a,
        text_b,
        lang_a.unwrap_or_else(|| "en".to_string()),
        lang_b.unwrap_or_else(|| "en".to_string()),
        threshold,
        model,
    )
    .await
}

/// Compare two text blobs (JSON body)
///
/// POST /semdiff/v1/comparison/semantic
#[post("/comparison/semantic", format = "json", data = "<payload>")]
pub async fn semantic_compare_post(
    state: &State<AppState>,
    payload: Json<SemanticCompareRequest>,
) -> Result<Json<ArticleComparisonResponse>, ApiError> {
    info!("Calling semantic comparison endpoint (POST).");
    let payload = payload.into_inner();

    payload.validate().map_err(|errors| {
        info!("Provided similarity threshold is out of the defined valid range [0,1]");
        (
            rocket::http::Status::BadRequest,
            ErrorResponse::new(validation_detail(&errors)),
        )
    })?;

    let model = payload
        .model_name
        .clone()
        .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string());
    validate_model(&model)?;

    run_semantic(
        state,
        payload.text_a,
        payload.text_b,
        payload.lang_a,
        payload.lang_b,
        payload.similarity_threshold,
        model,
    )
    .await
}

/// Shared strict-path execution once validation has passed
async fn run_semantic(
    state: &State<AppState>,
    text_a: String,
    text_b: String,
    lang_a: String,
    lang_b: String,
    threshold: f32,
    model: String,
) -> Result<Json<ArticleComparisonResponse>, ApiError> {
    note_language_support(state, &lang_a);
    note_language_support(state, &lang_b);

    let request = ComparisonRequest {
        text_a,
        text_b,
        lang_a,
        lang_b,
        threshold: Some(threshold),
        model: Some(model),
    };

    let outcome = state.service.compare(&request).await.map_err(from_error)?;

    Ok(Json(outcome.into()))
}

/// Flatten validator errors into one detail line
fn validation_detail(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(ToString::to_string))
        .next()
        .unwrap_or_else(|| "Invalid request payload".to_string())
}
