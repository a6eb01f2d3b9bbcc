//! Route Assembly
//!
//! Builds the Rocket instance: metadata at the root, the comparison API
//! under `/semdiff/v1`, and JSON error catchers so every failure mode
//! keeps the `{"detail": ...}` payload shape.

use rocket::serde::json::Json;
use rocket::{Build, Rocket, catch, catchers, routes};

use crate::handlers::{compare, meta, semantic};
use crate::models::ErrorResponse;
use crate::state::AppState;

/// Create the semdiff Rocket instance
///
/// Routes:
/// - GET  /                                  - service info
/// - GET  /health                            - health check
/// - POST /semdiff/v1/articles/compare       - document comparison
/// - GET  /semdiff/v1/comparison/semantic    - strict semantic comparison
/// - POST /semdiff/v1/comparison/semantic    - strict semantic comparison (body)
pub fn semdiff_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![meta::root, meta::health])
        .mount(
            "/semdiff/v1",
            routes![
                compare::compare_documents,
                semantic::semantic_compare,
                semantic::semantic_compare_post,
            ],
        )
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
}

/// JSON catcher for malformed requests
#[catch(400)]
fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        detail: "Bad Request".to_string(),
    })
}

/// JSON catcher for unknown routes
#[catch(404)]
fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        detail: "Not Found".to_string(),
    })
}

/// JSON catcher for undeserializable payloads
#[catch(422)]
fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        detail: "Unprocessable request payload".to_string(),
    })
}

/// JSON catcher for unexpected failures
#[catch(500)]
fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        detail: "Internal Server Error".to_string(),
    })
}
