//! Service Metadata Handlers

use rocket::get;
use rocket::serde::json::Json;
use serde_json::{Value, json};

use semdiff_domain::value_objects::model::catalog_ids;

/// Service information
///
/// GET /
#[get("/")]
pub fn root() -> Json<Value> {
    Json(json!({
        "message": "Semdiff API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "compare": "/semdiff/v1/articles/compare",
            "semantic": "/semdiff/v1/comparison/semantic",
        },
        "models": catalog_ids(),
    }))
}

/// Health check
///
/// GET /health
#[get("/health")]
pub fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
