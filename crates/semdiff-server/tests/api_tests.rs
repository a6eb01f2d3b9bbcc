//! HTTP endpoint tests
//!
//! Uses the Rocket local client against a state wired with the null
//! embedding provider, so no inference server is needed. Validation
//! behavior (status codes, error payload shape) is the focus here;
//! alignment semantics are covered by the application and provider
//! tests.

use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;

use semdiff_infrastructure::config::AppConfig;
use semdiff_server::state::AppState;
use semdiff_server::semdiff_rocket;

/// Build a client backed by the offline null embedding provider
async fn test_client() -> Client {
    let mut config = AppConfig::default();
    config.embedding.provider = "null".to_string();

    let state = AppState::from_config(&config);
    Client::tracked(semdiff_rocket(state))
        .await
        .expect("valid rocket instance")
}

#[rocket::async_test]
async fn health_endpoint_reports_healthy() {
    let client = test_client().await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[rocket::async_test]
async fn root_lists_models_and_endpoints() {
    let client = test_client().await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["models"].as_array().unwrap().len(), 5);
    assert!(json["endpoints"]["semantic"].is_string());
}

#[rocket::async_test]
async fn out_of_range_threshold_is_a_client_error() {
    let client = test_client().await;

    let response = client
        .get("/semdiff/v1/comparison/semantic?text_a=Hi.&text_b=Hi.&similarity_threshold=1.5")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["detail"],
        "Provided similarity threshold is out of the defined valid range [0,1]"
    );
}

#[rocket::async_test]
async fn unknown_model_is_rejected_on_the_strict_path() {
    let client = test_client().await;

    let response = client
        .get("/semdiff/v1/comparison/semantic?text_a=Hi.&text_b=Hi.&model_name=warp-drive")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["detail"],
        "Invalid model selected. warp-drive does not exist."
    );
}

#[rocket::async_test]
async fn identical_texts_have_no_missing_or_extra_info() {
    let client = test_client().await;

    let response = client
        .get("/semdiff/v1/comparison/semantic?text_a=The%20cat%20sat.&text_b=The%20cat%20sat.")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["missing_info"].as_array().unwrap().len(), 0);
    assert_eq!(json["extra_info"].as_array().unwrap().len(), 0);
}

#[rocket::async_test]
async fn post_semantic_validates_the_body_threshold() {
    let client = test_client().await;

    let response = client
        .post("/semdiff/v1/comparison/semantic")
        .header(ContentType::JSON)
        .body(r#"{"text_a": "Hi.", "text_b": "Hi.", "similarity_threshold": 2.0}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["detail"],
        "Provided similarity threshold is out of the defined valid range [0,1]"
    );
}

#[rocket::async_test]
async fn post_semantic_compares_with_defaults() {
    let client = test_client().await;

    let response = client
        .post("/semdiff/v1/comparison/semantic")
        .header(ContentType::JSON)
        .body(r#"{"text_a": "The cat sat.", "text_b": "The cat sat."}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["missing_info"].as_array().unwrap().is_empty());
    assert!(json["extra_info"].as_array().unwrap().is_empty());
}

#[rocket::async_test]
async fn document_compare_accepts_unknown_models_leniently() {
    let client = test_client().await;

    let response = client
        .post("/semdiff/v1/articles/compare")
        .header(ContentType::JSON)
        .body(
            r#"{
                "article_text_blob_1": "First sentence. Second sentence.",
                "article_text_blob_2": "First sentence. Second sentence.",
                "article_text_blob_1_language": "en",
                "article_text_blob_2_language": "en",
                "model_name": "warp-drive"
            }"#,
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let comparison = &json["comparisons"][0];
    assert_eq!(comparison["left_article_array"].as_array().unwrap().len(), 2);
    assert_eq!(comparison["right_article_array"].as_array().unwrap().len(), 2);
    assert!(comparison["left_article_missing_info_index"]
        .as_array()
        .unwrap()
        .is_empty());
    assert!(comparison["right_article_extra_info_index"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[rocket::async_test]
async fn document_compare_rejects_explicit_bad_thresholds() {
    let client = test_client().await;

    let response = client
        .post("/semdiff/v1/articles/compare")
        .header(ContentType::JSON)
        .body(
            r#"{
                "article_text_blob_1": "Hi.",
                "article_text_blob_2": "Hi.",
                "comparison_threshold": -0.2
            }"#,
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn unknown_routes_return_json_detail() {
    let client = test_client().await;

    let response = client.get("/nope").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["detail"], "Not Found");
}

#[rocket::async_test]
async fn unknown_language_codes_do_not_error() {
    let client = test_client().await;

    let response = client
        .get("/semdiff/v1/comparison/semantic?text_a=Hola.&text_b=Hola.&lang_a=zz&lang_b=zz")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}
