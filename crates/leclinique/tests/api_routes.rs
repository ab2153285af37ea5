// Integration tests for the triage HTTP API
//
// These drive the assembled router the way the dashboard does: JSON
// bodies in, JSON bodies out, across every endpoint the service mounts.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use leclinique::handlers::{create_router, AppState};
use leclinique::ClinicConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Body size limit for test reads
const BODY_LIMIT: usize = 1024 * 1024;

fn app() -> axum::Router {
    let state = AppState::new(ClinicConfig::default()).expect("state builds");
    create_router().with_state(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn health_endpoint_reports_trained_models() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_trained"], true);
}

#[tokio::test]
async fn predict_round_trip() {
    let request = post_json("/api/predict", json!({"symptoms": "fever headache cough fatigue"}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["disease"].is_string());
    assert!(body["confidence"].as_f64().unwrap() > 0.0);
    assert!(body["recommendations"].as_array().unwrap().len() >= 2);
    assert!(body["symptoms_match"].as_array().unwrap().len() <= 3);
}

#[tokio::test]
async fn predict_without_symptoms_is_bad_request() {
    let request = post_json("/api/predict", json!({"age": 40}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Symptoms are required");
}

#[tokio::test]
async fn predict_gibberish_is_unprocessable() {
    let request = post_json("/api/predict", json!({"symptoms": "zzz qqq www"}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn advanced_predict_returns_ensemble_fields() {
    let request = post_json(
        "/api/advanced-predict",
        json!({"symptoms": "severe headache nausea vomiting sensitivity light", "age": 72}),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["disease"], "Migraine");
    assert_eq!(body["individual_predictions"].as_object().unwrap().len(), 3);
    assert!(body["model_agreement"].as_f64().unwrap() >= 33.3);
    assert!(body["risk_assessment"]["overall_risk"].as_f64().unwrap() > 0.0);
    // Age 72 routes through the senior addenda
    let recommendations: Vec<String> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(recommendations.contains(&"Extra caution due to age".to_string()));
}

#[tokio::test]
async fn treatment_protocol_round_trip() {
    let request = post_json(
        "/api/treatment-protocol",
        json!({"disease": "Heart Disease", "severity": "high", "age_group": "senior"}),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["disease"], "Heart Disease");
    assert_eq!(body["severity"], "High");
    assert_eq!(body["age_group"], "Senior");
    assert_eq!(body["care_plan"]["follow_up"], "Follow-up in 24-48 hours");
    let protocol: Vec<String> = body["treatment_protocol"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(protocol.contains(&"Emergency care".to_string()));
}

#[tokio::test]
async fn treatment_protocol_without_disease_is_bad_request() {
    let request = post_json("/api/treatment-protocol", json!({"severity": "high"}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn risk_assessment_round_trip() {
    let request = post_json(
        "/api/risk-assessment",
        json!({
            "age": 80,
            "symptoms": "chest pain shortness of breath",
            "medical_history": "diabetes and hypertension"
        }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["risk_scores"]["risk_category"], "High");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
    assert!(body["assessment_date"].is_string());
}

#[tokio::test]
async fn model_performance_round_trip() {
    let response = app().oneshot(get("/api/model-performance")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["training_status"], "Trained");
    assert_eq!(body["models_available"].as_array().unwrap().len(), 3);
    let performance = body["model_performance"].as_object().unwrap();
    assert!(performance.contains_key("naive_bayes"));
    assert!(performance.contains_key("nearest_centroid"));
    assert!(performance.contains_key("cosine_knn"));
}

#[tokio::test]
async fn health_analytics_round_trip() {
    let request = post_json("/api/health-analytics", json!({}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["patient_trends"]["total_patients_analyzed"], 1247);
    assert_eq!(
        body["model_insights"]["individual_model_performance"]
            .as_object()
            .unwrap()
            .len(),
        3
    );
}

#[tokio::test]
async fn check_interactions_round_trip() {
    let request = post_json(
        "/api/check-interactions",
        json!({"medications": ["warfarin", "aspirin"]}),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["safe"], false);
    assert_eq!(body["interactions"][0]["severity"], "High");
}

#[tokio::test]
async fn analyze_image_round_trip() {
    let request = post_json("/api/analyze-image", json!({}));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["analysis"], "Normal chest X-ray");
}
