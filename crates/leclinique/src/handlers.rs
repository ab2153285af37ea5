//! HTTP handlers for REST API endpoints

use axum::{extract::State, routing::get, routing::post, Json, Router};
use lemodele::{training_corpus, EnsemblePredictor, Severity};
use leprotocole::{check_interactions, AgeGroup, CarePlan, ProtocolBook};
use lerisque::{stratify, AnalyticsSnapshot};
use std::sync::Arc;
use tracing::info;

use crate::config::ClinicConfig;
use crate::error::{ApiError, ApiResult};
use crate::responses::{
    AdvancedPredictionResponse, HealthCheckResponse, ImageAnalysisResponse,
    InteractionCheckResponse, InteractionRequest, ModelPerformanceResponse,
    PredictRequest, PredictionResponse, RiskAssessmentRequest, RiskAssessmentResponse,
    TreatmentProtocolRequest, TreatmentProtocolResponse,
};

/// Default patient age when the request omits it
const DEFAULT_AGE: u32 = 30;

/// State shared across all handlers
///
/// The predictor is trained once at startup and never mutated, so
/// handlers share it behind plain `Arc`s with no locking.
#[derive(Clone)]
pub struct AppState {
    /// Trained ensemble, ready to predict
    pub predictor: Arc<EnsemblePredictor>,

    /// Treatment recommendation tables
    pub protocols: Arc<ProtocolBook>,

    /// Immutable server configuration
    pub config: Arc<ClinicConfig>,
}

impl AppState {
    /// Train the models and assemble shared state
    pub fn new(config: ClinicConfig) -> Result<Self, ApiError> {
        let predictor = EnsemblePredictor::train(&training_corpus())
            .map_err(|e| ApiError::internal(format!("Failed to train models: {}", e)))?;

        info!(
            models = predictor.model_names().len(),
            conditions = predictor.conditions().len(),
            "models trained"
        );

        Ok(Self {
            predictor: Arc::new(predictor),
            protocols: Arc::new(ProtocolBook::new()),
            config: Arc::new(config),
        })
    }
}

/// GET /api/health - Service health check
pub async fn health_check(
    State(_state): State<AppState>,
) -> ApiResult<Json<HealthCheckResponse>> {
    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "leclinique".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_trained: true,
    }))
}

/// POST /api/predict - Basic single-model prediction
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<PredictionResponse>> {
    let symptoms = required_symptoms(&request.symptoms)?;

    let prediction = state.predictor.predict(symptoms)?;
    let recommendations = state.protocols.basic_recommendations(&prediction.condition);

    info!(disease = %prediction.condition, confidence = prediction.confidence, "prediction");

    Ok(Json(PredictionResponse {
        disease: prediction.condition,
        confidence: prediction.confidence,
        symptoms_match: prediction.matched_terms,
        recommendations,
        severity: prediction.severity,
    }))
}

/// POST /api/advanced-predict - Ensemble prediction with risk assessment
pub async fn advanced_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<AdvancedPredictionResponse>> {
    let symptoms = required_symptoms(&request.symptoms)?;

    let age = request.age.unwrap_or(DEFAULT_AGE);
    let age_group = AgeGroup::from_age(age);

    let ensemble = state.predictor.ensemble_predict(symptoms)?;
    let recommendations = state.protocols.recommendations_for(
        &ensemble.condition,
        ensemble.severity,
        age_group,
    );

    let risk_assessment = stratify::assess(&stratify::PatientProfile {
        age,
        symptoms: symptoms.to_string(),
        medical_history: String::new(),
        gender: request.gender.unwrap_or_else(|| "unknown".to_string()),
    });

    Ok(Json(AdvancedPredictionResponse {
        disease: ensemble.condition,
        confidence: ensemble.confidence,
        model_agreement: ensemble.agreement,
        individual_predictions: ensemble.individual_predictions,
        individual_confidences: ensemble.individual_confidences,
        recommendations,
        risk_assessment,
        severity: ensemble.severity,
    }))
}

/// POST /api/treatment-protocol - Protocol lookup for a known condition
pub async fn treatment_protocol(
    State(state): State<AppState>,
    Json(request): Json<TreatmentProtocolRequest>,
) -> ApiResult<Json<TreatmentProtocolResponse>> {
    let disease = match request.disease.as_deref() {
        Some(d) if !d.trim().is_empty() => d.trim().to_string(),
        _ => return Err(ApiError::bad_request("Disease is required")),
    };

    // Unknown tiers fall back to the middle of the road, as the demo
    // dashboard sends free-form strings here
    let severity = request
        .severity
        .as_deref()
        .and_then(|s| s.parse::<Severity>().ok())
        .unwrap_or(Severity::Moderate);
    let age_group = request
        .age_group
        .as_deref()
        .and_then(|s| s.parse::<AgeGroup>().ok())
        .unwrap_or(AgeGroup::Adult);

    let treatment_protocol = state
        .protocols
        .recommendations_for(&disease, severity, age_group);
    let care_plan = CarePlan::for_condition(&disease, severity);

    Ok(Json(TreatmentProtocolResponse {
        disease,
        severity,
        age_group,
        treatment_protocol,
        care_plan,
        generated_at: state.predictor.trained_at().to_string(),
    }))
}

/// POST /api/risk-assessment - Risk stratification for a patient
pub async fn risk_assessment(
    State(state): State<AppState>,
    Json(request): Json<RiskAssessmentRequest>,
) -> ApiResult<Json<RiskAssessmentResponse>> {
    let risk_scores = stratify::assess(&stratify::PatientProfile {
        age: request.age.unwrap_or(DEFAULT_AGE),
        symptoms: request.symptoms.unwrap_or_default(),
        medical_history: request.medical_history.unwrap_or_default(),
        gender: request.gender.unwrap_or_else(|| "unknown".to_string()),
    });

    Ok(Json(RiskAssessmentResponse {
        risk_scores,
        assessment_date: state.predictor.trained_at().to_string(),
        recommendations: RiskAssessmentResponse::standard_recommendations(),
    }))
}

/// GET /api/model-performance - Training performance per model
pub async fn model_performance(
    State(state): State<AppState>,
) -> ApiResult<Json<ModelPerformanceResponse>> {
    Ok(Json(ModelPerformanceResponse {
        model_performance: state.predictor.performance().clone(),
        models_available: state
            .predictor
            .model_names()
            .iter()
            .map(|n| n.to_string())
            .collect(),
        training_status: "Trained".to_string(),
        last_updated: state.predictor.trained_at().to_string(),
    }))
}

/// POST /api/health-analytics - Canned analytics snapshot
pub async fn health_analytics(
    State(state): State<AppState>,
) -> ApiResult<Json<AnalyticsSnapshot>> {
    Ok(Json(AnalyticsSnapshot::demo(
        state.predictor.performance().clone(),
    )))
}

/// POST /api/check-interactions - Medication interaction lookup
pub async fn interactions(
    State(_state): State<AppState>,
    Json(request): Json<InteractionRequest>,
) -> ApiResult<Json<InteractionCheckResponse>> {
    let medications = request.medications.unwrap_or_default();

    Ok(Json(InteractionCheckResponse {
        report: check_interactions(&medications),
    }))
}

/// POST /api/analyze-image - Canned image analysis placeholder
pub async fn analyze_image(
    State(_state): State<AppState>,
) -> ApiResult<Json<ImageAnalysisResponse>> {
    Ok(Json(ImageAnalysisResponse::placeholder()))
}

/// Create router with all API endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/predict", post(predict))
        .route("/api/advanced-predict", post(advanced_predict))
        .route("/api/treatment-protocol", post(treatment_protocol))
        .route("/api/risk-assessment", post(risk_assessment))
        .route("/api/model-performance", get(model_performance))
        .route("/api/health-analytics", post(health_analytics))
        .route("/api/check-interactions", post(interactions))
        .route("/api/analyze-image", post(analyze_image))
}

fn required_symptoms(symptoms: &Option<String>) -> Result<&str, ApiError> {
    match symptoms.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::bad_request("Symptoms are required")),
    }
}
