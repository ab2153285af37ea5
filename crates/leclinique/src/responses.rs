//! API request and response types matching the dashboard contract

use lemodele::{ModelPerformance, Severity};
use leprotocole::{AgeGroup, CarePlan, InteractionReport};
use lerisque::RiskAssessment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body for the prediction endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Free-text symptom description
    pub symptoms: Option<String>,

    /// Age in years
    pub age: Option<u32>,

    /// Reported gender
    pub gender: Option<String>,
}

/// Body for the treatment protocol endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TreatmentProtocolRequest {
    /// Condition to plan for
    pub disease: Option<String>,

    /// Severity tier; defaults to Moderate
    pub severity: Option<String>,

    /// Age group; defaults to Adult
    pub age_group: Option<String>,
}

/// Body for the risk assessment endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RiskAssessmentRequest {
    /// Age in years
    pub age: Option<u32>,

    /// Free-text symptom description
    pub symptoms: Option<String>,

    /// Free-text medical history
    pub medical_history: Option<String>,

    /// Reported gender
    pub gender: Option<String>,
}

/// Body for the interaction check endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionRequest {
    /// Medication names to check
    pub medications: Option<Vec<String>>,
}

/// Basic prediction response
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    /// Predicted condition
    pub disease: String,

    /// Confidence percent
    pub confidence: f64,

    /// Input terms the model recognized (up to three)
    pub symptoms_match: Vec<String>,

    /// Flat treatment recommendations
    pub recommendations: Vec<String>,

    /// Triage severity tier
    pub severity: Severity,
}

/// Ensemble prediction response
#[derive(Debug, Clone, Serialize)]
pub struct AdvancedPredictionResponse {
    /// Winning condition
    pub disease: String,

    /// Mean confidence percent across models
    pub confidence: f64,

    /// Share of models agreeing with the winner, percent
    pub model_agreement: f64,

    /// Per-model predicted labels
    pub individual_predictions: BTreeMap<String, String>,

    /// Per-model confidence percents
    pub individual_confidences: BTreeMap<String, f64>,

    /// Severity- and age-adjusted recommendations
    pub recommendations: Vec<String>,

    /// Risk stratification for the patient
    pub risk_assessment: RiskAssessment,

    /// Triage severity tier
    pub severity: Severity,
}

/// Treatment protocol response
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentProtocolResponse {
    /// Condition the plan covers
    pub disease: String,

    /// Severity the plan assumes
    pub severity: Severity,

    /// Age group the plan assumes
    pub age_group: AgeGroup,

    /// Flat recommendation list
    pub treatment_protocol: Vec<String>,

    /// Structured care plan
    pub care_plan: CarePlan,

    /// When the serving models were fitted
    pub generated_at: String,
}

/// Risk assessment response
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessmentResponse {
    /// Risk stratification scores
    pub risk_scores: RiskAssessment,

    /// When the serving models were fitted
    pub assessment_date: String,

    /// General preventive guidance
    pub recommendations: Vec<String>,
}

impl RiskAssessmentResponse {
    /// The fixed preventive guidance list every assessment carries
    pub fn standard_recommendations() -> Vec<String> {
        [
            "Regular health screenings based on age and risk factors",
            "Maintain healthy lifestyle habits",
            "Monitor symptoms and seek medical care when needed",
            "Follow preventive care guidelines",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

/// Model performance response
#[derive(Debug, Clone, Serialize)]
pub struct ModelPerformanceResponse {
    /// Per-model training performance
    pub model_performance: BTreeMap<String, ModelPerformance>,

    /// Names of the serving models
    pub models_available: Vec<String>,

    /// Training status string
    pub training_status: String,

    /// When the serving models were fitted
    pub last_updated: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Crate version
    pub version: String,

    /// Whether models are trained and serving
    pub model_trained: bool,
}

/// Interaction check response
#[derive(Debug, Clone, Serialize)]
pub struct InteractionCheckResponse {
    /// The interaction report
    #[serde(flatten)]
    pub report: InteractionReport,
}

/// Canned image analysis response
#[derive(Debug, Clone, Serialize)]
pub struct ImageAnalysisResponse {
    /// Analysis summary
    pub analysis: String,

    /// Confidence percent
    pub confidence: f64,

    /// Findings list
    pub findings: Vec<String>,

    /// Follow-up recommendations
    pub recommendations: Vec<String>,
}

impl ImageAnalysisResponse {
    /// The placeholder result the demo ships
    pub fn placeholder() -> Self {
        Self {
            analysis: "Normal chest X-ray".to_string(),
            confidence: 78.5,
            findings: vec!["No acute abnormalities detected".to_string()],
            recommendations: vec!["Routine follow-up recommended".to_string()],
        }
    }
}
