// Structured care plans
//
// *Le Plan* (The Plan) - First-line, ongoing, and monitoring guidance per condition

use lemodele::Severity;
use serde::{Deserialize, Serialize};

/// Structured treatment plan for one condition at one severity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarePlan {
    /// First-line interventions
    pub immediate_care: Vec<String>,

    /// Second-line / ongoing treatment
    pub ongoing_treatment: Vec<String>,

    /// What to monitor while the plan runs
    pub monitoring_plan: Vec<String>,

    /// Lifestyle guidance, general plus condition-specific
    pub lifestyle_modifications: Vec<String>,

    /// Follow-up schedule derived from severity
    pub follow_up: String,
}

impl CarePlan {
    /// Build the plan for a condition and severity
    pub fn for_condition(condition: &str, severity: Severity) -> Self {
        let (first_line, second_line, monitoring) = protocol_lines(condition);

        Self {
            immediate_care: to_strings(first_line),
            ongoing_treatment: to_strings(second_line),
            monitoring_plan: to_strings(monitoring),
            lifestyle_modifications: lifestyle(condition),
            follow_up: follow_up_schedule(severity).to_string(),
        }
    }
}

type ProtocolLines = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

fn protocol_lines(condition: &str) -> ProtocolLines {
    match condition {
        "Common Cold" => (
            &["Rest", "Hydration", "Symptomatic care"],
            &["Decongestants", "Cough suppressants"],
            &["Temperature", "Symptom progression"],
        ),
        "Influenza" => (
            &["Antiviral medications", "Rest", "Isolation"],
            &["Supportive care", "Fever management"],
            &["Respiratory status", "Complications"],
        ),
        "Heart Disease" => (
            &["Cardiac medications", "Lifestyle modifications"],
            &["Interventional procedures", "Surgery"],
            &["Cardiac function", "Blood pressure", "Symptoms"],
        ),
        _ => (
            &["Consult healthcare provider"],
            &["Symptomatic treatment"],
            &["General health status"],
        ),
    }
}

fn lifestyle(condition: &str) -> Vec<String> {
    let mut entries = to_strings(&[
        "Maintain healthy diet",
        "Regular exercise",
        "Adequate sleep",
    ]);

    let specific: &[&str] = match condition {
        "Heart Disease" => &[
            "Low sodium diet",
            "Cardiac rehabilitation",
            "Stress management",
        ],
        "Diabetes" => &[
            "Blood sugar monitoring",
            "Diabetic diet",
            "Weight management",
        ],
        "Hypertension" => &[
            "DASH diet",
            "Regular blood pressure monitoring",
            "Reduce alcohol",
        ],
        _ => &[],
    };

    entries.extend(specific.iter().map(|s| s.to_string()));
    entries
}

fn follow_up_schedule(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "Follow-up in 24-48 hours",
        Severity::Moderate => "Follow-up in 1-2 weeks",
        Severity::Mild => "Follow-up as needed or if symptoms worsen",
    }
}

fn to_strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}
