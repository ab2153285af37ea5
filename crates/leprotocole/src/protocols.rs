// Recommendation tables
//
// *Le Livre* (The Book) - Condition and severity keyed treatment guidance

use lemodele::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient age bracket used to adjust recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Under 18
    Youth,

    /// 18 to 64
    Adult,

    /// 65 and over
    Senior,
}

impl AgeGroup {
    /// Bracket an age in years
    pub fn from_age(age: u32) -> Self {
        if age >= 65 {
            AgeGroup::Senior
        } else if age >= 18 {
            AgeGroup::Adult
        } else {
            AgeGroup::Youth
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgeGroup::Youth => "Youth",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "youth" => Ok(AgeGroup::Youth),
            "adult" => Ok(AgeGroup::Adult),
            "senior" => Ok(AgeGroup::Senior),
            other => Err(format!("unknown age group: {}", other)),
        }
    }
}

/// Fixed treatment recommendation tables
///
/// Conditions without a dedicated entry fall back to generic guidance,
/// so every lookup produces something actionable.
#[derive(Debug, Clone, Default)]
pub struct ProtocolBook;

impl ProtocolBook {
    /// Create the book
    pub fn new() -> Self {
        Self
    }

    /// Severity-graded recommendations, adjusted for age group
    pub fn recommendations_for(
        &self,
        condition: &str,
        severity: Severity,
        age_group: AgeGroup,
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = severity_table(condition, severity)
            .iter()
            .map(|s| s.to_string())
            .collect();

        match age_group {
            AgeGroup::Senior => {
                recommendations.push("Extra caution due to age".to_string());
                recommendations.push("Regular health monitoring".to_string());
            }
            AgeGroup::Youth => {
                recommendations.push("Pediatric dosing considerations".to_string());
                recommendations.push("Parent/guardian supervision".to_string());
            }
            AgeGroup::Adult => {}
        }

        recommendations
    }

    /// Flat per-condition recommendations for the basic predict path
    pub fn basic_recommendations(&self, condition: &str) -> Vec<String> {
        let entries: &[&str] = match condition {
            "Common Cold" => &[
                "Rest and get plenty of sleep",
                "Drink lots of fluids",
                "Use over-the-counter pain relievers",
                "Gargle with salt water",
            ],
            "Influenza" => &[
                "Rest and avoid contact with others",
                "Drink plenty of fluids",
                "Take antiviral medication if prescribed",
                "Use fever reducers as needed",
            ],
            "Heart Disease" => &[
                "Seek immediate medical attention",
                "Take prescribed heart medications",
                "Follow a heart-healthy diet",
                "Exercise as recommended by doctor",
            ],
            "Diabetes" => &[
                "Monitor blood sugar regularly",
                "Follow diabetic diet plan",
                "Take prescribed medications",
                "Exercise regularly",
            ],
            "Hypertension" => &[
                "Monitor blood pressure daily",
                "Reduce sodium intake",
                "Exercise regularly",
                "Take prescribed medications",
            ],
            _ => &[
                "Consult with a healthcare professional",
                "Monitor symptoms closely",
                "Maintain healthy lifestyle",
                "Seek medical attention if symptoms worsen",
            ],
        };

        entries.iter().map(|s| s.to_string()).collect()
    }
}

/// Severity-tiered table entries per condition
fn severity_table(condition: &str, severity: Severity) -> &'static [&'static str] {
    match (condition, severity) {
        ("Common Cold", Severity::Mild) => &[
            "Rest and hydration",
            "Vitamin C supplements",
            "Warm salt water gargle",
        ],
        ("Common Cold", Severity::Moderate) => &[
            "OTC pain relievers",
            "Decongestants",
            "Honey for cough",
            "Monitor symptoms",
        ],
        ("Common Cold", Severity::High) => &[
            "Consult healthcare provider",
            "Antiviral medications",
            "Complete rest",
        ],
        ("Influenza", Severity::Mild) => {
            &["Bed rest", "Increased fluid intake", "Fever reducers"]
        }
        ("Influenza", Severity::Moderate) => {
            &["Antiviral medications", "Symptomatic treatment", "Isolation"]
        }
        ("Influenza", Severity::High) => &[
            "Immediate medical attention",
            "Hospital monitoring",
            "IV fluids",
        ],
        ("Heart Disease", Severity::Mild) => &[
            "Lifestyle modifications",
            "Regular monitoring",
            "Heart-healthy diet",
        ],
        ("Heart Disease", Severity::Moderate) => &[
            "Cardiac medications",
            "Exercise program",
            "Regular check-ups",
        ],
        ("Heart Disease", Severity::High) => &[
            "Emergency care",
            "Invasive procedures",
            "Intensive monitoring",
        ],
        ("Diabetes", Severity::Mild) => &[
            "Blood sugar monitoring",
            "Dietary changes",
            "Exercise routine",
        ],
        ("Diabetes", Severity::Moderate) => &[
            "Oral medications",
            "Insulin therapy",
            "Lifestyle management",
        ],
        ("Diabetes", Severity::High) => &[
            "Intensive insulin therapy",
            "Frequent monitoring",
            "Specialist care",
        ],
        (_, Severity::Mild) => &["General supportive care", "Monitor symptoms"],
        (_, Severity::Moderate) => {
            &["Consult healthcare provider", "Symptomatic treatment"]
        }
        (_, Severity::High) => &["Seek immediate medical attention", "Emergency care"],
    }
}
