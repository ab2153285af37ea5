// lerisque - Risk Stratification
//
// *Le Risque* (The Risk) - Patient risk scoring and demo analytics

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod stratify;
pub mod analytics;

pub use stratify::{PatientProfile, RiskAssessment, RiskCategory};
pub use analytics::AnalyticsSnapshot;

/// Risk library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
