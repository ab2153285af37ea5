// Drug interaction lookup
//
// *L'Interaction* (The Interaction) - Known risky pairs plus a generic warning

use lemodele::Severity;
use serde::{Deserialize, Serialize};

/// Pairs with a documented interaction, matched in either order
const KNOWN_PAIRS: &[(&str, &str, Severity, &str)] = &[
    (
        "warfarin",
        "aspirin",
        Severity::High,
        "Combined anticoagulant effect increases bleeding risk",
    ),
    (
        "lisinopril",
        "ibuprofen",
        Severity::Moderate,
        "NSAIDs can blunt the antihypertensive effect and strain kidneys",
    ),
    (
        "simvastatin",
        "clarithromycin",
        Severity::High,
        "Macrolide inhibition raises statin levels and myopathy risk",
    ),
];

/// One flagged medication pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugInteraction {
    /// First medication of the pair
    pub drug_a: String,

    /// Second medication of the pair
    pub drug_b: String,

    /// Interaction severity
    pub severity: Severity,

    /// What the combination risks
    pub description: String,
}

/// Interaction check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionReport {
    /// Flagged pairs
    pub interactions: Vec<DrugInteraction>,

    /// True when nothing was flagged
    pub safe: bool,
}

/// Check a medication list for interactions
///
/// Fewer than two medications is trivially safe. With two or more, the
/// leading pair is always reported: a known risky pair gets its table
/// entry, anything else the generic moderate warning the demo ships.
pub fn check_interactions(medications: &[String]) -> InteractionReport {
    if medications.len() < 2 {
        return InteractionReport {
            interactions: Vec::new(),
            safe: true,
        };
    }

    let drug_a = &medications[0];
    let drug_b = &medications[1];

    let interaction = lookup_pair(drug_a, drug_b).unwrap_or_else(|| DrugInteraction {
        drug_a: drug_a.clone(),
        drug_b: drug_b.clone(),
        severity: Severity::Moderate,
        description: "May increase risk of side effects".to_string(),
    });

    InteractionReport {
        interactions: vec![interaction],
        safe: false,
    }
}

fn lookup_pair(drug_a: &str, drug_b: &str) -> Option<DrugInteraction> {
    let a = drug_a.to_lowercase();
    let b = drug_b.to_lowercase();

    KNOWN_PAIRS
        .iter()
        .find(|(first, second, _, _)| {
            (a == *first && b == *second) || (a == *second && b == *first)
        })
        .map(|(_, _, severity, description)| DrugInteraction {
            drug_a: drug_a.to_string(),
            drug_b: drug_b.to_string(),
            severity: *severity,
            description: description.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_medication_is_safe() {
        let report = check_interactions(&meds(&["aspirin"]));
        assert!(report.safe);
        assert!(report.interactions.is_empty());
    }

    #[test]
    fn test_empty_list_is_safe() {
        let report = check_interactions(&[]);
        assert!(report.safe);
    }

    #[test]
    fn test_known_pair_uses_table_entry() {
        let report = check_interactions(&meds(&["Warfarin", "Aspirin"]));
        assert!(!report.safe);
        assert_eq!(report.interactions.len(), 1);
        assert_eq!(report.interactions[0].severity, Severity::High);
        assert!(report.interactions[0].description.contains("bleeding"));
    }

    #[test]
    fn test_known_pair_matches_in_either_order() {
        let report = check_interactions(&meds(&["ibuprofen", "lisinopril"]));
        assert_eq!(report.interactions[0].severity, Severity::Moderate);
        assert!(report.interactions[0].description.contains("NSAID"));
    }

    #[test]
    fn test_unknown_pair_gets_generic_warning() {
        let report = check_interactions(&meds(&["acetaminophen", "loratadine"]));
        assert!(!report.safe);
        assert_eq!(report.interactions[0].severity, Severity::Moderate);
        assert_eq!(
            report.interactions[0].description,
            "May increase risk of side effects"
        );
    }
}
