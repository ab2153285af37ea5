// leprotocole - Treatment Protocols
//
// *Le Protocole* (The Protocol) - Canned recommendations, care plans, and interactions

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod protocols;
pub mod careplan;
pub mod interactions;

pub use protocols::{AgeGroup, ProtocolBook};
pub use careplan::CarePlan;
pub use interactions::{check_interactions, DrugInteraction, InteractionReport};

/// Protocol library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
