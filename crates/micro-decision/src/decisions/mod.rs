//! Static decision vocabulary and the pure aggregation rules applied to it.

mod aggregate;
pub mod catalog;
pub mod domain;

pub use aggregate::{butterfly_intensity, detect_pattern, total_impact};
pub use catalog::{classify, explain, impact_for, DecisionCatalogEntry, DecisionProfile};
pub use domain::{DecisionClass, DecisionId, ImpactDimension, ImpactVector, PatternLabel};
