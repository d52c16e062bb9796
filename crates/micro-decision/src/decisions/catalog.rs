use super::aggregate::total_impact;
use super::domain::{DecisionClass, ImpactVector};
use serde::Serialize;

const GENERIC_EXPLANATION: &str =
    "Small decisions seem harmless, but their repeated effects compound into major life outcomes.";

/// Static description of one decision in the closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionProfile {
    pub id: &'static str,
    pub label: &'static str,
    pub class: DecisionClass,
    pub impact: ImpactVector,
    pub explanation: Option<&'static str>,
}

static DECISIONS: [DecisionProfile; 10] = [
    DecisionProfile {
        id: "D1",
        label: "Late sleep",
        class: DecisionClass::Bad,
        impact: ImpactVector::new(-3, -4, -2),
        explanation: Some(
            "Sleeping late slightly reduces sleep quality. Repeating this daily compounds into poor focus, stress, and long-term productivity loss.",
        ),
    },
    DecisionProfile {
        id: "D2",
        label: "Low study time",
        class: DecisionClass::Bad,
        impact: ImpactVector::new(-1, -3, -4),
        explanation: Some(
            "Studying less today creates small knowledge gaps. Over weeks, these gaps accumulate and strongly impact academic and career growth.",
        ),
    },
    DecisionProfile {
        id: "D3",
        label: "Excess social media",
        class: DecisionClass::Bad,
        impact: ImpactVector::new(-2, -4, -3),
        explanation: Some(
            "Excess social media causes minor attention loss. Repetition fragments focus, affecting mental health and career performance.",
        ),
    },
    DecisionProfile {
        id: "D4",
        label: "Skipping exercise",
        class: DecisionClass::Bad,
        impact: ImpactVector::new(-4, -2, -1),
        explanation: Some(
            "Skipping exercise lowers energy slightly. Over time, this compounds into health issues and reduced stress tolerance.",
        ),
    },
    DecisionProfile {
        id: "D5",
        label: "Junk food",
        class: DecisionClass::Bad,
        impact: ImpactVector::new(-3, -2, -2),
        explanation: Some(
            "Eating junk food affects metabolism and brain clarity. Repeated intake reduces energy and decision quality.",
        ),
    },
    DecisionProfile {
        id: "G1",
        label: "Consistent sleep",
        class: DecisionClass::Good,
        impact: ImpactVector::new(4, 3, 2),
        explanation: None,
    },
    DecisionProfile {
        id: "G2",
        label: "Daily study",
        class: DecisionClass::Good,
        impact: ImpactVector::new(1, 4, 5),
        explanation: None,
    },
    DecisionProfile {
        id: "G3",
        label: "Exercise",
        class: DecisionClass::Good,
        impact: ImpactVector::new(5, 2, 1),
        explanation: None,
    },
    DecisionProfile {
        id: "G4",
        label: "Reading / learning",
        class: DecisionClass::Good,
        impact: ImpactVector::new(1, 3, 4),
        explanation: None,
    },
    DecisionProfile {
        id: "G5",
        label: "Healthy diet",
        class: DecisionClass::Good,
        impact: ImpactVector::new(4, 2, 2),
        explanation: None,
    },
];

pub fn entries() -> &'static [DecisionProfile] {
    &DECISIONS
}

/// Exact, case-sensitive lookup into the decision table.
pub fn lookup(decision_id: &str) -> Option<&'static DecisionProfile> {
    DECISIONS.iter().find(|profile| profile.id == decision_id)
}

/// Unknown identifiers resolve to [`ImpactVector::ZERO`].
pub fn impact_for(decision_id: &str) -> ImpactVector {
    lookup(decision_id)
        .map(|profile| profile.impact)
        .unwrap_or(ImpactVector::ZERO)
}

pub fn classify(decision_id: &str) -> DecisionClass {
    lookup(decision_id)
        .map(|profile| profile.class)
        .unwrap_or(DecisionClass::Unknown)
}

/// Builds the narrative shown next to an analysis.
pub fn explain(decision_id: &str, impact: ImpactVector) -> String {
    let base = lookup(decision_id)
        .and_then(|profile| profile.explanation)
        .unwrap_or(GENERIC_EXPLANATION);

    format!(
        "{base} Base impact score = {}. Repetition amplifies this into a butterfly effect.",
        total_impact(impact)
    )
}

/// Serializable row for catalog listings.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionCatalogEntry {
    pub decision_id: &'static str,
    pub label: &'static str,
    pub habit_type: DecisionClass,
    pub impact: ImpactVector,
}

impl From<&DecisionProfile> for DecisionCatalogEntry {
    fn from(profile: &DecisionProfile) -> Self {
        Self {
            decision_id: profile.id,
            label: profile.label,
            habit_type: profile.class,
            impact: profile.impact,
        }
    }
}
