//! Estimates how well a decision's impact lines up with a target role.

mod advice;

pub use advice::generate_advice;

use crate::decisions::{ImpactDimension, ImpactVector};
use serde::Serialize;
use std::collections::BTreeMap;

pub const UNCLEAR_DREAM_ADVICE: &str = "Dream unclear. Your effort looks confused too.";
pub const NEUTRAL_PERCENT: u8 = 50;

/// Weights a role places on each impact dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRequirement {
    pub role: &'static str,
    pub weights: &'static [(ImpactDimension, i32)],
}

impl RoleRequirement {
    pub fn max_score(&self) -> i64 {
        self.weights.iter().map(|(_, weight)| i64::from(*weight)).sum()
    }

    /// Sums the vector over the dimensions this role cares about.
    pub fn score(&self, vector: ImpactVector) -> i64 {
        self.weights
            .iter()
            .map(|(dimension, _)| i64::from(vector.get(*dimension)))
            .sum()
    }
}

static ROLE_REQUIREMENTS: [RoleRequirement; 6] = [
    RoleRequirement {
        role: "software engineer",
        weights: &[
            (ImpactDimension::Health, 2),
            (ImpactDimension::Focus, 5),
            (ImpactDimension::Career, 4),
        ],
    },
    RoleRequirement {
        role: "data scientist",
        weights: &[
            (ImpactDimension::Health, 2),
            (ImpactDimension::Focus, 5),
            (ImpactDimension::Career, 4),
        ],
    },
    RoleRequirement {
        role: "entrepreneur",
        weights: &[
            (ImpactDimension::Health, 3),
            (ImpactDimension::Focus, 4),
            (ImpactDimension::Career, 5),
        ],
    },
    RoleRequirement {
        role: "government job",
        weights: &[
            (ImpactDimension::Health, 3),
            (ImpactDimension::Focus, 4),
            (ImpactDimension::Career, 4),
        ],
    },
    RoleRequirement {
        role: "ai engineer",
        weights: &[
            (ImpactDimension::Health, 2),
            (ImpactDimension::Focus, 5),
            (ImpactDimension::Career, 5),
        ],
    },
    RoleRequirement {
        role: "doctor",
        weights: &[
            (ImpactDimension::Health, 5),
            (ImpactDimension::Focus, 4),
            (ImpactDimension::Career, 4),
        ],
    },
];

pub fn role_requirements() -> &'static [RoleRequirement] {
    &ROLE_REQUIREMENTS
}

/// Trims and lowercases before matching.
pub fn find_role(role_name: &str) -> Option<&'static RoleRequirement> {
    let normalized = role_name.trim().to_lowercase();
    ROLE_REQUIREMENTS
        .iter()
        .find(|requirement| requirement.role == normalized)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityEstimate {
    pub score: i64,
    pub percent: u8,
    pub advice: &'static str,
}

impl CapabilityEstimate {
    const fn unclear() -> Self {
        Self {
            score: 0,
            percent: NEUTRAL_PERCENT,
            advice: UNCLEAR_DREAM_ADVICE,
        }
    }
}

/// Maps the vector onto 0..=100, with the zero vector landing on exactly 50.
pub fn estimate_capability(vector: ImpactVector, role_name: &str) -> CapabilityEstimate {
    let Some(requirement) = find_role(role_name) else {
        return CapabilityEstimate::unclear();
    };

    let max_score = requirement.max_score();
    if max_score <= 0 {
        return CapabilityEstimate::unclear();
    }

    let score = requirement.score(vector);
    let numerator = score.saturating_add(max_score).saturating_mul(100);
    let percent = round_half_even(numerator, 2 * max_score).clamp(0, 100) as u8;

    CapabilityEstimate {
        score,
        percent,
        advice: advice_for_percent(percent),
    }
}

pub fn advice_for_percent(percent: u8) -> &'static str {
    match percent {
        0..=29 => "Hard truth: At this pace, your dream is almost impossible. Change now or forget it.",
        30..=49 => "You are struggling. Fix habits fast or lower expectations.",
        50..=69 => "Decent progress. Keep discipline high to reach your dream.",
        70..=89 => "Good work! You are on track, just maintain consistency.",
        _ => "Excellent! Your habits perfectly align with your dream. Keep it up.",
    }
}

// denominator > 0
fn round_half_even(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    let twice_remainder = numerator.rem_euclid(denominator) * 2;

    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

/// Serializable row for catalog listings.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCatalogEntry {
    pub role: &'static str,
    pub requirements: BTreeMap<&'static str, i32>,
}

impl From<&RoleRequirement> for RoleCatalogEntry {
    fn from(requirement: &RoleRequirement) -> Self {
        Self {
            role: requirement.role,
            requirements: requirement
                .weights
                .iter()
                .map(|(dimension, weight)| (dimension.key(), *weight))
                .collect(),
        }
    }
}
