use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier naming a habitual micro-decision (`D1`, `G3`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(pub String);

impl DecisionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DecisionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Life areas a decision is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactDimension {
    Health,
    Focus,
    Career,
}

impl ImpactDimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Health, Self::Focus, Self::Career]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Focus => "focus",
            Self::Career => "career",
        }
    }
}

/// Signed effect of a single decision across every [`ImpactDimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImpactVector {
    pub health: i32,
    pub focus: i32,
    pub career: i32,
}

impl ImpactVector {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(health: i32, focus: i32, career: i32) -> Self {
        Self {
            health,
            focus,
            career,
        }
    }

    pub const fn get(self, dimension: ImpactDimension) -> i32 {
        match dimension {
            ImpactDimension::Health => self.health,
            ImpactDimension::Focus => self.focus,
            ImpactDimension::Career => self.career,
        }
    }

    pub fn values(self) -> impl Iterator<Item = i32> {
        ImpactDimension::ordered()
            .into_iter()
            .map(move |dimension| self.get(dimension))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionClass {
    Good,
    Bad,
    Unknown,
}

impl DecisionClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Unknown => "unknown",
        }
    }
}

/// Categorical summary of the signs in an [`ImpactVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternLabel {
    #[serde(rename = "Negative Habit Loop (Compounding Loss)")]
    NegativeHabitLoop,
    #[serde(rename = "Positive Growth Loop (Compounding Gain)")]
    PositiveGrowthLoop,
    #[serde(rename = "Neutral / Mixed Behavior Pattern")]
    NeutralMixed,
}

impl PatternLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NegativeHabitLoop => "Negative Habit Loop (Compounding Loss)",
            Self::PositiveGrowthLoop => "Positive Growth Loop (Compounding Gain)",
            Self::NeutralMixed => "Neutral / Mixed Behavior Pattern",
        }
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
