use crate::decisions::DecisionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::IntErrorKind;

pub const DEFAULT_DREAM_JOB: &str = "your dream career";

/// Body of an analyze call as received over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub decision_id: Option<String>,
    #[serde(default)]
    pub dream_job: Option<String>,
    #[serde(default)]
    pub frequency: Option<NumericField>,
    #[serde(default)]
    pub time_period: Option<NumericField>,
}

/// Numeric inputs arrive either as JSON numbers or as form strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Integer(i64),
    Text(String),
    Other(Value),
}

impl NumericField {
    fn parse(&self) -> Option<i64> {
        match self {
            NumericField::Integer(value) => Some(*value),
            NumericField::Text(raw) => match raw.trim().parse::<i64>() {
                Ok(value) => Some(value),
                Err(err) => match err.kind() {
                    IntErrorKind::PosOverflow => Some(i64::MAX),
                    IntErrorKind::NegOverflow => Some(i64::MIN),
                    _ => None,
                },
            },
            // Integers beyond the i64 range saturate by sign.
            NumericField::Other(Value::Number(number)) => {
                if let Some(value) = number.as_i64() {
                    Some(value)
                } else if number.as_u64().is_some() {
                    Some(i64::MAX)
                } else {
                    // `as` saturates out-of-range floats.
                    number
                        .as_f64()
                        .filter(|value| value.fract() == 0.0)
                        .map(|value| value as i64)
                }
            }
            NumericField::Other(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            NumericField::Integer(value) => value.to_string(),
            NumericField::Text(raw) => raw.clone(),
            NumericField::Other(value) => value.to_string(),
        }
    }
}

impl From<i64> for NumericField {
    fn from(value: i64) -> Self {
        NumericField::Integer(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be an integer, got '{value}'")]
    UnparseableNumeric { field: &'static str, value: String },
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// A request that passed validation; every field is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    pub decision_id: DecisionId,
    pub dream_job: String,
    pub frequency: i64,
    pub time_period: i64,
}

impl AnalyzeRequest {
    pub fn new(decision_id: impl Into<String>) -> Self {
        Self {
            decision_id: Some(decision_id.into()),
            ..Self::default()
        }
    }

    /// The decision id is checked before any numeric field is parsed.
    pub fn validate(self) -> Result<AnalysisInput, RequestError> {
        let decision_id = self
            .decision_id
            .map(DecisionId)
            .ok_or(RequestError::MissingField("decision_id"))?;

        let frequency = parse_count("frequency", self.frequency.as_ref())?;
        let time_period = parse_count("time_period", self.time_period.as_ref())?;

        Ok(AnalysisInput {
            decision_id,
            dream_job: self
                .dream_job
                .unwrap_or_else(|| DEFAULT_DREAM_JOB.to_string()),
            frequency,
            time_period,
        })
    }
}

fn parse_count(field: &'static str, raw: Option<&NumericField>) -> Result<i64, RequestError> {
    match raw {
        None => Ok(1),
        Some(value) => value
            .parse()
            .ok_or_else(|| RequestError::UnparseableNumeric {
                field,
                value: value.describe(),
            }),
    }
}
