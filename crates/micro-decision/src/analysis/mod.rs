//! Request orchestration: validation, scoring, and assembly of the analysis record.
//!
//! Every call is a single pass over the static tables in [`crate::decisions`] and
//! [`crate::capability`]. Nothing is kept between calls.

pub mod batch;
mod request;
pub mod router;

pub use request::{AnalysisInput, AnalyzeRequest, NumericField, RequestError, DEFAULT_DREAM_JOB};
pub use router::analysis_router;

use crate::capability::estimate_capability;
use crate::decisions::{
    butterfly_intensity, classify, detect_pattern, explain, impact_for, DecisionClass, DecisionId,
    ImpactVector, PatternLabel,
};
use serde::Serialize;

/// Response record for one analyzed decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub decision: DecisionId,
    pub pattern: PatternLabel,
    pub butterfly_effect: ImpactVector,
    pub explanation: String,
    pub butterfly_intensity: i64,
    pub dream_job: String,
    pub capability_score: i64,
    pub capability_percent: u8,
    pub advice: String,
    pub habit_type: DecisionClass,
}

pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
    let id = input.decision_id.as_str();
    let impact = impact_for(id);
    let habit_type = classify(id);

    let intensity = butterfly_intensity(impact, input.frequency, input.time_period);
    let pattern = detect_pattern(impact);
    let explanation = explain(id, impact);
    let capability = estimate_capability(impact, &input.dream_job);

    AnalysisResult {
        decision: input.decision_id.clone(),
        pattern,
        butterfly_effect: impact,
        explanation,
        butterfly_intensity: intensity,
        dream_job: input.dream_job.clone(),
        capability_score: capability.score,
        capability_percent: capability.percent,
        advice: capability.advice.to_string(),
        habit_type,
    }
}

/// Validates then analyzes; fails without computing anything on a bad request.
pub fn analyze_request(request: AnalyzeRequest) -> Result<AnalysisResult, RequestError> {
    let input = request.validate()?;
    Ok(analyze(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::UNCLEAR_DREAM_ADVICE;

    fn request(
        decision_id: &str,
        dream_job: &str,
        frequency: i64,
        time_period: i64,
    ) -> AnalyzeRequest {
        AnalyzeRequest {
            decision_id: Some(decision_id.to_string()),
            dream_job: Some(dream_job.to_string()),
            frequency: Some(frequency.into()),
            time_period: Some(time_period.into()),
        }
    }

    #[test]
    fn analyzes_a_known_bad_habit() {
        let result = analyze_request(request("D1", "software engineer", 2, 3)).expect("analysis");

        assert_eq!(result.decision, DecisionId::from("D1"));
        assert_eq!(result.butterfly_effect, ImpactVector::new(-3, -4, -2));
        assert_eq!(result.butterfly_intensity, -54);
        assert_eq!(result.pattern, PatternLabel::NegativeHabitLoop);
        assert_eq!(result.habit_type, DecisionClass::Bad);
        assert_eq!(result.capability_score, -9);
        assert_eq!(result.capability_percent, 9);
        assert!(result.explanation.contains("Base impact score = -9."));
        assert!(result.advice.starts_with("Hard truth"));
    }

    #[test]
    fn unknown_decision_degrades_gracefully() {
        let result = analyze_request(request("Z42", "doctor", 5, 5)).expect("analysis");

        assert_eq!(result.butterfly_effect, ImpactVector::ZERO);
        assert_eq!(result.habit_type, DecisionClass::Unknown);
        assert_eq!(result.pattern, PatternLabel::NeutralMixed);
        assert_eq!(result.butterfly_intensity, 0);
        assert_eq!(result.capability_percent, 50);
    }

    #[test]
    fn unknown_role_keeps_neutral_capability() {
        let result = analyze_request(request("G2", "astronaut", 1, 1)).expect("analysis");

        assert_eq!(result.capability_percent, 50);
        assert_eq!(result.advice, UNCLEAR_DREAM_ADVICE);
        assert_eq!(result.dream_job, "astronaut");
    }

    #[test]
    fn missing_dream_job_uses_placeholder() {
        let result = analyze_request(AnalyzeRequest::new("G1")).expect("analysis");

        assert_eq!(result.dream_job, DEFAULT_DREAM_JOB);
        assert_eq!(result.advice, UNCLEAR_DREAM_ADVICE);
        assert_eq!(result.butterfly_intensity, 9);
    }

    #[test]
    fn missing_decision_is_a_client_error() {
        let err = analyze_request(AnalyzeRequest::default()).expect_err("must fail");
        assert_eq!(err, RequestError::MissingField("decision_id"));
    }

    #[test]
    fn response_serializes_with_wire_field_names() {
        let result = analyze_request(request("G3", "doctor", 1, 2)).expect("analysis");
        let value = serde_json::to_value(&result).expect("serializes");

        assert_eq!(value["decision"], "G3");
        assert_eq!(value["pattern"], "Positive Growth Loop (Compounding Gain)");
        assert_eq!(value["butterfly_effect"]["health"], 5);
        assert_eq!(value["butterfly_intensity"], 16);
        assert_eq!(value["habit_type"], "good");
        assert!(value["capability_percent"].is_u64());
    }

    #[test]
    fn repeated_analysis_is_byte_identical() {
        let render = || {
            let result = analyze_request(request("D3", "ai engineer", 3, 7)).expect("analysis");
            serde_json::to_vec(&result).expect("serializes")
        };
        assert_eq!(render(), render());
    }
}
