//! Butterfly-effect estimator for habitual micro-decisions.
//!
//! Looks up a decision's impact on health, focus, and career, compounds it over frequency
//! and duration, and scores how well the habit supports a target role.

pub mod analysis;
pub mod capability;
pub mod config;
pub mod decisions;
pub mod error;
pub mod telemetry;

pub use analysis::{analyze, analyze_request, AnalysisResult, AnalyzeRequest};
