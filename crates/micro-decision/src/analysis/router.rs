use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use super::request::{AnalyzeRequest, RequestError};
use super::{analyze, AnalysisResult};
use crate::capability::{role_requirements, RoleCatalogEntry};
use crate::decisions::catalog::entries;
use crate::decisions::DecisionCatalogEntry;
use crate::error::AppError;

/// Router builder exposing the analysis endpoints.
pub fn analysis_router() -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/analyze", post(analyze_handler))
        .route("/api/v1/catalog", get(catalog_handler))
}

pub(crate) async fn home_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "Backend running",
        "message": "Micro Decision Taker API is live",
    }))
}

pub(crate) async fn analyze_handler(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "analyze request body rejected");
        RequestError::MalformedBody(rejection.body_text())
    })?;

    let input = request.validate().map_err(|err| {
        warn!(error = %err, "analyze request failed validation");
        err
    })?;

    let result = analyze(&input);
    info!(
        decision = %result.decision,
        pattern = %result.pattern,
        intensity = result.butterfly_intensity,
        capability_percent = result.capability_percent,
        "decision analyzed"
    );

    Ok(Json(result))
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub decisions: Vec<DecisionCatalogEntry>,
    pub roles: Vec<RoleCatalogEntry>,
}

impl CatalogView {
    pub fn build() -> Self {
        Self {
            decisions: entries().iter().map(DecisionCatalogEntry::from).collect(),
            roles: role_requirements()
                .iter()
                .map(RoleCatalogEntry::from)
                .collect(),
        }
    }
}

pub(crate) async fn catalog_handler() -> Json<CatalogView> {
    Json(CatalogView::build())
}
