//! Body composition API routes

use crate::error::ApiError;
use crate::services::BodyCompositionService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use gym_metrics_shared::body_composition::MeasurementInput;
use gym_metrics_shared::types::{BodyCompositionReport, CategoriesQuery, CategoriesResponse};
use gym_metrics_shared::MeasurementForm;

/// Create body composition routes
pub fn body_composition_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate))
        .route("/form", post(calculate_from_form))
        .route("/categories", get(get_categories))
}

/// POST /api/v1/body-composition - Calculate metrics from measurements
async fn calculate(
    State(state): State<AppState>,
    Json(input): Json<MeasurementInput>,
) -> Result<Json<BodyCompositionReport>, ApiError> {
    let report = BodyCompositionService::evaluate(&input, state.strict_validation())?;
    Ok(Json(report))
}

/// POST /api/v1/body-composition/form - Calculate metrics from a text form
///
/// Accepts decimal commas and optional imperial units.
async fn calculate_from_form(
    State(state): State<AppState>,
    Json(form): Json<MeasurementForm>,
) -> Result<Json<BodyCompositionReport>, ApiError> {
    let report = BodyCompositionService::evaluate_form(&form, state.strict_validation())?;
    Ok(Json(report))
}

/// GET /api/v1/body-composition/categories - Classify stored values
async fn get_categories(
    Query(query): Query<CategoriesQuery>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    Ok(Json(BodyCompositionService::categories(&query)?))
}
