//! Body composition service
//!
//! Runs the shared body composition engine for API callers:
//! - Optional strict validation in front of the formulas
//! - Form parsing for trainer-entered measurements
//! - Category lookup for stored values

use crate::error::{ApiError, ApiResult};
use gym_metrics_shared::body_composition::{body_fat_method, MeasurementInput};
use gym_metrics_shared::types::{BodyCompositionReport, CategoriesQuery, CategoriesResponse};
use gym_metrics_shared::validation::validate_measurement;
use gym_metrics_shared::{MeasurementForm, MetricsError};
use tracing::{debug, warn};

/// Body composition service
pub struct BodyCompositionService;

impl BodyCompositionService {
    /// Calculate the full report for a set of measurements
    ///
    /// In strict mode malformed measurements are rejected. Otherwise they
    /// are logged and the raw formula output is returned.
    pub fn evaluate(input: &MeasurementInput, strict: bool) -> ApiResult<BodyCompositionReport> {
        if let Err(err) = validate_measurement(input) {
            if strict {
                return Err(MetricsError::from(err).into());
            }
            warn!(field = %err.field, "Calculating body composition from invalid measurement: {}", err.message);
        }

        let method = body_fat_method(input);
        debug!(
            sex = input.sex.as_str(),
            method = ?method,
            "Calculating body composition"
        );

        let report = BodyCompositionReport::from_input(input);
        debug!(
            bmi = report.composition.bmi,
            body_fat = report.composition.body_fat,
            bmi_category = ?report.bmi_category.category,
            body_fat_category = ?report.body_fat_category.category,
            "Body composition calculated"
        );

        Ok(report)
    }

    /// Parse a trainer form, then calculate the report
    pub fn evaluate_form(form: &MeasurementForm, strict: bool) -> ApiResult<BodyCompositionReport> {
        let input = form.to_input()?;
        Self::evaluate(&input, strict)
    }

    /// Classify already-computed values
    pub fn categories(query: &CategoriesQuery) -> ApiResult<CategoriesResponse> {
        if !query.bmi.is_finite() {
            return Err(ApiError::BadRequest("bmi must be a finite number".to_string()));
        }
        if !query.body_fat.is_finite() {
            return Err(ApiError::BadRequest("body_fat must be a finite number".to_string()));
        }
        Ok(CategoriesResponse::classify(query.bmi, query.body_fat, query.gender))
    }
}
