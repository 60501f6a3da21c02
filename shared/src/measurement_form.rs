//! Measurement form parsing
//!
//! Trainers type measurements into free-text fields, often with a decimal
//! comma ("72,5"). This module turns that raw form into a
//! [`MeasurementInput`] in metric units.

use crate::body_composition::{BiologicalSex, MeasurementInput};
use crate::errors::MetricsError;
use crate::units::{LengthUnit, WeightUnit};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw measurement form as submitted by a trainer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MeasurementForm {
    #[validate(length(min = 1, message = "Age is required"))]
    pub age: String,
    pub gender: BiologicalSex,
    #[validate(length(min = 1, message = "Height is required"))]
    pub height: String,
    #[validate(length(min = 1, message = "Weight is required"))]
    pub weight: String,
    #[serde(default)]
    pub neck: Option<String>,
    #[serde(default)]
    pub waist: Option<String>,
    #[serde(default)]
    pub hip: Option<String>,
    /// Unit for height and circumferences (defaults to cm)
    #[serde(default)]
    pub length_unit: Option<String>,
    /// Unit for weight (defaults to kg)
    #[serde(default)]
    pub weight_unit: Option<String>,
}

impl MeasurementForm {
    /// Parse the form into metric measurements
    pub fn to_input(&self) -> Result<MeasurementInput, MetricsError> {
        if let Err(errors) = self.validate() {
            let errors = errors.field_errors();
            let missing = ["age", "height", "weight"]
                .into_iter()
                .find(|field| errors.contains_key(*field))
                .unwrap_or("age");
            return Err(MetricsError::MissingField(missing.to_string()));
        }

        let length_unit = parse_unit::<LengthUnit>(self.length_unit.as_deref())?;
        let weight_unit = parse_unit::<WeightUnit>(self.weight_unit.as_deref())?;

        let age_years = parse_age(&self.age)?;
        let height = require("height", parse_decimal("height", &self.height)?)?;
        let weight = require("weight", parse_decimal("weight", &self.weight)?)?;
        let neck = parse_optional("neck", self.neck.as_deref())?;
        let waist = parse_optional("waist", self.waist.as_deref())?;
        let hip = parse_optional("hip", self.hip.as_deref())?;

        Ok(MeasurementInput::new(
            age_years,
            self.gender,
            length_unit.to_cm(height),
            weight_unit.to_kg(weight),
        )
        .with_circumferences(
            neck.map(|v| length_unit.to_cm(v)),
            waist.map(|v| length_unit.to_cm(v)),
            hip.map(|v| length_unit.to_cm(v)),
        ))
    }
}

/// Parse a decimal that may use a comma as separator
///
/// Blank input yields `None`.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Option<f64>, MetricsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(MetricsError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_age(raw: &str) -> Result<i32, MetricsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MetricsError::MissingField("age".to_string()));
    }
    trimmed.parse::<i32>().map_err(|_| MetricsError::InvalidNumber {
        field: "age".to_string(),
        value: raw.to_string(),
    })
}

fn parse_optional(field: &str, raw: Option<&str>) -> Result<Option<f64>, MetricsError> {
    match raw {
        Some(raw) => parse_decimal(field, raw),
        None => Ok(None),
    }
}

fn require(field: &str, value: Option<f64>) -> Result<f64, MetricsError> {
    value.ok_or_else(|| MetricsError::MissingField(field.to_string()))
}

fn parse_unit<U>(raw: Option<&str>) -> Result<U, MetricsError>
where
    U: std::str::FromStr<Err = String> + Default,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse().map_err(MetricsError::InvalidUnit),
        None => Ok(U::default()),
    }
}
