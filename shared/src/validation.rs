//! Input validation functions
//!
//! The body composition formulas accept anything and let NaN or infinity
//! flow through. These checks are the optional gate in front of them.

use crate::body_composition::MeasurementInput;

/// Validate age in years
pub fn validate_age(age_years: i32) -> Result<(), String> {
    if age_years <= 0 {
        return Err("Age must be a positive number of years".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be greater than 0 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be greater than 0 kg".to_string());
    }
    Ok(())
}

/// Validate an optional tape circumference (in cm)
///
/// Zero is allowed and means the measurement was not taken.
pub fn validate_circumference_cm(value_cm: Option<f64>) -> Result<(), String> {
    match value_cm {
        None => Ok(()),
        Some(v) if v.is_nan() || v.is_infinite() => {
            Err("Circumference must be a valid number".to_string())
        }
        Some(v) if v < 0.0 => Err("Circumference cannot be negative".to_string()),
        Some(_) => Ok(()),
    }
}

/// Validate a full set of measurements, reporting the first bad field
pub fn validate_measurement(input: &MeasurementInput) -> Result<(), ValidationError> {
    validate_age(input.age_years).map_err(|m| ValidationError::new("age", &m))?;
    validate_height_cm(input.height_cm).map_err(|m| ValidationError::new("height", &m))?;
    validate_weight_kg(input.weight_kg).map_err(|m| ValidationError::new("weight", &m))?;
    validate_circumference_cm(input.neck_cm).map_err(|m| ValidationError::new("neck", &m))?;
    validate_circumference_cm(input.waist_cm).map_err(|m| ValidationError::new("waist", &m))?;
    validate_circumference_cm(input.hip_cm).map_err(|m| ValidationError::new("hip", &m))?;
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to the labels used on the measurement form
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Edad",
        "gender" => "Género",
        "height" => "Altura",
        "weight" => "Peso",
        "neck" => "Cuello",
        "waist" => "Cintura",
        "hip" => "Cadera",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
