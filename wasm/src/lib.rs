//! Gym Metrics WASM Module
//!
//! This crate provides WebAssembly bindings so the trainer's browser form
//! can run the same body composition engine as the backend.

use gym_metrics_shared::body_composition::{
    self, classify_bmi, classify_body_fat, BiologicalSex, MeasurementInput,
};
use gym_metrics_shared::types::BodyCompositionReport;
use gym_metrics_shared::validation::validate_measurement;
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    body_composition::calculate_bmi(weight_kg, height_cm)
}

/// Display label for a BMI value ("Bajo peso", "Normal", ...)
#[wasm_bindgen]
pub fn bmi_category_label(bmi: f64) -> String {
    classify_bmi(bmi).label().to_string()
}

/// Display label for a body fat percentage
#[wasm_bindgen]
pub fn body_fat_category_label(body_fat_percent: f64, is_male: bool) -> String {
    let sex = if is_male {
        BiologicalSex::Male
    } else {
        BiologicalSex::Female
    };
    classify_body_fat(body_fat_percent, sex).label(sex).to_string()
}

/// Calculate the full report from a JSON measurement payload
///
/// Takes the same JSON body as `POST /api/v1/body-composition` and returns
/// the report as a JSON string. Invalid input is thrown as a string error.
#[wasm_bindgen]
pub fn calculate_body_composition(input_json: &str) -> Result<String, JsValue> {
    compute_report_json(input_json).map_err(|e| JsValue::from_str(&e))
}

fn compute_report_json(input_json: &str) -> Result<String, String> {
    let input: MeasurementInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid input: {}", e))?;
    validate_measurement(&input).map_err(|e| e.user_message())?;

    let report = BodyCompositionReport::from_input(&input);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}
