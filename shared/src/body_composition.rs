//! Body composition calculations module
//!
//! Derives BMI, body fat, muscle mass, metabolic age, water percentage,
//! bone mass, visceral fat, fat mass and lean mass from a single set of
//! anthropometric measurements.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No state is kept between calls
//! 2. **Round Last**: Intermediate values stay at full precision, rounding
//!    happens only when the final [`BodyComposition`] is assembled
//! 3. **No Hidden Validation**: The formulas accept any input; use
//!    [`calculate_all_metrics_checked`] to reject malformed measurements

use crate::errors::MetricsError;
use crate::units::CM_TO_INCHES;
use crate::validation::validate_measurement;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Types
// ============================================================================

/// Biological sex for body composition formulas
///
/// The Navy method and the bone mass constants are only defined for these
/// two categories. Supporting more requires new reference formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Raw measurements taken during an evaluation
///
/// Serialized with the short keys used by the client forms
/// (`age`, `gender`, `height`, `weight`, `neck`, `waist`, `hip`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Age in years
    #[serde(rename = "age")]
    pub age_years: i32,
    #[serde(rename = "gender")]
    pub sex: BiologicalSex,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Neck circumference in centimeters
    #[serde(rename = "neck", default, skip_serializing_if = "Option::is_none")]
    pub neck_cm: Option<f64>,
    /// Waist circumference in centimeters
    #[serde(rename = "waist", default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters (female Navy formula only)
    #[serde(rename = "hip", default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

impl MeasurementInput {
    /// Create an input with only the required measurements
    pub fn new(age_years: i32, sex: BiologicalSex, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age_years,
            sex,
            height_cm,
            weight_kg,
            neck_cm: None,
            waist_cm: None,
            hip_cm: None,
        }
    }

    /// Attach tape measurements
    pub fn with_circumferences(
        mut self,
        neck_cm: Option<f64>,
        waist_cm: Option<f64>,
        hip_cm: Option<f64>,
    ) -> Self {
        self.neck_cm = neck_cm;
        self.waist_cm = waist_cm;
        self.hip_cm = hip_cm;
        self
    }

    /// Neck circumference if it was actually measured
    pub fn neck(&self) -> Option<f64> {
        measured(self.neck_cm)
    }

    /// Waist circumference if it was actually measured
    pub fn waist(&self) -> Option<f64> {
        measured(self.waist_cm)
    }

    /// Hip circumference if it was actually measured
    pub fn hip(&self) -> Option<f64> {
        measured(self.hip_cm)
    }
}

/// A zero or NaN tape reading means "not taken"
fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

// ============================================================================
// Output Types
// ============================================================================

/// Full body composition result, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyComposition {
    pub bmi: f64,
    /// Body fat percentage
    pub body_fat: f64,
    /// Estimated metabolic age in years
    pub metabolic_age: i32,
    /// Skeletal muscle mass in kg
    pub muscle_mass: f64,
    /// Water percentage, always within [50, 65]
    pub water_percentage: f64,
    /// Bone mass in kg
    pub bone_mass: f64,
    /// Visceral fat index (unitless)
    pub visceral_fat: i32,
    /// Fat mass in kg
    pub fat_mass: f64,
    /// Lean mass in kg
    pub lean_mass: f64,
}

/// Which body fat formula was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatMethod {
    /// U.S. Navy circumference method
    Navy,
    /// BMI-based estimate used when neck or waist is missing
    BmiEstimate,
}

// ============================================================================
// Constants
// ============================================================================

/// Floor applied to the log10 argument of the Navy formula
const NAVY_LOG_FLOOR: f64 = 0.1;

/// Water percentage bounds
pub const WATER_PERCENTAGE_MIN: f64 = 50.0;
pub const WATER_PERCENTAGE_MAX: f64 = 65.0;

/// Reference BMI for metabolic age
const REFERENCE_BMI: f64 = 21.0;

/// Waist-to-height ratio assumed when the waist was not measured
const DEFAULT_WAIST_TO_HEIGHT: f64 = 0.5;

// ============================================================================
// Single Metrics
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// `height_cm` must be positive; zero height yields infinity.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Select the body fat formula for these measurements
pub fn body_fat_method(input: &MeasurementInput) -> BodyFatMethod {
    match (input.neck(), input.waist()) {
        (Some(_), Some(_)) => BodyFatMethod::Navy,
        _ => BodyFatMethod::BmiEstimate,
    }
}

/// Calculate body fat percentage
///
/// Uses the U.S. Navy circumference method when neck and waist are both
/// present, otherwise falls back to the BMI estimate:
///
/// Men: BF% = 1.20 × BMI + 0.23 × Age - 16.2
/// Women: BF% = 1.20 × BMI + 0.23 × Age - 5.4
///
/// The result is not clamped and can be negative for implausible tape
/// measurements.
pub fn calculate_body_fat_percentage(input: &MeasurementInput) -> f64 {
    match (input.neck(), input.waist()) {
        (Some(neck_cm), Some(waist_cm)) => {
            navy_body_fat(input.sex, input.height_cm, neck_cm, waist_cm, input.hip())
        }
        _ => {
            let bmi = calculate_bmi(input.weight_kg, input.height_cm);
            bmi_body_fat(bmi, input.age_years, input.sex)
        }
    }
}

/// U.S. Navy body fat, measurements converted to inches
///
/// Men: 86.010 × log10(waist - neck) - 70.041 × log10(height) + 36.76
/// Women: 163.205 × log10(waist + hip - neck) - 97.684 × log10(height) - 78.687
fn navy_body_fat(
    sex: BiologicalSex,
    height_cm: f64,
    neck_cm: f64,
    waist_cm: f64,
    hip_cm: Option<f64>,
) -> f64 {
    let height_in = height_cm * CM_TO_INCHES;
    let neck_in = neck_cm * CM_TO_INCHES;
    let waist_in = waist_cm * CM_TO_INCHES;
    let hip_in = hip_cm.map_or(0.0, |hip| hip * CM_TO_INCHES);

    match sex {
        BiologicalSex::Male => {
            let girth = (waist_in - neck_in).max(NAVY_LOG_FLOOR);
            86.010 * girth.log10() - 70.041 * height_in.log10() + 36.76
        }
        BiologicalSex::Female => {
            let girth = (waist_in + hip_in - neck_in).max(NAVY_LOG_FLOOR);
            163.205 * girth.log10() - 97.684 * height_in.log10() - 78.687
        }
    }
}

fn bmi_body_fat(bmi: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let offset = match sex {
        BiologicalSex::Male => 16.2,
        BiologicalSex::Female => 5.4,
    };
    1.20 * bmi + 0.23 * age_years as f64 - offset
}

/// Calculate skeletal muscle mass in kg
///
/// Formula: 0.244 × weight(kg) + 7.80 × height(m) - 0.098 × age + k
/// where k = 6.6 for men and -0.5 for women. Never negative.
pub fn calculate_muscle_mass(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let sex_constant = match sex {
        BiologicalSex::Male => 6.6,
        BiologicalSex::Female => -0.5,
    };
    let height_m = height_cm / 100.0;
    let muscle_kg = 0.244 * weight_kg + 7.80 * height_m - 0.098 * age_years as f64 + sex_constant;
    muscle_kg.max(0.0)
}

/// Fixed bone mass estimate in kg
pub fn bone_mass_kg(sex: BiologicalSex) -> f64 {
    match sex {
        BiologicalSex::Male => 15.0,
        BiologicalSex::Female => 12.0,
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Calculate every body composition metric
///
/// Steps run in a fixed order because later metrics consume earlier ones.
/// Nothing is validated here; see [`calculate_all_metrics_checked`].
pub fn calculate_all_metrics(input: &MeasurementInput) -> BodyComposition {
    let age = input.age_years as f64;
    let weight_kg = input.weight_kg;

    let bmi = calculate_bmi(weight_kg, input.height_cm);
    let body_fat = calculate_body_fat_percentage(input);
    let muscle_mass = calculate_muscle_mass(weight_kg, input.height_cm, input.age_years, input.sex);
    let muscle_percent = muscle_mass / weight_kg * 100.0;

    let bone_mass = bone_mass_kg(input.sex);
    // The residual is only a rough share; keep it in a plausible band
    let water_percentage = (100.0 - body_fat - muscle_percent - bone_mass)
        .min(WATER_PERCENTAGE_MAX)
        .max(WATER_PERCENTAGE_MIN);

    let metabolic_age = (age + (bmi - REFERENCE_BMI) * 0.5).round();
    let fat_mass = round_to_tenth(weight_kg * (body_fat / 100.0));
    // Lean mass is taken from the displayed fat mass so both add up to the weight
    let lean_mass = weight_kg - fat_mass;

    let waist_to_height = input
        .waist()
        .map_or(DEFAULT_WAIST_TO_HEIGHT, |waist| waist / input.height_cm);
    let visceral_fat = (waist_to_height * 20.0).round();

    BodyComposition {
        bmi: round_to_tenth(bmi),
        body_fat: round_to_tenth(body_fat),
        metabolic_age: metabolic_age as i32,
        muscle_mass: round_to_tenth(muscle_mass),
        water_percentage: round_to_tenth(water_percentage),
        bone_mass: round_to_tenth(bone_mass),
        visceral_fat: visceral_fat as i32,
        fat_mass,
        lean_mass: round_to_tenth(lean_mass),
    }
}

/// Validate the measurements, then calculate every metric
pub fn calculate_all_metrics_checked(input: &MeasurementInput) -> Result<BodyComposition, MetricsError> {
    validate_measurement(input)?;
    Ok(calculate_all_metrics(input))
}

/// Round to one decimal place on the exact decimal value of `value`
///
/// Ties go away from zero. Scaling by ten first would round the binary
/// product, which turns 18.449999... into 18.5. Non-finite and
/// out-of-range values pass through unchanged.
fn round_to_tenth(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

// ============================================================================
// Classification
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category, upper bound exclusive
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Display label shown to gym members
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Bajo peso",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::Obese => "Obesidad",
        }
    }
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athlete,
    Fitness,
    Acceptable,
    Obese,
}

impl BodyFatCategory {
    /// Upper bounds (exclusive) of the first four bands by sex
    fn thresholds(sex: BiologicalSex) -> [f64; 4] {
        match sex {
            BiologicalSex::Male => [6.0, 14.0, 18.0, 25.0],
            BiologicalSex::Female => [14.0, 21.0, 25.0, 32.0],
        }
    }

    /// Get the body fat range for this category by sex, upper bound exclusive
    pub fn range(&self, sex: BiologicalSex) -> (f64, f64) {
        let [essential, athlete, fitness, acceptable] = Self::thresholds(sex);
        match self {
            BodyFatCategory::Essential => (f64::NEG_INFINITY, essential),
            BodyFatCategory::Athlete => (essential, athlete),
            BodyFatCategory::Fitness => (athlete, fitness),
            BodyFatCategory::Acceptable => (fitness, acceptable),
            BodyFatCategory::Obese => (acceptable, f64::INFINITY),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BodyFatCategory::Essential => "Essential",
            BodyFatCategory::Athlete => "Athlete",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Acceptable => "Acceptable",
            BodyFatCategory::Obese => "Obese",
        }
    }

    /// Display label shown to gym members, gendered where the language is
    pub fn label(&self, sex: BiologicalSex) -> &'static str {
        match (self, sex) {
            (BodyFatCategory::Essential, _) => "Esencial",
            (BodyFatCategory::Athlete, _) => "Atleta",
            (BodyFatCategory::Fitness, _) => "Fitness",
            (BodyFatCategory::Acceptable, _) => "Aceptable",
            (BodyFatCategory::Obese, BiologicalSex::Male) => "Obeso",
            (BodyFatCategory::Obese, BiologicalSex::Female) => "Obesa",
        }
    }
}

/// Classify body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, sex: BiologicalSex) -> BodyFatCategory {
    let [essential, athlete, fitness, acceptable] = BodyFatCategory::thresholds(sex);
    if body_fat_percent < essential {
        BodyFatCategory::Essential
    } else if body_fat_percent < athlete {
        BodyFatCategory::Athlete
    } else if body_fat_percent < fitness {
        BodyFatCategory::Fitness
    } else if body_fat_percent < acceptable {
        BodyFatCategory::Acceptable
    } else {
        BodyFatCategory::Obese
    }
}
