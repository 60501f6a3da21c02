//! API request and response types

use crate::body_composition::{
    body_fat_method, calculate_all_metrics, classify_bmi, classify_body_fat, BiologicalSex,
    BmiCategory, BodyComposition, BodyFatCategory, BodyFatMethod, MeasurementInput,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classified metric with its display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo<C> {
    pub category: C,
    pub label: String,
}

/// Body composition with categories and a printable summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCompositionReport {
    pub gender: BiologicalSex,
    pub composition: BodyComposition,
    pub body_fat_method: BodyFatMethod,
    pub bmi_category: CategoryInfo<BmiCategory>,
    pub body_fat_category: CategoryInfo<BodyFatCategory>,
    /// One line per headline metric, as shown after saving a measurement
    pub summary: Vec<String>,
    pub calculated_at: DateTime<Utc>,
}

impl BodyCompositionReport {
    /// Calculate the metrics and classify the rounded values
    pub fn from_input(input: &MeasurementInput) -> Self {
        Self::from_composition(input.sex, calculate_all_metrics(input), body_fat_method(input))
    }

    pub fn from_composition(
        sex: BiologicalSex,
        composition: BodyComposition,
        body_fat_method: BodyFatMethod,
    ) -> Self {
        let categories = CategoriesResponse::classify(composition.bmi, composition.body_fat, sex);
        let summary = vec![
            format!("IMC: {} ({})", composition.bmi, categories.bmi.label),
            format!(
                "% Grasa: {}% ({})",
                composition.body_fat, categories.body_fat.label
            ),
            format!("Masa Muscular: {}kg", composition.muscle_mass),
            format!("Edad Metabólica: {} años", composition.metabolic_age),
        ];

        Self {
            gender: sex,
            composition,
            body_fat_method,
            bmi_category: categories.bmi,
            body_fat_category: categories.body_fat,
            summary,
            calculated_at: Utc::now(),
        }
    }
}

/// Category lookup query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesQuery {
    pub bmi: f64,
    pub body_fat: f64,
    pub gender: BiologicalSex,
}

/// Category lookup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub bmi: CategoryInfo<BmiCategory>,
    pub body_fat: CategoryInfo<BodyFatCategory>,
}

impl CategoriesResponse {
    pub fn classify(bmi: f64, body_fat: f64, sex: BiologicalSex) -> Self {
        let bmi_category = classify_bmi(bmi);
        let body_fat_category = classify_body_fat(body_fat, sex);
        Self {
            bmi: CategoryInfo {
                category: bmi_category,
                label: bmi_category.label().to_string(),
            },
            body_fat: CategoryInfo {
                category: body_fat_category,
                label: body_fat_category.label(sex).to_string(),
            },
        }
    }
}
