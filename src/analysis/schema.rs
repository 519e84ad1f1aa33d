use serde::de::DeserializeOwned;
use serde_json::json;

use super::dto::{
    HealthInsightRequest, HealthInsightResult, NutrientAnalysisRequest, NutrientAnalysisResult,
};
use super::error::AnalysisError;

/// Response schema sent with the nutrient analysis prompt.
pub fn nutrient_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "calorieCount": {
                "type": "number",
                "description": "The total calorie count of the food item and quantity."
            },
            "macronutrientBreakdown": {
                "type": "object",
                "description": "A breakdown of the macronutrients in the food item.",
                "properties": {
                    "carbohydrates": { "type": "number", "description": "Carbohydrates in grams." },
                    "proteins": { "type": "number", "description": "Protein in grams." },
                    "fats": { "type": "number", "description": "Fat in grams." }
                },
                "required": ["carbohydrates", "proteins", "fats"]
            },
            "micronutrientDetails": {
                "type": "string",
                "description": "Optional details about micronutrients (vitamins, minerals)."
            },
            "servingSize": {
                "type": "string",
                "description": "The serving size / quantity selected by the user."
            },
            "healthInsights": {
                "type": "string",
                "description": "Health insights or tips related to the selected food item."
            }
        },
        "required": ["calorieCount", "macronutrientBreakdown", "servingSize", "healthInsights"]
    })
}

/// Response schema sent with the health insight prompt.
pub fn health_insight_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "healthInsight": {
                "type": "string",
                "description": "A health insight or tip related to the food item."
            }
        },
        "required": ["healthInsight"]
    })
}

/// Structural checks beyond what deserialization already enforces.
/// Must not modify the value, so re-validating a valid value is a no-op.
pub trait Validate {
    fn validate(&self) -> Result<(), AnalysisError>;
}

fn non_negative(field: &str, v: f64) -> Result<(), AnalysisError> {
    if !v.is_finite() {
        return Err(AnalysisError::validation(format!("{field} must be a finite number")));
    }
    if v < 0.0 {
        return Err(AnalysisError::validation(format!("{field} must not be negative")));
    }
    Ok(())
}

fn not_blank(field: &str, v: &str) -> Result<(), AnalysisError> {
    if v.trim().is_empty() {
        return Err(AnalysisError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl Validate for NutrientAnalysisResult {
    fn validate(&self) -> Result<(), AnalysisError> {
        non_negative("calorieCount", self.calorie_count)?;
        let m = &self.macronutrient_breakdown;
        non_negative("macronutrientBreakdown.carbohydrates", m.carbohydrates)?;
        non_negative("macronutrientBreakdown.proteins", m.proteins)?;
        non_negative("macronutrientBreakdown.fats", m.fats)?;
        not_blank("servingSize", &self.serving_size)?;
        not_blank("healthInsights", &self.health_insights)?;
        Ok(())
    }
}

impl Validate for HealthInsightResult {
    fn validate(&self) -> Result<(), AnalysisError> {
        not_blank("healthInsight", &self.health_insight)
    }
}

impl NutrientAnalysisRequest {
    pub fn check(&self) -> Result<(), AnalysisError> {
        if self.food_item.trim().is_empty() {
            return Err(AnalysisError::invalid_input("foodItem is required"));
        }
        if self.quantity.trim().is_empty() {
            return Err(AnalysisError::invalid_input("quantity is required"));
        }
        Ok(())
    }
}

impl HealthInsightRequest {
    pub fn check(&self) -> Result<(), AnalysisError> {
        if self.food_item.trim().is_empty() {
            return Err(AnalysisError::invalid_input("foodItem is required"));
        }
        if self.quantity.trim().is_empty() {
            return Err(AnalysisError::invalid_input("quantity is required"));
        }
        let numbers = [
            ("calorieCount", self.calorie_count),
            ("carbohydrates", self.carbohydrates),
            ("proteins", self.proteins),
            ("fats", self.fats),
        ];
        for (name, v) in numbers {
            if !v.is_finite() {
                return Err(AnalysisError::invalid_input(format!(
                    "{name} must be a finite number"
                )));
            }
        }
        Ok(())
    }
}

/// Parses raw model text into `T` and validates it. Any failure yields no value.
pub fn parse_validated<T>(raw: &str) -> Result<T, AnalysisError>
where
    T: DeserializeOwned + Validate,
{
    let body = strip_code_fence(raw);
    let value: T = serde_json::from_str(body)
        .map_err(|e| AnalysisError::validation(format!("malformed model output: {e}")))?;
    value.validate()?;
    Ok(value)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
