use serde::{Deserialize, Serialize};

/// Request body for a nutrient analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutrientAnalysisRequest {
    pub food_item: String,
    pub quantity: String,
}

/// Grams of each macronutrient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacronutrientBreakdown {
    pub carbohydrates: f64,
    pub proteins: f64,
    pub fats: f64,
}

/// Validated model output for a nutrient analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutrientAnalysisResult {
    pub calorie_count: f64,
    pub macronutrient_breakdown: MacronutrientBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micronutrient_details: Option<String>,
    pub serving_size: String,
    pub health_insights: String,
}

/// Request body for regenerating a health insight from known macros.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsightRequest {
    pub food_item: String,
    pub quantity: String,
    pub calorie_count: f64,
    pub carbohydrates: f64,
    pub proteins: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsightResult {
    pub health_insight: String,
}
