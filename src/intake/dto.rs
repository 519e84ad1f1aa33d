use serde::Serialize;
use time::OffsetDateTime;

use crate::analysis::dto::NutrientAnalysisResult;

/// An accepted analysis in the daily log.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogEntry {
    pub id: String,
    pub food_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
    #[serde(flatten)]
    pub analysis: NutrientAnalysisResult,
}

/// Sums over the log. Always derived, never stored.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub items: usize,
    pub calories: f64,
    pub carbohydrates: f64,
    pub proteins: f64,
    pub fats: f64,
}

impl DailyTotals {
    pub fn accumulate(mut self, a: &NutrientAnalysisResult) -> Self {
        self.items += 1;
        self.calories += a.calorie_count;
        self.carbohydrates += a.macronutrient_breakdown.carbohydrates;
        self.proteins += a.macronutrient_breakdown.proteins;
        self.fats += a.macronutrient_breakdown.fats;
        self
    }
}

#[derive(Debug, Serialize)]
pub struct DailyIntakeView {
    pub entries: Vec<DailyLogEntry>,
    pub totals: DailyTotals,
}
