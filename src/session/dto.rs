use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::model::Session;
use crate::analysis::dto::NutrientAnalysisResult;
use crate::catalog::{dto::FoodView, services::with_image};
use crate::intake::dto::DailyIntakeView;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectFoodRequest {
    pub food_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangeQuantityRequest {
    pub quantity: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSessionResponse {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub selected_food: Option<FoodView>,
    pub selected_quantity: String,
    pub is_analyzing: bool,
    pub analysis: Option<NutrientAnalysisResult>,
    pub intake: DailyIntakeView,
}

impl From<&Session> for SessionView {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id,
            created_at: s.created_at,
            selected_food: s.selected().ok().map(with_image),
            selected_quantity: s.selected_quantity.clone(),
            is_analyzing: s.is_analyzing,
            analysis: s.analysis.clone(),
            intake: s.log.view(),
        }
    }
}
