use tracing::{debug, warn};

use super::dto::{
    HealthInsightRequest, HealthInsightResult, NutrientAnalysisRequest, NutrientAnalysisResult,
};
use super::error::AnalysisError;
use super::prompts::{health_insight_prompt, nutrient_analysis_prompt};
use super::schema::{health_insight_schema, nutrient_analysis_schema, parse_validated};
use crate::state::AppState;

/// Estimates nutrients for `req` with the model. Only a fully validated result is returned.
pub async fn analyze_food_nutrients(
    st: &AppState,
    req: &NutrientAnalysisRequest,
) -> Result<NutrientAnalysisResult, AnalysisError> {
    req.check()?;

    let raw = st
        .llm
        .generate_json(nutrient_analysis_prompt(req), nutrient_analysis_schema())
        .await?;

    let result = parse_validated::<NutrientAnalysisResult>(&raw).map_err(|e| {
        warn!(error = %e, food = %req.food_item, "analysis rejected");
        e
    })?;
    debug!(food = %req.food_item, calories = result.calorie_count, "analysis ok");
    Ok(result)
}

pub async fn generate_health_insight(
    st: &AppState,
    req: &HealthInsightRequest,
) -> Result<HealthInsightResult, AnalysisError> {
    req.check()?;

    let raw = st
        .llm
        .generate_json(health_insight_prompt(req), health_insight_schema())
        .await?;

    parse_validated::<HealthInsightResult>(&raw).map_err(|e| {
        warn!(error = %e, food = %req.food_item, "health insight rejected");
        e
    })
}

#[cfg(test)]
mod analysis_tests {
    use super::*;
    use crate::state::AppState;

    fn banana() -> NutrientAnalysisRequest {
        NutrientAnalysisRequest {
            food_item: "Banana".into(),
            quantity: "1 piece".into(),
        }
    }

    #[tokio::test]
    async fn analysis_returns_non_negative_values() {
        let st = AppState::fake();
        let r = analyze_food_nutrients(&st, &banana()).await.unwrap();
        assert!(r.calorie_count >= 0.0);
        assert!(r.macronutrient_breakdown.carbohydrates >= 0.0);
        assert!(r.macronutrient_breakdown.proteins >= 0.0);
        assert!(r.macronutrient_breakdown.fats >= 0.0);
        assert_eq!(r.serving_size, "1 piece");
    }

    #[tokio::test]
    async fn malformed_reply_fails_validation() {
        let st = AppState::fake_replying(Some(r#"{"calorieCount":"lots"}"#));
        let err = analyze_food_nutrients(&st, &banana()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        let st = AppState::fake_replying(None);
        let err = analyze_food_nutrients(&st, &banana()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Transport(_)));
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn blank_input_never_reaches_the_model() {
        // a transport failure here would mean the model was called
        let st = AppState::fake_replying(None);
        let req = NutrientAnalysisRequest {
            food_item: "Banana".into(),
            quantity: "".into(),
        };
        let err = analyze_food_nutrients(&st, &req).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert!(!err.is_upstream());
    }

    #[tokio::test]
    async fn insight_round_trip() {
        let st = AppState::fake();
        let req = HealthInsightRequest {
            food_item: "Banana".into(),
            quantity: "1 piece".into(),
            calorie_count: 105.0,
            carbohydrates: 27.0,
            proteins: 1.3,
            fats: 0.4,
        };
        let r = generate_health_insight(&st, &req).await.unwrap();
        assert_eq!(r.health_insight, "Balanced choice.");
    }

    #[tokio::test]
    async fn insight_missing_field_fails_validation() {
        let st = AppState::fake_replying(Some(r#"{"insight":"wrong key"}"#));
        let req = HealthInsightRequest {
            food_item: "Banana".into(),
            quantity: "1 piece".into(),
            calorie_count: 105.0,
            carbohydrates: 27.0,
            proteins: 1.3,
            fats: 0.4,
        };
        let err = generate_health_insight(&st, &req).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }
}
