use super::dto::{HealthInsightRequest, NutrientAnalysisRequest};
use super::schema::nutrient_analysis_schema;

pub fn nutrient_analysis_prompt(req: &NutrientAnalysisRequest) -> String {
    format!(
        "You are a nutrition expert. Analyze the following food item and quantity to provide nutritional information.

Food Item: {food}
Quantity: {quantity}

Provide the following information:
- Calorie Count: The total calorie count.
- Macronutrient Breakdown: Carbohydrates, proteins, and fats in grams.
- Micronutrient Details: (Optional) Details about vitamins and minerals.
- Serving Size: The quantity selected by the user.
- Health Insights: Health insights or tips related to the food item.

Format your response as a JSON object matching the following schema:
{schema}",
        food = req.food_item.trim(),
        quantity = req.quantity.trim(),
        schema = nutrient_analysis_schema(),
    )
}

pub fn health_insight_prompt(req: &HealthInsightRequest) -> String {
    format!(
        "You are a nutritionist providing health insights about food items.

Based on the following nutritional information, provide a concise and helpful health insight about the food item.

Food Item: {food}
Quantity: {quantity}
Calories: {calories}
Carbohydrates: {carbs}g
Proteins: {proteins}g
Fats: {fats}g

Respond with a JSON object containing a single \"healthInsight\" string.",
        food = req.food_item.trim(),
        quantity = req.quantity.trim(),
        calories = req.calorie_count,
        carbs = req.carbohydrates,
        proteins = req.proteins,
        fats = req.fats,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_embeds_fields_and_schema() {
        let p = nutrient_analysis_prompt(&NutrientAnalysisRequest {
            food_item: " Banana ".into(),
            quantity: "1 piece".into(),
        });
        assert!(p.contains("Food Item: Banana\n"));
        assert!(p.contains("Quantity: 1 piece\n"));
        assert!(p.contains("\"calorieCount\""));
    }

    #[test]
    fn insight_prompt_embeds_macros() {
        let p = health_insight_prompt(&HealthInsightRequest {
            food_item: "Oats".into(),
            quantity: "100g".into(),
            calorie_count: 389.0,
            carbohydrates: 66.3,
            proteins: 16.9,
            fats: 6.9,
        });
        assert!(p.contains("Calories: 389\n"));
        assert!(p.contains("Carbohydrates: 66.3g"));
        assert!(p.contains("Proteins: 16.9g"));
        assert!(p.contains("Fats: 6.9g"));
    }
}
