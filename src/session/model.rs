use time::OffsetDateTime;
use uuid::Uuid;

use super::error::SessionError;
use crate::analysis::dto::{NutrientAnalysisRequest, NutrientAnalysisResult};
use crate::catalog::{dto::FoodCatalogEntry, repo as catalog};
use crate::intake::dto::DailyLogEntry;
use crate::intake::log::{new_entry, DailyLog};

/// Everything one user has on screen: selection, pending work, current result and log.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: OffsetDateTime,
    pub selected_food: Option<String>,
    pub selected_quantity: String,
    pub is_analyzing: bool,
    pub analysis: Option<NutrientAnalysisResult>,
    pub log: DailyLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            selected_food: None,
            selected_quantity: String::new(),
            is_analyzing: false,
            analysis: None,
            log: DailyLog::default(),
        }
    }

    pub fn selected(&self) -> Result<&'static FoodCatalogEntry, SessionError> {
        let id = self.selected_food.as_deref().ok_or(SessionError::NoSelection)?;
        catalog::find_by_id(id).ok_or_else(|| SessionError::UnknownFood(id.to_string()))
    }

    /// Picking a food resets the quantity to its first option and drops any result.
    pub fn select_food(&mut self, food: &FoodCatalogEntry) {
        self.selected_food = Some(food.id.clone());
        self.selected_quantity = food.quantities.first().cloned().unwrap_or_default();
        self.analysis = None;
    }

    pub fn change_quantity(&mut self, quantity: &str) -> Result<(), SessionError> {
        let food = self.selected()?;
        if !food.quantities.iter().any(|q| q == quantity) {
            return Err(SessionError::InvalidQuantity(quantity.to_string()));
        }
        self.selected_quantity = quantity.to_string();
        self.analysis = None;
        Ok(())
    }

    /// Marks an analysis as in flight and returns the request to send.
    pub fn begin_analysis(&mut self) -> Result<NutrientAnalysisRequest, SessionError> {
        if self.is_analyzing {
            return Err(SessionError::AnalysisPending);
        }
        let food = self.selected()?;
        if self.selected_quantity.is_empty() {
            return Err(SessionError::NoSelection);
        }
        self.is_analyzing = true;
        self.analysis = None;
        Ok(NutrientAnalysisRequest {
            food_item: food.name.clone(),
            quantity: self.selected_quantity.clone(),
        })
    }

    /// Clears the pending flag. A result is kept only if the selection it was asked for is
    /// still current.
    pub fn finish_analysis(
        &mut self,
        req: &NutrientAnalysisRequest,
        result: Option<&NutrientAnalysisResult>,
    ) {
        self.is_analyzing = false;
        let still_current = self
            .selected()
            .map(|f| f.name == req.food_item && self.selected_quantity == req.quantity)
            .unwrap_or(false);
        if still_current {
            self.analysis = result.cloned();
        }
    }

    pub fn add_current_to_log(&mut self) -> Result<DailyLogEntry, SessionError> {
        let food = self.selected()?;
        let analysis = self.analysis.clone().ok_or(SessionError::NothingToAdd)?;
        let entry = new_entry(&food.id, &food.name, analysis);
        self.log.add(entry.clone())?;
        Ok(entry)
    }

    pub fn remove_from_log(&mut self, id: &str) -> Result<DailyLogEntry, SessionError> {
        self.log
            .remove(id)
            .ok_or_else(|| SessionError::EntryNotFound(id.to_string()))
    }
}
