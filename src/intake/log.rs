use rand::{distributions::Alphanumeric, Rng};
use time::OffsetDateTime;

use super::dto::{DailyIntakeView, DailyLogEntry, DailyTotals};
use crate::analysis::dto::NutrientAnalysisResult;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum IntakeError {
    #[error("entry {0} is already logged")]
    DuplicateId(String),
}

/// Ordered log of accepted analyses. Only `add` and `remove` change it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLog {
    entries: Vec<DailyLogEntry>,
}

impl DailyLog {
    pub fn entries(&self) -> &[DailyLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: DailyLogEntry) -> Result<(), IntakeError> {
        if self.entries.iter().any(|e| e.id == entry.id) {
            return Err(IntakeError::DuplicateId(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<DailyLogEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn totals(&self) -> DailyTotals {
        self.entries
            .iter()
            .fold(DailyTotals::default(), |acc, e| acc.accumulate(&e.analysis))
    }

    pub fn view(&self) -> DailyIntakeView {
        DailyIntakeView {
            entries: self.entries.clone(),
            totals: self.totals(),
        }
    }
}

/// `<unix-millis>-<food id>-<suffix>`; the suffix keeps same-millisecond adds apart.
pub fn new_entry_id(food_id: &str, now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{}-{}-{}", millis, food_id, suffix)
}

pub fn new_entry(food_id: &str, food_name: &str, analysis: NutrientAnalysisResult) -> DailyLogEntry {
    let now = OffsetDateTime::now_utc();
    DailyLogEntry {
        id: new_entry_id(food_id, now),
        food_name: food_name.to_string(),
        logged_at: now,
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::dto::MacronutrientBreakdown;

    fn analysis(cal: f64, c: f64, p: f64, f: f64) -> NutrientAnalysisResult {
        NutrientAnalysisResult {
            calorie_count: cal,
            macronutrient_breakdown: MacronutrientBreakdown {
                carbohydrates: c,
                proteins: p,
                fats: f,
            },
            micronutrient_details: None,
            serving_size: "1 piece".into(),
            health_insights: "ok".into(),
        }
    }

    fn sample_log() -> DailyLog {
        let mut log = DailyLog::default();
        log.add(new_entry("banana", "Banana", analysis(105.0, 27.0, 1.3, 0.4)))
            .unwrap();
        log.add(new_entry("egg", "Egg", analysis(78.0, 0.6, 6.3, 5.3)))
            .unwrap();
        log.add(new_entry("rice", "Rice", analysis(206.0, 45.0, 4.3, 0.4)))
            .unwrap();
        log
    }

    #[test]
    fn add_then_remove_restores_log() {
        let mut log = sample_log();
        let before = log.clone();
        let entry = new_entry("apple", "Apple", analysis(95.0, 25.0, 0.5, 0.3));
        let id = entry.id.clone();
        log.add(entry).unwrap();
        assert_eq!(log.len(), 4);
        assert!(log.remove(&id).is_some());
        assert_eq!(log, before);
    }

    #[test]
    fn remove_unknown_id_leaves_log_untouched() {
        let mut log = sample_log();
        let before = log.clone();
        assert!(log.remove("nope").is_none());
        assert_eq!(log, before);
    }

    #[test]
    fn insertion_order_is_kept() {
        let log = sample_log();
        let names: Vec<_> = log.entries().iter().map(|e| e.food_name.as_str()).collect();
        assert_eq!(names, ["Banana", "Egg", "Rice"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut log = DailyLog::default();
        let entry = new_entry("egg", "Egg", analysis(78.0, 0.6, 6.3, 5.3));
        log.add(entry.clone()).unwrap();
        assert_eq!(
            log.add(entry.clone()),
            Err(IntakeError::DuplicateId(entry.id))
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn totals_are_additive() {
        let log = sample_log();
        let mut without_last = log.clone();
        let last = log.entries().last().unwrap().clone();
        without_last.remove(&last.id).unwrap();

        let expected = without_last.totals().accumulate(&last.analysis);
        assert_eq!(log.totals(), expected);
        assert_eq!(log.totals().items, 3);
        assert_eq!(log.totals().calories, 389.0);
    }

    #[test]
    fn empty_log_has_zero_totals() {
        let log = DailyLog::default();
        assert!(log.is_empty());
        assert_eq!(log.totals(), DailyTotals::default());
    }

    #[test]
    fn ids_differ_within_the_same_millisecond() {
        let now = OffsetDateTime::now_utc();
        let a = new_entry_id("egg", now);
        let b = new_entry_id("egg", now);
        assert_ne!(a, b);
        assert!(a.contains("-egg-"));
    }
}
