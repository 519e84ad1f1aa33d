use tracing::{debug, error, info};
use uuid::Uuid;

use super::error::SessionError;
use super::model::Session;
use crate::analysis::dto::NutrientAnalysisResult;
use crate::analysis::services::analyze_food_nutrients;
use crate::catalog::repo as catalog;
use crate::intake::dto::{DailyIntakeView, DailyLogEntry};
use crate::state::AppState;

pub async fn create_session(st: &AppState) -> Result<Session, SessionError> {
    let session = st.sessions.create().await?;
    let active = st.sessions.count().await;
    info!(session_id = %session.id, active, "session created");
    Ok(session)
}

pub async fn end_session(st: &AppState, id: Uuid) -> Result<(), SessionError> {
    if !st.sessions.delete(id).await {
        return Err(SessionError::NotFound);
    }
    info!(session_id = %id, "session ended");
    Ok(())
}

pub async fn get_session(st: &AppState, id: Uuid) -> Result<Session, SessionError> {
    st.sessions.get(id).await.ok_or(SessionError::NotFound)
}

async fn with_session<T>(
    st: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut Session) -> Result<T, SessionError>,
) -> Result<T, SessionError> {
    st.sessions.update(id, f).await.ok_or(SessionError::NotFound)?
}

pub async fn select_food(st: &AppState, id: Uuid, food_id: &str) -> Result<Session, SessionError> {
    let food = catalog::find_by_id(food_id)
        .ok_or_else(|| SessionError::UnknownFood(food_id.to_string()))?;
    with_session(st, id, |s| {
        s.select_food(food);
        Ok(s.clone())
    })
    .await
}

pub async fn change_quantity(
    st: &AppState,
    id: Uuid,
    quantity: &str,
) -> Result<Session, SessionError> {
    with_session(st, id, |s| {
        s.change_quantity(quantity)?;
        Ok(s.clone())
    })
    .await
}

/// Runs an analysis for the session's current selection.
///
/// The pending flag is set before the model call and cleared afterwards whatever the
/// outcome; a failure leaves the catalog and the log as they were. The call and the reset
/// run on their own task, so they complete even if the caller goes away.
pub async fn analyze_selection(
    st: &AppState,
    id: Uuid,
) -> Result<NutrientAnalysisResult, SessionError> {
    let req = with_session(st, id, |s| s.begin_analysis()).await?;
    debug!(session_id = %id, food = %req.food_item, quantity = %req.quantity, "analysis started");

    let task_state = st.clone();
    let task = tokio::spawn(async move {
        let outcome = analyze_food_nutrients(&task_state, &req).await;
        // the session may have been ended meanwhile; nothing left to reset then
        task_state
            .sessions
            .update(id, |s| s.finish_analysis(&req, outcome.as_ref().ok()))
            .await;
        outcome
    });

    match task.await {
        Ok(outcome) => outcome.map_err(SessionError::from),
        Err(e) => {
            error!(error = %e, session_id = %id, "analysis task aborted");
            st.sessions.update(id, |s| s.is_analyzing = false).await;
            Err(SessionError::AnalysisAborted)
        }
    }
}

pub async fn add_to_intake(st: &AppState, id: Uuid) -> Result<DailyLogEntry, SessionError> {
    let (entry, logged) = with_session(st, id, |s| {
        let entry = s.add_current_to_log()?;
        Ok((entry, s.log.len()))
    })
    .await?;
    info!(session_id = %id, entry_id = %entry.id, food = %entry.food_name, logged, "added to daily intake");
    Ok(entry)
}

pub async fn remove_from_intake(
    st: &AppState,
    id: Uuid,
    entry_id: &str,
) -> Result<DailyLogEntry, SessionError> {
    let entry = with_session(st, id, |s| s.remove_from_log(entry_id)).await?;
    info!(session_id = %id, entry_id = %entry.id, "removed from daily intake");
    Ok(entry)
}

pub async fn daily_intake(st: &AppState, id: Uuid) -> Result<DailyIntakeView, SessionError> {
    Ok(get_session(st, id).await?.log.view())
}

#[cfg(test)]
mod session_tests {
    use super::*;
    use crate::analysis::error::AnalysisError;
    use std::time::Duration;

    #[tokio::test]
    async fn full_flow_select_analyze_add_remove() {
        let st = AppState::fake();
        let id = create_session(&st).await.unwrap().id;

        select_food(&st, id, "banana").await.unwrap();
        change_quantity(&st, id, "100g").await.unwrap();
        let result = analyze_selection(&st, id).await.unwrap();
        assert_eq!(result.serving_size, "100g");

        let s = get_session(&st, id).await.unwrap();
        assert!(!s.is_analyzing);
        assert_eq!(s.analysis.as_ref(), Some(&result));

        let entry = add_to_intake(&st, id).await.unwrap();
        let view = daily_intake(&st, id).await.unwrap();
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.totals.calories, 105.0);

        remove_from_intake(&st, id, &entry.id).await.unwrap();
        let view = daily_intake(&st, id).await.unwrap();
        assert!(view.entries.is_empty());
        assert_eq!(view.totals.items, 0);
    }

    #[tokio::test]
    async fn failed_analysis_resets_pending_and_keeps_log() {
        let st = AppState::fake_replying(Some("not json"));
        let id = create_session(&st).await.unwrap().id;
        select_food(&st, id, "egg").await.unwrap();

        let err = analyze_selection(&st, id).await.unwrap_err();
        assert!(matches!(err, SessionError::Analysis(AnalysisError::Validation(_))));

        let s = get_session(&st, id).await.unwrap();
        assert!(!s.is_analyzing);
        assert!(s.analysis.is_none());
        assert!(s.log.is_empty());
        assert!(matches!(
            add_to_intake(&st, id).await,
            Err(SessionError::NothingToAdd)
        ));
    }

    #[tokio::test]
    async fn second_analysis_while_pending_is_rejected() {
        let st = AppState::fake();
        let id = create_session(&st).await.unwrap().id;
        select_food(&st, id, "rice").await.unwrap();
        st.sessions.update(id, |s| s.is_analyzing = true).await;

        let err = analyze_selection(&st, id).await.unwrap_err();
        assert!(matches!(err, SessionError::AnalysisPending));
    }

    #[tokio::test]
    async fn dropped_caller_does_not_leave_session_pending() {
        let st = AppState::fake_slow(Duration::from_millis(200));
        let id = create_session(&st).await.unwrap().id;
        select_food(&st, id, "banana").await.unwrap();

        let cancelled =
            tokio::time::timeout(Duration::from_millis(20), analyze_selection(&st, id)).await;
        assert!(cancelled.is_err());
        assert!(get_session(&st, id).await.unwrap().is_analyzing);

        tokio::time::sleep(Duration::from_millis(400)).await;
        let s = get_session(&st, id).await.unwrap();
        assert!(!s.is_analyzing);
        assert!(s.analysis.is_some());

        let retry = analyze_selection(&st, id).await.unwrap();
        assert_eq!(retry.serving_size, "1 piece");
    }

    #[tokio::test]
    async fn unknown_session_and_food() {
        let st = AppState::fake();
        assert!(matches!(
            get_session(&st, Uuid::new_v4()).await,
            Err(SessionError::NotFound)
        ));
        let id = create_session(&st).await.unwrap().id;
        assert!(matches!(
            select_food(&st, id, "dragonfruit").await,
            Err(SessionError::UnknownFood(f)) if f == "dragonfruit"
        ));
        assert!(matches!(
            analyze_selection(&st, id).await,
            Err(SessionError::NoSelection)
        ));
        end_session(&st, id).await.unwrap();
        assert!(matches!(end_session(&st, id).await, Err(SessionError::NotFound)));
    }
}
