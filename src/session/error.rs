use axum::http::StatusCode;

use crate::analysis::error::AnalysisError;
use crate::intake::log::IntakeError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
    #[error("too many active sessions")]
    Capacity,
    #[error("analysis task aborted")]
    AnalysisAborted,
    #[error("unknown food {0}")]
    UnknownFood(String),
    #[error("no food selected")]
    NoSelection,
    #[error("quantity {0} is not offered for the selected food")]
    InvalidQuantity(String),
    #[error("an analysis is already in progress")]
    AnalysisPending,
    #[error("no analysis to add")]
    NothingToAdd,
    #[error("log entry {0} not found")]
    EntryNotFound(String),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl SessionError {
    pub fn into_rejection(self) -> (StatusCode, String) {
        let msg = self.to_string();
        let status = match self {
            SessionError::Analysis(e) => return crate::analysis::handlers::reject(e),
            SessionError::NotFound
            | SessionError::UnknownFood(_)
            | SessionError::EntryNotFound(_) => StatusCode::NOT_FOUND,
            SessionError::NoSelection | SessionError::InvalidQuantity(_) => {
                StatusCode::BAD_REQUEST
            }
            SessionError::AnalysisPending
            | SessionError::NothingToAdd
            | SessionError::Intake(_) => StatusCode::CONFLICT,
            SessionError::Capacity => StatusCode::SERVICE_UNAVAILABLE,
            SessionError::AnalysisAborted => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_task_failures_map_to_server_statuses() {
        let (status, _) = SessionError::Capacity.into_rejection();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let (status, _) = SessionError::AnalysisAborted.into_rejection();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let (status, msg) = SessionError::UnknownFood("kiwi".into()).into_rejection();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "unknown food kiwi");
    }
}
