use crate::llm::LlmError;

/// Failure of a single analysis attempt. Nothing partial is ever returned alongside it.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("model response failed validation: {0}")]
    Validation(String),
    #[error(transparent)]
    Transport(#[from] LlmError),
}

impl AnalysisError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Validation and transport failures look the same to callers.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Transport(_))
    }
}
