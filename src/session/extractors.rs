use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use uuid::Uuid;

pub const SESSION_HEADER: &str = "x-session-id";

/// Session id taken from the `X-Session-Id` header.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or((StatusCode::BAD_REQUEST, "missing X-Session-Id header".into()))?;

        let id = Uuid::parse_str(raw.trim())
            .map_err(|_| (StatusCode::BAD_REQUEST, "invalid X-Session-Id header".into()))?;

        Ok(SessionId(id))
    }
}
