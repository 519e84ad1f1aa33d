use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::error::SessionError;
use super::model::Session;

struct Slot {
    session: Session,
    last_seen: Instant,
}

/// In-memory sessions. The lock is held only for the duration of a closure, never across
/// a model call.
///
/// A session untouched for `idle_ttl` is dropped the next time one is created, and no more
/// than `max_sessions` live at once.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Slot>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(60 * 60 * 24), 10_000)
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
            max_sessions,
        }
    }

    pub async fn create(&self) -> Result<Session, SessionError> {
        let mut guard = self.inner.write().await;

        let before = guard.len();
        guard.retain(|_, slot| slot.last_seen.elapsed() < self.idle_ttl);
        let expired = before - guard.len();
        if expired > 0 {
            debug!(expired, "idle sessions dropped");
        }

        if guard.len() >= self.max_sessions {
            return Err(SessionError::Capacity);
        }

        let session = Session::new();
        guard.insert(
            session.id,
            Slot {
                session: session.clone(),
                last_seen: Instant::now(),
            },
        );
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let mut guard = self.inner.write().await;
        guard.get_mut(&id).map(|slot| {
            slot.last_seen = Instant::now();
            slot.session.clone()
        })
    }

    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let mut guard = self.inner.write().await;
        guard.get_mut(&id).map(|slot| {
            slot.last_seen = Instant::now();
            f(&mut slot.session)
        })
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}
