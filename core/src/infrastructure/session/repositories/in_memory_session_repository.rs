use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{entities::Session, ports::SessionRepository},
};

/// Process-local session store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&session.id()) {
            return Err(CoreError::Invalid);
        }

        sessions.insert(session.id(), session.clone());
        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn update(&self, session: Session) -> Result<Session, CoreError> {
        let mut sessions = self.sessions.write().await;

        let slot = sessions.get_mut(&session.id()).ok_or(CoreError::NotFound)?;
        *slot = session.clone();

        Ok(session)
    }

    async fn delete(&self, session_id: Uuid) -> Result<(), CoreError> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .map(|_| ())
            .ok_or(CoreError::NotFound)
    }

    async fn delete_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, CoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, session| session.updated_at() > cutoff);

        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_update_delete() {
        let repository = InMemorySessionRepository::new();
        let session = repository.create(Session::new(75.0)).await.unwrap();
        assert_eq!(repository.len().await, 1);

        let mut stored = repository.get_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored, session);

        stored.set_calorie_input("540");
        repository.update(stored).await.unwrap();
        let reloaded = repository.get_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.calorie_input(), "540");

        repository.delete(session.id()).await.unwrap();
        assert!(repository.get_by_id(session.id()).await.unwrap().is_none());
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repository = InMemorySessionRepository::new();
        let session = repository.create(Session::new(75.0)).await.unwrap();
        assert_eq!(
            repository.create(session).await.unwrap_err(),
            CoreError::Invalid
        );
    }

    #[tokio::test]
    async fn test_delete_idle_keeps_recent_sessions() {
        let repository = InMemorySessionRepository::new();
        let stale = repository.create(Session::new(75.0)).await.unwrap();
        let cutoff = Utc::now();
        let fresh = repository.create(Session::new(80.0)).await.unwrap();

        let evicted = repository.delete_idle(cutoff).await.unwrap();

        assert_eq!(evicted, 1);
        assert!(repository.get_by_id(stale.id()).await.unwrap().is_none());
        assert!(repository.get_by_id(fresh.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_idle_on_old_cutoff_is_noop() {
        let repository = InMemorySessionRepository::new();
        repository.create(Session::new(75.0)).await.unwrap();

        let evicted = repository
            .delete_idle(Utc::now() - chrono::TimeDelta::hours(1))
            .await
            .unwrap();

        assert_eq!(evicted, 0);
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_session() {
        let repository = InMemorySessionRepository::new();
        assert_eq!(
            repository.update(Session::new(75.0)).await.unwrap_err(),
            CoreError::NotFound
        );
        assert_eq!(
            repository.delete(Uuid::new_v4()).await.unwrap_err(),
            CoreError::NotFound
        );
    }
}
