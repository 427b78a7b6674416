//! In-memory stores.
//!
//! Backs tests and local development without a database. Mutations take the
//! write lock for their whole critical section, so find-or-create is atomic
//! under concurrent callers exactly like the Postgres upsert.

use crate::error::DbError;
use crate::models::{CreateProject, Project, Session, User};
use crate::store::{ProjectStore, SessionStore, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use hackhub_core::{SessionId, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    users_by_email: HashMap<String, Uuid>,
    sessions: HashMap<Uuid, Session>,
    projects: HashMap<Uuid, Project>,
}

/// In-memory store implementation.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users_by_email
            .get(email)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(id.as_uuid()).cloned())
    }

    async fn find_or_create(&self, email: &str, password_hash: &str) -> Result<User, DbError> {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner
            .users_by_email
            .get(email)
            .and_then(|id| inner.users.get(id))
        {
            return Ok(existing.clone());
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
            created_at: Utc::now(),
        };
        inner.users_by_email.insert(email.to_string(), user.id);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn create(&self, user_id: UserId) -> Result<Session, DbError> {
        let session = Session {
            id: Uuid::new_v4(),
            user_id: *user_id.as_uuid(),
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .await
            .sessions
            .insert(session.id, session.clone());
        Ok(session)
    }

    async fn find(&self, id: SessionId) -> Result<Option<Session>, DbError> {
        Ok(self.inner.read().await.sessions.get(id.as_uuid()).cloned())
    }

    async fn delete(&self, id: SessionId) -> Result<(), DbError> {
        self.inner.write().await.sessions.remove(id.as_uuid());
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Project>, DbError> {
        let inner = self.inner.read().await;
        let mut projects: Vec<Project> = inner.projects.values().cloned().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Project>, DbError> {
        Ok(self.inner.read().await.projects.get(&id).cloned())
    }

    async fn insert(&self, data: CreateProject) -> Result<Project, DbError> {
        let mut inner = self.inner.write().await;
        if inner.projects.values().any(|p| p.name == data.name) {
            return Err(DbError::Conflict(format!("project name '{}'", data.name)));
        }

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            name: data.name,
            tag_line: data.tag_line,
            description: data.description,
            tags: data.tags,
            members: data.members,
            photo: data.photo,
            application_area: data.application_area,
            winner: data.winner,
            winner_type: data.winner_type,
            hackathon: data.hackathon,
            year: data.year,
            created_at: now,
            updated_at: now,
        };
        inner.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: Uuid, data: CreateProject) -> Result<Option<Project>, DbError> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.projects.get(&id) else {
            return Ok(None);
        };
        if inner
            .projects
            .values()
            .any(|p| p.id != id && p.name == data.name)
        {
            return Err(DbError::Conflict(format!("project name '{}'", data.name)));
        }

        let project = Project {
            id,
            name: data.name,
            tag_line: data.tag_line,
            description: data.description,
            tags: data.tags,
            members: data.members,
            photo: data.photo,
            application_area: data.application_area,
            winner: data.winner,
            winner_type: data.winner_type,
            hackathon: data.hackathon,
            year: data.year,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        inner.projects.insert(id, project.clone());
        Ok(Some(project))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        Ok(self.inner.write().await.projects.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn find_or_create_returns_existing_row() {
        let store = MemoryStore::new();
        let first = store.find_or_create("a@x.com", "hash-1").await.unwrap();
        let second = store.find_or_create("a@x.com", "hash-2").await.unwrap();

        assert_eq!(first.id, second.id);
        // The second call's hash is never applied.
        assert_eq!(second.password_hash.as_deref(), Some("hash-1"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_find_or_create_yields_one_user() {
        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .find_or_create("race@x.com", &format!("hash-{i}"))
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.dedup();
        let first = ids[0];
        assert!(ids.iter().all(|id| *id == first));
        assert_eq!(store.inner.read().await.users.len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_session_is_noop() {
        let store = MemoryStore::new();
        SessionStore::delete(&store, SessionId::new()).await.unwrap();
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = MemoryStore::new();
        let user = store.find_or_create("a@x.com", "h").await.unwrap();

        let s1 = SessionStore::create(&store, user.user_id()).await.unwrap();
        let s2 = SessionStore::create(&store, user.user_id()).await.unwrap();
        assert_ne!(s1.id, s2.id);

        SessionStore::delete(&store, s1.session_id()).await.unwrap();
        assert!(store.find(s1.session_id()).await.unwrap().is_none());
        assert!(store.find(s2.session_id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_project_name_conflicts() {
        let store = MemoryStore::new();
        let data = CreateProject {
            name: "Poppin".into(),
            ..CreateProject::default()
        };
        store.insert(data.clone()).await.unwrap();

        let err = store.insert(data).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_created_at() {
        let store = MemoryStore::new();
        let created = store
            .insert(CreateProject {
                name: "Poppin".into(),
                ..CreateProject::default()
            })
            .await
            .unwrap();

        let updated = store
            .update(
                created.id,
                CreateProject {
                    name: "Poppin".into(),
                    tag_line: Some("Find the party".into()),
                    ..CreateProject::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.tag_line.as_deref(), Some("Find the party"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_unknown_project_is_none() {
        let store = MemoryStore::new();
        let result = store
            .update(Uuid::new_v4(), CreateProject::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn rename_onto_existing_name_conflicts() {
        let store = MemoryStore::new();
        store
            .insert(CreateProject {
                name: "Poppin".into(),
                ..CreateProject::default()
            })
            .await
            .unwrap();
        let other = store
            .insert(CreateProject {
                name: "Wavelength".into(),
                ..CreateProject::default()
            })
            .await
            .unwrap();

        let err = store
            .update(
                other.id,
                CreateProject {
                    name: "Poppin".into(),
                    ..CreateProject::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn delete_removes_the_project() {
        let store = MemoryStore::new();
        let created = store
            .insert(CreateProject {
                name: "Poppin".into(),
                ..CreateProject::default()
            })
            .await
            .unwrap();

        assert!(ProjectStore::delete(&store, created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
        // A second delete reports the id as unknown.
        assert!(!ProjectStore::delete(&store, created.id).await.unwrap());
    }
}
