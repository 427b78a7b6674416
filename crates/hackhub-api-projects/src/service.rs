//! Project directory service.

use crate::error::ProjectsError;
use hackhub_db::{CreateProject, DbError, Project, ProjectStore};
use std::sync::Arc;
use uuid::Uuid;

/// Service for reading and writing project records.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// All projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ProjectsError::Database` if the store is unavailable.
    pub async fn list(&self) -> Result<Vec<Project>, ProjectsError> {
        Ok(self.store.list().await?)
    }

    /// Fetch one project by id.
    ///
    /// # Errors
    ///
    /// Returns `ProjectsError::NotFound` if no such project exists.
    pub async fn get(&self, id: Uuid) -> Result<Project, ProjectsError> {
        self.store.get(id).await?.ok_or(ProjectsError::NotFound)
    }

    /// Create a new project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectsError::DuplicateName` if the name is taken.
    pub async fn create(&self, data: CreateProject) -> Result<Project, ProjectsError> {
        match self.store.insert(data).await {
            Ok(project) => {
                tracing::info!(project_id = %project.id, name = %project.name, "Project created");
                Ok(project)
            }
            Err(DbError::Conflict(_)) => Err(ProjectsError::DuplicateName),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace an existing project's fields.
    ///
    /// # Errors
    ///
    /// Returns `ProjectsError::NotFound` if no such project exists, or
    /// `ProjectsError::DuplicateName` if the new name is held by another
    /// project.
    pub async fn update(&self, id: Uuid, data: CreateProject) -> Result<Project, ProjectsError> {
        match self.store.update(id, data).await {
            Ok(Some(project)) => {
                tracing::info!(project_id = %project.id, name = %project.name, "Project updated");
                Ok(project)
            }
            Ok(None) => Err(ProjectsError::NotFound),
            Err(DbError::Conflict(_)) => Err(ProjectsError::DuplicateName),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectsError::NotFound` if no such project exists.
    pub async fn delete(&self, id: Uuid) -> Result<(), ProjectsError> {
        if self.store.delete(id).await? {
            tracing::info!(project_id = %id, "Project deleted");
            Ok(())
        } else {
            Err(ProjectsError::NotFound)
        }
    }
}
