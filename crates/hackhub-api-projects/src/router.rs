//! Projects router configuration.
//!
//! Routes:
//! - GET    /projects
//! - POST   /projects
//! - GET    /projects/{id}
//! - PUT    /projects/{id}
//! - DELETE /projects/{id}

use crate::handlers::{create_project, delete_project, get_project, list_projects, update_project};
use crate::service::ProjectService;
use axum::routing::get;
use axum::Router;
use hackhub_db::ProjectStore;
use std::sync::Arc;

/// Shared state for the projects endpoints.
#[derive(Clone)]
pub struct ProjectsState {
    /// The project directory service.
    pub projects: Arc<ProjectService>,
}

impl ProjectsState {
    /// Assemble the projects service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            projects: Arc::new(ProjectService::new(store)),
        }
    }
}

/// Build the projects router.
pub fn projects_router(state: ProjectsState) -> Router {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(state)
}
