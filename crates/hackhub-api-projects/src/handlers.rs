//! HTTP handlers for the projects endpoints.

use crate::error::ProjectsError;
use crate::models::{CreateProjectRequest, ProjectResponse};
use crate::router::ProjectsState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

/// List all projects, newest first.
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "All projects", body = [ProjectResponse]),
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<ProjectsState>,
) -> Result<Json<Vec<ProjectResponse>>, ProjectsError> {
    let projects = state.projects.list().await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Fetch one project.
#[utoipa::path(
    get,
    path = "/projects/{id}",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = ProjectResponse),
        (status = 404, description = "No such project"),
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, ProjectsError> {
    let project = state.projects.get(id).await?;
    Ok(Json(project.into()))
}

/// Create a new project.
#[utoipa::path(
    post,
    path = "/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Malformed request"),
        (status = 409, description = "Project name already exists"),
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<ProjectsState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ProjectsError> {
    validate_request(&request)?;

    let project = state.projects.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Replace an existing project.
#[utoipa::path(
    put,
    path = "/projects/{id}",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Malformed request"),
        (status = 404, description = "No such project"),
        (status = 409, description = "Project name already exists"),
    ),
    tag = "Projects"
)]
pub async fn update_project(
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<Json<ProjectResponse>, ProjectsError> {
    validate_request(&request)?;

    let project = state.projects.update(id, request.into()).await?;
    Ok(Json(project.into()))
}

/// Delete a project.
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "No such project"),
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ProjectsError> {
    state.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Validate a request model, flattening field errors into one message.
fn validate_request<T: Validate>(request: &T) -> Result<(), ProjectsError> {
    request.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect();
        ProjectsError::Validation(errors.join(", "))
    })
}
