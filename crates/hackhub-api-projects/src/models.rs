//! Request and response models for the projects API.

use chrono::{DateTime, Utc};
use hackhub_db::{CreateProject, Project};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request body for creating a project.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProjectRequest {
    /// Project name, unique across the directory.
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// One-line pitch.
    pub tag_line: Option<String>,

    /// Longer description.
    pub description: Option<String>,

    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Team member names.
    #[serde(default)]
    pub members: Vec<String>,

    /// URL of the project photo.
    pub photo: Option<String>,

    /// Application areas the project targets.
    #[serde(default)]
    pub application_area: Vec<String>,

    /// Whether the project won a prize.
    #[serde(default)]
    pub winner: bool,

    /// Which prize, if any.
    pub winner_type: Option<String>,

    /// The hackathon the project was built at.
    pub hackathon: Option<String>,

    /// Hackathon year.
    #[validate(range(min = 2000, max = 2100, message = "Year out of range"))]
    pub year: Option<i32>,
}

impl From<CreateProjectRequest> for CreateProject {
    fn from(request: CreateProjectRequest) -> Self {
        CreateProject {
            name: request.name,
            tag_line: request.tag_line,
            description: request.description,
            tags: request.tags,
            members: request.members,
            photo: request.photo,
            application_area: request.application_area,
            winner: request.winner,
            winner_type: request.winner_type,
            hackathon: request.hackathon,
            year: request.year,
        }
    }
}

/// One project as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub tag_line: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub members: Vec<String>,
    pub photo: Option<String>,
    pub application_area: Vec<String>,
    pub winner: bool,
    pub winner_type: Option<String>,
    pub hackathon: Option<String>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            tag_line: project.tag_line,
            description: project.description,
            tags: project.tags,
            members: project.members,
            photo: project.photo,
            application_area: project.application_area,
            winner: project.winner,
            winner_type: project.winner_type,
            hackathon: project.hackathon,
            year: project.year,
            created_at: project.created_at,
        }
    }
}
