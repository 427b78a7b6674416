//! Hackathon project model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One hackathon project in the directory.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: uuid::Uuid,

    /// Project name, unique across the directory.
    pub name: String,

    /// One-line pitch.
    pub tag_line: Option<String>,

    /// Longer description.
    pub description: Option<String>,

    /// Free-form tags.
    pub tags: Vec<String>,

    /// Team member names.
    pub members: Vec<String>,

    /// URL of the project photo.
    pub photo: Option<String>,

    /// Application areas the project targets.
    pub application_area: Vec<String>,

    /// Whether the project won a prize.
    pub winner: bool,

    /// Which prize, if any.
    pub winner_type: Option<String>,

    /// The hackathon the project was built at.
    pub hackathon: Option<String>,

    /// Hackathon year.
    pub year: Option<i32>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new project.
#[derive(Debug, Clone, Default)]
pub struct CreateProject {
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
}
