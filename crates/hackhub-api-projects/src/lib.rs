//! Project directory API for hackhub.
//!
//! Listing plus create/get/update/delete for hackathon project records.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod service;

pub use error::ProjectsError;
pub use models::{CreateProjectRequest, ProjectResponse};
pub use router::{projects_router, ProjectsState};
pub use service::ProjectService;
