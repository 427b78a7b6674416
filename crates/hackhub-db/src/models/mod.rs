//! Database entity models.

pub mod project;
pub mod session;
pub mod user;

pub use project::{CreateProject, Project};
pub use session::Session;
pub use user::User;
