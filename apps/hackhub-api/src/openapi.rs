//! `OpenAPI` documentation for the HackHub API.
//!
//! The generated spec is served as plain JSON at `/api-docs/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::health::HealthResponse;

/// Security scheme modifier for bearer session tokens.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// `OpenAPI` documentation for the HackHub API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HackHub API",
        version = "0.1.0",
        description = "Authentication and project directory API for HackHub"
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server")
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::health::health_handler,
        hackhub_api_auth::handlers::login::login_handler,
        hackhub_api_auth::handlers::callback::callback_handler,
        hackhub_api_auth::handlers::logout::logout_handler,
        hackhub_api_auth::handlers::me::me_handler,
        hackhub_api_projects::handlers::list_projects,
        hackhub_api_projects::handlers::get_project,
        hackhub_api_projects::handlers::create_project,
        hackhub_api_projects::handlers::update_project,
        hackhub_api_projects::handlers::delete_project,
    ),
    components(schemas(
        HealthResponse,
        hackhub_api_auth::LoginRequest,
        hackhub_api_auth::AssertionCallbackRequest,
        hackhub_api_auth::LogoutRequest,
        hackhub_api_auth::LoginResponse,
        hackhub_api_auth::MeResponse,
        hackhub_api_projects::CreateProjectRequest,
        hackhub_api_projects::ProjectResponse,
    )),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Authentication", description = "Login, callback, logout, session introspection"),
        (name = "Projects", description = "Hackathon project directory")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes serving the `OpenAPI` document.
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_includes_all_routes() {
        let spec = ApiDoc::openapi();
        for path in [
            "/health",
            "/auth/login",
            "/auth/callback",
            "/auth/logout",
            "/auth/me",
            "/projects",
            "/projects/{id}",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
