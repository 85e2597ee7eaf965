//! Route registration for the settings REST surface

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Build the router exposing the settings endpoints
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/settings",
            get(get_config_handler).put(update_config_handler),
        )
        .route("/settings/schema", post(render_schema_handler))
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_config_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<ConfigDto>, super::error::Problem> {
    handlers::get_config(service).await
}

async fn render_schema_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<EnvironmentDto>,
) -> Result<axum::Json<SchemaDto>, super::error::Problem> {
    handlers::render_schema(service, json).await
}

async fn update_config_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<ConfigDto>,
) -> Result<(axum::http::StatusCode, axum::Json<ConfigDto>), super::error::Problem> {
    handlers::update_config(service, json).await
}
