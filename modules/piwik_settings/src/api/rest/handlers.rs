//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    mapper,
};
use crate::contract::{Environment, SettingsError};
use crate::domain::Service;
use axum::{http::StatusCode, Json};
use std::sync::Arc;

/// Read the stored configuration (defaults filled in)
pub async fn get_config(service: Arc<Service>) -> Result<Json<ConfigDto>, Problem> {
    let config = service
        .current_config()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(config.into()))
}

/// Render the settings form schema for the posted environment
pub async fn render_schema(
    service: Arc<Service>,
    Json(environment): Json<EnvironmentDto>,
) -> Result<Json<SchemaDto>, Problem> {
    let environment: Environment = environment.into();
    let schema = service
        .render_schema(&environment)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(schema.into()))
}

/// Validate and persist a submitted configuration
pub async fn update_config(
    service: Arc<Service>,
    Json(submission): Json<ConfigDto>,
) -> Result<(StatusCode, Json<ConfigDto>), Problem> {
    let submission = mapper::config_from_dto(submission)
        .map_err(|errors| map_domain_error(SettingsError::Invalid { errors }))?;

    let saved = service
        .submit(submission)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::OK, Json(saved.into())))
}
