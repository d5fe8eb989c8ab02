use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::instrument;

use shared_directory::UserDirectory;
use shared_models::AppError;

use crate::models::{MaltegoBreach, MaltegoLogins, MaltegoMfa, MaltegoRisk};
use crate::services::TransformService;

pub struct MaltegoHandlers {
    transform_service: TransformService,
}

impl MaltegoHandlers {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self {
            transform_service: TransformService::new(directory),
        }
    }
}

#[instrument(skip(handlers))]
pub async fn mfa_transform(
    State(handlers): State<Arc<MaltegoHandlers>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MaltegoMfa>, AppError> {
    let Path(email) = path?;
    Ok(Json(handlers.transform_service.mfa(&email)?))
}

#[instrument(skip(handlers))]
pub async fn breach_transform(
    State(handlers): State<Arc<MaltegoHandlers>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MaltegoBreach>, AppError> {
    let Path(email) = path?;
    Ok(Json(handlers.transform_service.breach(&email)?))
}

#[instrument(skip(handlers))]
pub async fn risk_transform(
    State(handlers): State<Arc<MaltegoHandlers>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MaltegoRisk>, AppError> {
    let Path(email) = path?;
    Ok(Json(handlers.transform_service.risk(&email)?))
}

#[instrument(skip(handlers))]
pub async fn logins_transform(
    State(handlers): State<Arc<MaltegoHandlers>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MaltegoLogins>, AppError> {
    let Path(email) = path?;
    Ok(Json(handlers.transform_service.logins(&email)?))
}
