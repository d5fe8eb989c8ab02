// =====================================================================================
// USER CELL HANDLERS
// =====================================================================================

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument};

use shared_directory::{UserDirectory, UserFilter};
use shared_models::{AppError, User, UserDetail};

use crate::models::{BreachInfo, UserStats, EXPORT_FILENAME};
use crate::services::{export_csv, UserService};

pub struct UserHandlers {
    user_service: UserService,
}

impl UserHandlers {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self {
            user_service: UserService::new(directory),
        }
    }
}

#[instrument(skip(handlers))]
pub async fn list_users(
    State(handlers): State<Arc<UserHandlers>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<User>> {
    let filter = UserFilter::from_params(&params);
    Json(handlers.user_service.list_users(&filter))
}

#[instrument(skip(handlers))]
pub async fn get_user_detail(
    State(handlers): State<Arc<UserHandlers>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<UserDetail>, AppError> {
    let Path(email) = path?;
    let detail = handlers
        .user_service
        .user_detail(&email, &mut rand::thread_rng())?;

    Ok(Json(detail))
}

#[instrument(skip(handlers))]
pub async fn get_stats(State(handlers): State<Arc<UserHandlers>>) -> Json<UserStats> {
    Json(handlers.user_service.stats())
}

#[instrument(skip(handlers))]
pub async fn get_breach_info(
    State(handlers): State<Arc<UserHandlers>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BreachInfo>, AppError> {
    let Path(email) = path?;
    Ok(Json(handlers.user_service.breach_info(&email)?))
}

#[instrument(skip(handlers))]
pub async fn export_users_csv(
    State(handlers): State<Arc<UserHandlers>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = UserFilter::from_params(&params);
    let users = handlers.user_service.list_users(&filter);
    let csv_bytes = export_csv(&users)?;

    info!("CSV export of {} users", users.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv_bytes,
    ))
}
