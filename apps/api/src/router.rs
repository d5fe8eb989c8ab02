use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use analytics_cell::create_analytics_router;
use maltego_cell::create_maltego_router;
use shared_directory::UserDirectory;
use user_cell::create_user_router;

pub fn create_router(directory: Arc<UserDirectory>) -> Router {
    let api = Router::new()
        .merge(create_user_router(directory.clone()))
        .nest("/maltego", create_maltego_router(directory.clone()))
        .nest("/analytics", create_analytics_router(directory));

    Router::new()
        .route("/", get(|| async { "MFA Monitoring API is running!" }))
        .nest("/api", api)
}
