use std::sync::Arc;

use axum::{routing::get, Router};

use shared_directory::UserDirectory;

use crate::handlers::*;

pub fn create_analytics_router(directory: Arc<UserDirectory>) -> Router {
    let handlers = Arc::new(AnalyticsHandlers::new(directory));

    Router::new()
        .route("/mfa-trend", get(get_mfa_trend))
        .route("/top-risks", get(get_top_risks))
        .with_state(handlers)
}
