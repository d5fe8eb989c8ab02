use std::sync::Arc;

use axum::{routing::get, Router};

use shared_directory::UserDirectory;

use crate::handlers::*;

pub fn create_user_router(directory: Arc<UserDirectory>) -> Router {
    let handlers = Arc::new(UserHandlers::new(directory));

    Router::new()
        .route("/users", get(list_users))
        .route("/users/{email}", get(get_user_detail))
        .route("/stats", get(get_stats))
        .route("/breach/{email}", get(get_breach_info))
        .route("/export/csv", get(export_users_csv))
        .with_state(handlers)
}
