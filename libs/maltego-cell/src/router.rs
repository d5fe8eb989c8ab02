use std::sync::Arc;

use axum::{routing::get, Router};

use shared_directory::UserDirectory;

use crate::handlers::*;

/// Link-analysis transforms, each keyed by email.
pub fn create_maltego_router(directory: Arc<UserDirectory>) -> Router {
    let handlers = Arc::new(MaltegoHandlers::new(directory));

    Router::new()
        .route("/mfa/{email}", get(mfa_transform))
        .route("/breach/{email}", get(breach_transform))
        .route("/risk/{email}", get(risk_transform))
        .route("/logins/{email}", get(logins_transform))
        .with_state(handlers)
}
