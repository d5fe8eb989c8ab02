use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::instrument;

use shared_directory::UserDirectory;

use crate::models::{RiskLeader, TrendPoint};
use crate::services::analytics::{AnalyticsService, TOP_RISK_LIMIT};

pub struct AnalyticsHandlers {
    analytics_service: AnalyticsService,
}

impl AnalyticsHandlers {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self {
            analytics_service: AnalyticsService::new(directory),
        }
    }
}

#[instrument(skip(handlers))]
pub async fn get_mfa_trend(State(handlers): State<Arc<AnalyticsHandlers>>) -> Json<Vec<TrendPoint>> {
    let trend = handlers
        .analytics_service
        .mfa_trend(&mut rand::thread_rng(), Utc::now());

    Json(trend)
}

#[instrument(skip(handlers))]
pub async fn get_top_risks(State(handlers): State<Arc<AnalyticsHandlers>>) -> Json<Vec<RiskLeader>> {
    Json(handlers.analytics_service.top_risks(TOP_RISK_LIMIT))
}
