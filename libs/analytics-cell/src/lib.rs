pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{RiskLeader, TrendPoint};
pub use router::create_analytics_router;
pub use services::AnalyticsService;
