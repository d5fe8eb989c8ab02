// =====================================================================================
// ANALYTICS SERVICE - ADOPTION TREND & RISK LEADERBOARD
// =====================================================================================

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, instrument};

use shared_directory::UserDirectory;
use shared_utils::format::{calendar_date, round2};

use crate::models::{RiskLeader, TrendPoint};

pub const TREND_DAYS: i64 = 30;
pub const TREND_BASELINE: f64 = 60.0;
pub const TREND_DAILY_GAIN: f64 = 0.8;
pub const TREND_NOISE: f64 = 5.0;
pub const TREND_CEILING: f64 = 85.0;

pub const TOP_RISK_LIMIT: usize = 10;

pub struct AnalyticsService {
    directory: Arc<UserDirectory>,
}

impl AnalyticsService {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }

    /// Synthetic daily MFA adoption for the last `TREND_DAYS` days, oldest
    /// first, capped at `TREND_CEILING`.
    #[instrument(skip(self, rng))]
    pub fn mfa_trend<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> Vec<TrendPoint> {
        let start = now - Duration::days(TREND_DAYS);

        (0..TREND_DAYS)
            .map(|day| {
                let noise = rng.gen_range(-TREND_NOISE..=TREND_NOISE);
                let percentage =
                    (TREND_BASELINE + day as f64 * TREND_DAILY_GAIN + noise).min(TREND_CEILING);

                TrendPoint {
                    date: calendar_date(&(start + Duration::days(day))),
                    mfa_percentage: round2(percentage),
                }
            })
            .collect()
    }

    /// Highest risk scores first; equal scores keep directory order.
    #[instrument(skip(self))]
    pub fn top_risks(&self, limit: usize) -> Vec<RiskLeader> {
        let mut users: Vec<_> = self.directory.users().iter().collect();
        users.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

        let leaders: Vec<RiskLeader> = users
            .into_iter()
            .take(limit)
            .map(|u| RiskLeader {
                email: u.email.clone(),
                name: u.name.clone(),
                risk_score: u.risk_score,
                department: u.department.clone(),
            })
            .collect();

        debug!("Top risk leaderboard has {} entries", leaders.len());
        leaders
    }
}
