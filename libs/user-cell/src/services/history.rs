// =====================================================================================
// HISTORY SYNTHESIS - PER-REQUEST LOGIN & BREACH TIMELINES
// =====================================================================================

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use shared_models::{BreachRecord, LoginEvent, User};

pub const LOGIN_HISTORY_LEN: usize = 10;

pub const LOGIN_LOCATIONS: [&str; 4] = [
    "Stockholm, Sweden",
    "Gothenburg, Sweden",
    "Malmö, Sweden",
    "Unknown",
];

pub const BREACH_TYPES: [&str; 3] = ["Email", "Password", "Personal Info"];

const SUSPICIOUS_LOGIN_RATE: f64 = 0.1;

/// Fabricates `LOGIN_HISTORY_LEN` logins from the past 1 to 30 days.
pub fn login_history<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<LoginEvent> {
    (0..LOGIN_HISTORY_LEN)
        .map(|_| LoginEvent {
            timestamp: now - Duration::days(rng.gen_range(1..=30)),
            ip_address: format!(
                "192.168.{}.{}",
                rng.gen_range(1..=255u8),
                rng.gen_range(1..=255u8)
            ),
            location: LOGIN_LOCATIONS
                .choose(rng)
                .copied()
                .unwrap_or("Unknown")
                .to_string(),
            suspicious: rng.gen_bool(SUSPICIOUS_LOGIN_RATE),
        })
        .collect()
}

/// One record per breach source, dated 30 to 365 days back. Empty for
/// users that were never breached.
pub fn breach_history<R: Rng + ?Sized>(
    rng: &mut R,
    user: &User,
    now: DateTime<Utc>,
) -> Vec<BreachRecord> {
    if !user.breached {
        return Vec::new();
    }

    user.breach_sources
        .iter()
        .map(|source| BreachRecord {
            source: source.clone(),
            date: now - Duration::days(rng.gen_range(30..=365)),
            exposure_type: BREACH_TYPES
                .choose(rng)
                .copied()
                .unwrap_or("Email")
                .to_string(),
        })
        .collect()
}
