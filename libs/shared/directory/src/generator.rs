use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};
use uuid::Builder;

use shared_config::AppConfig;
use shared_models::{MfaStatus, User};

use crate::scoring::{risk_breakdown, risk_score, NOISE_RANGE};

pub const DEPARTMENTS: [&str; 8] = [
    "IT", "Finance", "HR", "Marketing", "Sales", "Operations", "Legal", "Engineering",
];

pub const ROLES: [&str; 7] = [
    "Admin", "Manager", "User", "Finance Manager", "HR Director", "IT Specialist", "Sales Rep",
];

pub const FIRST_NAMES: [&str; 20] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack",
    "Kate", "Liam", "Maya", "Noah", "Olivia", "Paul", "Quinn", "Ruby", "Sam", "Tara",
];

pub const LAST_NAMES: [&str; 18] = [
    "Anderson", "Brown", "Clark", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Johnson",
    "King", "Lewis", "Miller", "Nelson", "Parker", "Quinn", "Roberts", "Smith", "Taylor",
];

pub const MFA_METHODS: [&str; 4] = ["Authenticator App", "SMS", "Hardware Token", "Email"];

pub const BREACH_SOURCES: [&str; 6] = ["LinkedIn", "Adobe", "Dropbox", "Yahoo", "Equifax", "Facebook"];

const MFA_ADOPTION_RATE: f64 = 0.8;
const BREACH_RATE: f64 = 0.2;
const SUSPICIOUS_RATE: f64 = 0.3;
const MAX_LOGIN_AGE_DAYS: i64 = 30;

/// Builds the synthetic user population served by the directory.
#[derive(Debug, Clone)]
pub struct PopulationGenerator {
    size: usize,
    email_domain: String,
}

impl PopulationGenerator {
    pub fn new(size: usize, email_domain: impl Into<String>) -> Self {
        Self {
            size,
            email_domain: email_domain.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.population_size, config.email_domain.clone())
    }

    #[instrument(skip(self, rng), fields(size = self.size))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<User> {
        let now = Utc::now();
        let users: Vec<User> = (0..self.size)
            .map(|_| self.generate_user(rng, now))
            .collect();

        debug!("Generated {} synthetic users", users.len());
        users
    }

    fn generate_user<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> User {
        let first_name = pick(rng, &FIRST_NAMES);
        let last_name = pick(rng, &LAST_NAMES);
        let role = pick(rng, &ROLES);
        let department = pick(rng, &DEPARTMENTS);

        let mfa_status = if rng.gen_bool(MFA_ADOPTION_RATE) {
            MfaStatus::Enabled
        } else {
            MfaStatus::NotEnabled
        };
        let mfa_methods = if mfa_status.is_enabled() {
            sample(rng, &MFA_METHODS)
        } else {
            Vec::new()
        };

        let breached = rng.gen_bool(BREACH_RATE);
        let breach_sources = if breached {
            sample(rng, &BREACH_SOURCES)
        } else {
            Vec::new()
        };

        let last_login = now
            - Duration::days(rng.gen_range(0..=MAX_LOGIN_AGE_DAYS))
            - Duration::hours(rng.gen_range(0..=23));

        let suspicious_logins = if rng.gen_bool(SUSPICIOUS_RATE) {
            rng.gen_range(0..=5)
        } else {
            0
        };

        let breakdown = risk_breakdown(mfa_status, breached, role, suspicious_logins);
        let score = risk_score(&breakdown, rng.gen_range(NOISE_RANGE));

        User {
            id: Builder::from_random_bytes(rng.gen()).into_uuid(),
            email: format!(
                "{}.{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                self.email_domain
            ),
            name: format!("{} {}", first_name, last_name),
            role: role.to_string(),
            department: department.to_string(),
            mfa_status,
            mfa_methods,
            breached,
            breach_sources,
            last_login,
            suspicious_logins,
            risk_score: score,
            created_at: now,
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Samples 1 to 3 distinct entries.
fn sample<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> Vec<String> {
    let count = rng.gen_range(1..=3);
    items
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}
