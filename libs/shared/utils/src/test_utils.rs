use std::sync::Arc;
use chrono::{Duration, Utc};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_directory::{risk_score, scoring::risk_breakdown, UserDirectory};
use shared_models::{MfaStatus, User};

pub struct TestConfig {
    pub population_size: usize,
    pub email_domain: String,
    pub directory_seed: Option<u64>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            email_domain: "halmstad.se".to_string(),
            directory_seed: Some(1234),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            population_size: self.population_size,
            email_domain: self.email_domain.clone(),
            directory_seed: self.directory_seed,
            ..AppConfig::default()
        }
    }

    /// Seeded, generated directory.
    pub fn directory(&self) -> Arc<UserDirectory> {
        Arc::new(UserDirectory::generate(&self.to_app_config()))
    }
}

/// Builder for hand-crafted users with a noise-free risk score.
pub struct TestUser {
    pub email: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub mfa_methods: Vec<String>,
    pub breach_sources: Vec<String>,
    pub suspicious_logins: u32,
    pub noise: i32,
    pub last_login_days_ago: i64,
}

impl TestUser {
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            email: format!("{}.{}@halmstad.se", first.to_lowercase(), last.to_lowercase()),
            name: format!("{} {}", first, last),
            role: "User".to_string(),
            department: "IT".to_string(),
            mfa_methods: vec!["Authenticator App".to_string()],
            breach_sources: Vec::new(),
            suspicious_logins: 0,
            noise: 0,
            last_login_days_ago: 1,
        }
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub fn without_mfa(mut self) -> Self {
        self.mfa_methods.clear();
        self
    }

    pub fn breached(mut self, sources: &[&str]) -> Self {
        self.breach_sources = sources.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn suspicious(mut self, count: u32) -> Self {
        self.suspicious_logins = count;
        self
    }

    pub fn noise(mut self, noise: i32) -> Self {
        self.noise = noise;
        self
    }

    pub fn to_user(&self) -> User {
        let mfa_status = if self.mfa_methods.is_empty() {
            MfaStatus::NotEnabled
        } else {
            MfaStatus::Enabled
        };
        let breached = !self.breach_sources.is_empty();
        let breakdown = risk_breakdown(mfa_status, breached, &self.role, self.suspicious_logins);
        let now = Utc::now();

        User {
            id: Uuid::new_v4(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            department: self.department.clone(),
            mfa_status,
            mfa_methods: self.mfa_methods.clone(),
            breached,
            breach_sources: self.breach_sources.clone(),
            last_login: now - Duration::days(self.last_login_days_ago),
            suspicious_logins: self.suspicious_logins,
            risk_score: risk_score(&breakdown, self.noise),
            created_at: now,
        }
    }
}

pub struct TestDirectory;

impl TestDirectory {
    /// Six users with known scores:
    /// alice 0, bob 100, charlie 70, diana 40, eve 35, frank 25.
    pub fn standard() -> Arc<UserDirectory> {
        let users = vec![
            TestUser::new("Alice", "Anderson").to_user(),
            TestUser::new("Bob", "Brown")
                .role("Admin")
                .department("Finance")
                .without_mfa()
                .breached(&["LinkedIn", "Adobe"])
                .suspicious(3)
                .to_user(),
            TestUser::new("Charlie", "Clark")
                .role("IT Specialist")
                .suspicious(1)
                .noise(10)
                .to_user(),
            TestUser::new("Diana", "Davis")
                .role("HR Director")
                .department("HR")
                .to_user(),
            TestUser::new("Eve", "Evans")
                .department("Finance")
                .without_mfa()
                .noise(5)
                .to_user(),
            TestUser::new("Frank", "Fisher")
                .department("Sales")
                .breached(&["Yahoo"])
                .to_user(),
        ];
        Arc::new(UserDirectory::new(users))
    }

    pub fn empty() -> Arc<UserDirectory> {
        Arc::new(UserDirectory::default())
    }
}
