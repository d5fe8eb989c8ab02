use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::User;

use crate::generator::PopulationGenerator;

/// Conjunctive predicates over the directory. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub mfa_status: Option<String>,
    pub min_risk: Option<i64>,
    pub max_risk: Option<i64>,
}

impl UserFilter {
    /// Reads filters from raw query parameters. Empty values are dropped and
    /// non-numeric risk bounds are ignored. Text values are kept verbatim.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| params.get(key).filter(|v| !v.is_empty()).cloned();
        let bound = |key: &str| {
            let raw = params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())?;
            match raw.parse::<i64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    debug!("Ignoring non-numeric {}={}", key, raw);
                    None
                }
            }
        };

        Self {
            search: text("search"),
            department: text("department"),
            mfa_status: text("mfa_status"),
            min_risk: bound("min_risk"),
            max_risk: bound("max_risk"),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !user.email.to_lowercase().contains(&needle)
                && !user.name.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(department) = &self.department {
            if user.department != *department {
                return false;
            }
        }

        if let Some(status) = &self.mfa_status {
            if user.mfa_status.as_str() != status {
                return false;
            }
        }

        let score = i64::from(user.risk_score);
        if self.min_risk.is_some_and(|min| score < min) {
            return false;
        }
        if self.max_risk.is_some_and(|max| score > max) {
            return false;
        }

        true
    }
}

/// The generated population, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Generates the population described by `config`, seeded when
    /// `directory_seed` is set.
    pub fn generate(config: &AppConfig) -> Self {
        let generator = PopulationGenerator::from_config(config);
        let mut rng = match config.directory_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let users = generator.generate(&mut rng);
        info!(
            "User directory ready: {} users (seed: {:?})",
            users.len(),
            config.directory_seed
        );

        Self::new(users)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// First user whose email matches exactly.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn filter(&self, filter: &UserFilter) -> Vec<&User> {
        self.users.iter().filter(|u| filter.matches(u)).collect()
    }
}
