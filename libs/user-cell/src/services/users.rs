use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, instrument};

use shared_directory::{breakdown_for, UserDirectory, UserFilter};
use shared_models::risk::HIGH_RISK_THRESHOLD;
use shared_models::{AppError, User, UserDetail};
use shared_utils::format::{percentage, round2};

use crate::models::{BreachInfo, UserStats};
use crate::services::history::{breach_history, login_history};

pub struct UserService {
    directory: Arc<UserDirectory>,
}

impl UserService {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self))]
    pub fn list_users(&self, filter: &UserFilter) -> Vec<User> {
        let users: Vec<User> = self
            .directory
            .filter(filter)
            .into_iter()
            .cloned()
            .collect();

        debug!("Filter matched {} of {} users", users.len(), self.directory.len());
        users
    }

    pub fn get_user(&self, email: &str) -> Result<&User, AppError> {
        self.directory
            .find_by_email(email)
            .ok_or_else(AppError::user_not_found)
    }

    /// Builds a detail view with freshly synthesized history; two calls for
    /// the same user will differ.
    #[instrument(skip(self, rng))]
    pub fn user_detail<R: Rng + ?Sized>(
        &self,
        email: &str,
        rng: &mut R,
    ) -> Result<UserDetail, AppError> {
        let user = self.get_user(email)?;
        let now = Utc::now();

        Ok(UserDetail {
            user: user.clone(),
            login_history: login_history(rng, now),
            breach_history: breach_history(rng, user, now),
            risk_breakdown: breakdown_for(user),
        })
    }

    pub fn stats(&self) -> UserStats {
        let users = self.directory.users();
        let total_users = users.len();
        let mfa_enabled = users.iter().filter(|u| u.mfa_status.is_enabled()).count();
        let breached_users = users.iter().filter(|u| u.breached).count();
        let high_risk_users = users
            .iter()
            .filter(|u| u.risk_score >= HIGH_RISK_THRESHOLD)
            .count();

        let avg_risk_score = if total_users == 0 {
            0.0
        } else {
            let sum: u64 = users.iter().map(|u| u64::from(u.risk_score)).sum();
            round2(sum as f64 / total_users as f64)
        };

        UserStats {
            total_users,
            mfa_enabled,
            mfa_disabled: total_users - mfa_enabled,
            mfa_percentage: percentage(mfa_enabled, total_users),
            breached_users,
            breach_percentage: percentage(breached_users, total_users),
            avg_risk_score,
            high_risk_users,
        }
    }

    pub fn breach_info(&self, email: &str) -> Result<BreachInfo, AppError> {
        let user = self.get_user(email)?;

        Ok(BreachInfo {
            email: email.to_string(),
            breached: user.breached,
            sources: user.breach_sources.clone(),
            last_checked: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_models::RiskBreakdown;
    use shared_utils::test_utils::{TestConfig, TestDirectory};

    #[test]
    fn test_stats_on_standard_directory() {
        let service = UserService::new(TestDirectory::standard());
        let stats = service.stats();

        assert_eq!(stats.total_users, 6);
        assert_eq!(stats.mfa_enabled, 4);
        assert_eq!(stats.mfa_disabled, 2);
        assert_eq!(stats.mfa_percentage, 66.67);
        assert_eq!(stats.breached_users, 2);
        assert_eq!(stats.breach_percentage, 33.33);
        assert_eq!(stats.avg_risk_score, 45.0);
        assert_eq!(stats.high_risk_users, 2);
    }

    #[test]
    fn test_stats_on_empty_directory() {
        let stats = UserService::new(TestDirectory::empty()).stats();

        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.mfa_percentage, 0.0);
        assert_eq!(stats.breach_percentage, 0.0);
        assert_eq!(stats.avg_risk_score, 0.0);
    }

    #[test]
    fn test_stats_counts_consistent_on_generated_population() {
        let service = UserService::new(TestConfig::default().directory());
        let stats = service.stats();

        assert_eq!(stats.mfa_enabled + stats.mfa_disabled, stats.total_users);
        let expected = round2(stats.mfa_enabled as f64 / stats.total_users as f64 * 100.0);
        assert_eq!(stats.mfa_percentage, expected);
        assert!(stats.breached_users <= stats.total_users);
    }

    #[test]
    fn test_user_detail_breakdown_excludes_noise() {
        let service = UserService::new(TestDirectory::standard());
        let mut rng = StdRng::seed_from_u64(5);

        let detail = service.user_detail("charlie.clark@halmstad.se", &mut rng).unwrap();

        assert_eq!(detail.user.risk_score, 70);
        assert_eq!(
            detail.risk_breakdown,
            RiskBreakdown {
                mfa_disabled: 0,
                breach_exposure: 0,
                privileged_role: 40,
                suspicious_activity: 20,
            }
        );
        assert_eq!(detail.login_history.len(), 10);
        assert!(detail.breach_history.is_empty());
    }

    #[test]
    fn test_unknown_email_is_not_found() {
        let service = UserService::new(TestDirectory::standard());
        let mut rng = StdRng::seed_from_u64(5);

        assert_matches!(service.get_user("ghost@halmstad.se"), Err(AppError::NotFound(_)));
        assert_matches!(service.user_detail("ghost@halmstad.se", &mut rng), Err(AppError::NotFound(_)));
        assert_matches!(service.breach_info("ghost@halmstad.se"), Err(AppError::NotFound(_)));
    }

    #[test]
    fn test_breach_info() {
        let service = UserService::new(TestDirectory::standard());
        let info = service.breach_info("bob.brown@halmstad.se").unwrap();

        assert!(info.breached);
        assert_eq!(info.sources, vec!["LinkedIn", "Adobe"]);
    }
}
