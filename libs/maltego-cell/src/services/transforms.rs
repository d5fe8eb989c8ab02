// =====================================================================================
// MALTEGO TRANSFORM SERVICE
// =====================================================================================

use std::sync::Arc;

use tracing::{debug, instrument};

use shared_directory::UserDirectory;
use shared_models::{AppError, RiskLevel, User};

use crate::models::{LoginStatus, MaltegoBreach, MaltegoLogins, MaltegoMfa, MaltegoRisk};

pub struct TransformService {
    directory: Arc<UserDirectory>,
}

impl TransformService {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }

    fn lookup(&self, email: &str) -> Result<&User, AppError> {
        let user = self
            .directory
            .find_by_email(email)
            .ok_or_else(AppError::user_not_found)?;
        debug!("Transform resolved {}", email);
        Ok(user)
    }

    #[instrument(skip(self))]
    pub fn mfa(&self, email: &str) -> Result<MaltegoMfa, AppError> {
        let user = self.lookup(email)?;

        Ok(MaltegoMfa {
            email: email.to_string(),
            mfa_status: user.mfa_status,
            methods: user.mfa_methods.clone(),
        })
    }

    #[instrument(skip(self))]
    pub fn breach(&self, email: &str) -> Result<MaltegoBreach, AppError> {
        let user = self.lookup(email)?;

        Ok(MaltegoBreach {
            email: email.to_string(),
            breached: user.breached,
            sources: user.breach_sources.clone(),
        })
    }

    #[instrument(skip(self))]
    pub fn risk(&self, email: &str) -> Result<MaltegoRisk, AppError> {
        let user = self.lookup(email)?;

        Ok(MaltegoRisk {
            email: email.to_string(),
            risk_score: user.risk_score,
            risk_level: RiskLevel::from_score(user.risk_score),
        })
    }

    #[instrument(skip(self))]
    pub fn logins(&self, email: &str) -> Result<MaltegoLogins, AppError> {
        let user = self.lookup(email)?;
        let status = if user.has_suspicious_logins() {
            LoginStatus::Suspicious
        } else {
            LoginStatus::Normal
        };

        Ok(MaltegoLogins {
            email: email.to_string(),
            suspicious_logins: user.suspicious_logins,
            last_login: user.last_login,
            status,
        })
    }
}
