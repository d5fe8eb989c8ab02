// =====================================================================================
// MALTEGO CELL MODELS
// =====================================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::{MfaStatus, RiskLevel};

/// Email -> MFA enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaltegoMfa {
    pub email: String,
    pub mfa_status: MfaStatus,
    pub methods: Vec<String>,
}

/// Email -> breach exposure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaltegoBreach {
    pub email: String,
    pub breached: bool,
    pub sources: Vec<String>,
}

/// Email -> risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaltegoRisk {
    pub email: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginStatus {
    Suspicious,
    Normal,
}

/// Email -> suspicious login activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaltegoLogins {
    pub email: String,
    pub suspicious_logins: u32,
    pub last_login: DateTime<Utc>,
    pub status: LoginStatus,
}
