use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::risk::RiskBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MfaStatus {
    #[serde(rename = "Enabled")]
    Enabled,
    #[serde(rename = "Not Enabled")]
    NotEnabled,
}

impl MfaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MfaStatus::Enabled => "Enabled",
            MfaStatus::NotEnabled => "Not Enabled",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, MfaStatus::Enabled)
    }
}

impl std::fmt::Display for MfaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub mfa_status: MfaStatus,
    pub mfa_methods: Vec<String>,
    pub breached: bool,
    pub breach_sources: Vec<String>,
    pub last_login: DateTime<Utc>,
    pub suspicious_logins: u32,
    pub risk_score: u8,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn has_suspicious_logins(&self) -> bool {
        self.suspicious_logins > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginEvent {
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub location: String,
    pub suspicious: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachRecord {
    pub source: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub exposure_type: String,
}

/// A user enriched with per-request synthesized history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub login_history: Vec<LoginEvent>,
    pub breach_history: Vec<BreachRecord>,
    pub risk_breakdown: RiskBreakdown,
}
