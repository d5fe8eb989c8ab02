use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const EXPORT_FILENAME: &str = "mfa_users_export.csv";

pub const EXPORT_HEADER: [&str; 8] = [
    "Email",
    "Name",
    "Role",
    "Department",
    "MFA Status",
    "Breached",
    "Last Login",
    "Risk Score",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_users: usize,
    pub mfa_enabled: usize,
    pub mfa_disabled: usize,
    pub mfa_percentage: f64,
    pub breached_users: usize,
    pub breach_percentage: f64,
    pub avg_risk_score: f64,
    pub high_risk_users: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachInfo {
    pub email: String,
    pub breached: bool,
    pub sources: Vec<String>,
    pub last_checked: DateTime<Utc>,
}

/// One row of the CSV export, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub email: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub mfa_status: String,
    pub breached: String,
    pub last_login: String,
    pub risk_score: String,
}

impl ExportRow {
    pub fn as_record(&self) -> [&str; 8] {
        [
            self.email.as_str(),
            self.name.as_str(),
            self.role.as_str(),
            self.department.as_str(),
            self.mfa_status.as_str(),
            self.breached.as_str(),
            self.last_login.as_str(),
            self.risk_score.as_str(),
        ]
    }
}
