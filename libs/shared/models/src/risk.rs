use serde::{Deserialize, Serialize};

pub const MFA_DISABLED_WEIGHT: u8 = 30;
pub const BREACH_EXPOSURE_WEIGHT: u8 = 25;
pub const PRIVILEGED_ROLE_WEIGHT: u8 = 40;
pub const SUSPICIOUS_ACTIVITY_WEIGHT: u8 = 20;

pub const HIGH_RISK_THRESHOLD: u8 = 70;
pub const MEDIUM_RISK_THRESHOLD: u8 = 40;

/// Additive contribution of each risk factor, noise excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub mfa_disabled: u8,
    pub breach_exposure: u8,
    pub privileged_role: u8,
    pub suspicious_activity: u8,
}

impl RiskBreakdown {
    pub fn total(&self) -> i32 {
        i32::from(self.mfa_disabled)
            + i32::from(self.breach_exposure)
            + i32::from(self.privileged_role)
            + i32::from(self.suspicious_activity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = RiskBreakdown {
            mfa_disabled: MFA_DISABLED_WEIGHT,
            breach_exposure: 0,
            privileged_role: PRIVILEGED_ROLE_WEIGHT,
            suspicious_activity: SUSPICIOUS_ACTIVITY_WEIGHT,
        };
        assert_eq!(breakdown.total(), 90);
        assert_eq!(RiskBreakdown::default().total(), 0);
    }
}
