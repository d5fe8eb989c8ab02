use std::ops::RangeInclusive;

use shared_models::risk::{
    RiskBreakdown, BREACH_EXPOSURE_WEIGHT, MFA_DISABLED_WEIGHT, PRIVILEGED_ROLE_WEIGHT,
    SUSPICIOUS_ACTIVITY_WEIGHT,
};
use shared_models::{MfaStatus, User};

pub const PRIVILEGED_ROLES: [&str; 4] = ["Admin", "Finance Manager", "HR Director", "IT Specialist"];

pub const NOISE_RANGE: RangeInclusive<i32> = -5..=15;

pub const MAX_RISK_SCORE: i32 = 100;

pub fn is_privileged_role(role: &str) -> bool {
    PRIVILEGED_ROLES.contains(&role)
}

pub fn risk_breakdown(
    mfa_status: MfaStatus,
    breached: bool,
    role: &str,
    suspicious_logins: u32,
) -> RiskBreakdown {
    RiskBreakdown {
        mfa_disabled: if mfa_status.is_enabled() { 0 } else { MFA_DISABLED_WEIGHT },
        breach_exposure: if breached { BREACH_EXPOSURE_WEIGHT } else { 0 },
        privileged_role: if is_privileged_role(role) { PRIVILEGED_ROLE_WEIGHT } else { 0 },
        suspicious_activity: if suspicious_logins > 0 { SUSPICIOUS_ACTIVITY_WEIGHT } else { 0 },
    }
}

pub fn breakdown_for(user: &User) -> RiskBreakdown {
    risk_breakdown(user.mfa_status, user.breached, &user.role, user.suspicious_logins)
}

/// Sums the factors, adds `noise` and clamps into [0, 100].
pub fn risk_score(breakdown: &RiskBreakdown, noise: i32) -> u8 {
    (breakdown.total() + noise).clamp(0, MAX_RISK_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_factors() {
        let breakdown = risk_breakdown(MfaStatus::Enabled, false, "User", 0);
        assert_eq!(breakdown, RiskBreakdown::default());
        assert_eq!(risk_score(&breakdown, -5), 0);
        assert_eq!(risk_score(&breakdown, 15), 15);
    }

    #[test]
    fn test_all_factors_clamp_to_max() {
        let breakdown = risk_breakdown(MfaStatus::NotEnabled, true, "Admin", 3);
        assert_eq!(breakdown.total(), 115);
        assert_eq!(risk_score(&breakdown, -5), 100);
        assert_eq!(risk_score(&breakdown, 15), 100);
    }

    #[test]
    fn test_individual_weights() {
        assert_eq!(risk_breakdown(MfaStatus::NotEnabled, false, "User", 0).total(), 30);
        assert_eq!(risk_breakdown(MfaStatus::Enabled, true, "User", 0).total(), 25);
        assert_eq!(risk_breakdown(MfaStatus::Enabled, false, "HR Director", 0).total(), 40);
        assert_eq!(risk_breakdown(MfaStatus::Enabled, false, "User", 1).total(), 20);
    }

    #[test]
    fn test_privileged_roles() {
        for role in PRIVILEGED_ROLES {
            assert!(is_privileged_role(role));
        }
        assert!(!is_privileged_role("Manager"));
        assert!(!is_privileged_role("Sales Rep"));
        assert!(!is_privileged_role("admin"));
    }

    #[test]
    fn test_score_is_monotonic_in_factors() {
        let base = risk_breakdown(MfaStatus::Enabled, false, "User", 0);
        let breached = risk_breakdown(MfaStatus::Enabled, true, "User", 0);
        for noise in NOISE_RANGE {
            assert!(risk_score(&breached, noise) >= risk_score(&base, noise));
        }
    }
}
