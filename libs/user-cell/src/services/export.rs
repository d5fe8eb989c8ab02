use tracing::debug;

use shared_models::{AppError, User};
use shared_utils::format::csv_timestamp;

use crate::models::{ExportRow, EXPORT_HEADER};

impl From<&User> for ExportRow {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
            mfa_status: user.mfa_status.to_string(),
            breached: if user.breached { "Yes" } else { "No" }.to_string(),
            last_login: csv_timestamp(&user.last_login),
            risk_score: user.risk_score.to_string(),
        }
    }
}

/// Renders users as CSV with the fixed export header.
pub fn export_csv(users: &[User]) -> Result<Vec<u8>, AppError> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());

    csv_writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| AppError::Internal(format!("CSV write error: {e}")))?;

    for user in users {
        let row = ExportRow::from(user);
        csv_writer
            .write_record(row.as_record())
            .map_err(|e| AppError::Internal(format!("CSV write error: {e}")))?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush error: {e}")))?;

    debug!("Exported {} users ({} bytes)", users.len(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::test_utils::TestUser;

    #[test]
    fn test_header_and_rows() {
        let users = vec![
            TestUser::new("Alice", "Anderson").to_user(),
            TestUser::new("Bob", "Brown").without_mfa().breached(&["Yahoo"]).to_user(),
        ];

        let csv = String::from_utf8(export_csv(&users).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Email,Name,Role,Department,MFA Status,Breached,Last Login,Risk Score"
        );
        assert!(lines[1].starts_with("alice.anderson@halmstad.se,Alice Anderson,User,IT,Enabled,No,"));
        assert!(lines[2].starts_with("bob.brown@halmstad.se,Bob Brown,User,IT,Not Enabled,Yes,"));
        assert!(lines[2].ends_with(",55"));
    }

    #[test]
    fn test_last_login_format() {
        let user = TestUser::new("Alice", "Anderson").to_user();
        let row = ExportRow::from(&user);

        assert_eq!(row.last_login, user.last_login.format("%Y-%m-%d %H:%M:%S").to_string());
        assert_eq!(row.last_login.len(), 19);
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let csv = String::from_utf8(export_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut user = TestUser::new("Alice", "Anderson").to_user();
        user.department = "Sales, Nordics".to_string();

        let csv = String::from_utf8(export_csv(&[user]).unwrap()).unwrap();
        assert!(csv.contains("\"Sales, Nordics\""));
    }
}
