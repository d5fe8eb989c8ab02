pub mod error;
pub mod risk;
pub mod user;

pub use error::AppError;
pub use risk::{RiskBreakdown, RiskLevel};
pub use user::{BreachRecord, LoginEvent, MfaStatus, User, UserDetail};
