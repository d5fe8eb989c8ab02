// =====================================================================================
// USER CELL - DIRECTORY BROWSING, STATS & EXPORT
// =====================================================================================
//
// - Filtered user listing and per-user detail views
// - MFA / breach / risk aggregate statistics
// - Breach lookup by email
// - CSV export sharing the listing filters
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{BreachInfo, UserStats};
pub use router::create_user_router;
pub use services::UserService;
