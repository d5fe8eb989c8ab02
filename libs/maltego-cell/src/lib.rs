// =====================================================================================
// MALTEGO CELL - LINK-ANALYSIS TRANSFORMS
// =====================================================================================
//
// Email -> MFA, breach, risk and login records shaped for Maltego-style
// transform consumers.
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{LoginStatus, MaltegoBreach, MaltegoLogins, MaltegoMfa, MaltegoRisk};
pub use router::create_maltego_router;
pub use services::TransformService;
