// =====================================================================================
// USER DIRECTORY - SYNTHETIC POPULATION & QUERY LAYER
// =====================================================================================
//
// The in-memory data source shared by every cell:
// - Population generation with randomized security posture
// - Additive risk scoring
// - Conjunctive filtering and email lookup
//
// =====================================================================================

pub mod directory;
pub mod generator;
pub mod scoring;

pub use directory::{UserDirectory, UserFilter};
pub use generator::PopulationGenerator;
pub use scoring::{breakdown_for, is_privileged_role, risk_score};
