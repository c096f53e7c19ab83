//! Resolved description of the person the plan is built for.

pub mod concerns;
pub mod restrictions;
pub mod skin_type;

pub use concerns::{extract_main_concerns, prioritize_concerns, Concern, MAX_MAIN_CONCERNS};
pub use restrictions::{check_restrictions, Restrictions};
pub use skin_type::{
    classify_readings, determine_skin_type, resolve_skin_type, SkinType, SkinTypeBasis,
    SkinTypeResolution,
};

use serde::{Deserialize, Serialize};

/// Built once per plan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinProfile {
    pub skin_type: SkinType,
    pub main_concerns: Vec<Concern>,
    pub irritation_score: f64,
    pub restrictions: Restrictions,
    /// RFC 3339, second precision, UTC `Z` suffix
    pub analysis_timestamp: String,
    pub skin_type_basis: SkinTypeBasis,
}

impl SkinProfile {
    pub fn has_concern(&self, concern: &Concern) -> bool {
        self.main_concerns.contains(concern)
    }
}
