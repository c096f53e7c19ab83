//! Engine configuration.
//!
//! Thresholds and weights default to the values the planner was designed
//! around. A `.skinplan.toml` in the working directory or any ancestor can
//! override individual fields.

mod core;
mod loader;
mod scoring;
mod thresholds;

pub use self::core::EngineConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use scoring::{ExplainabilityConfig, IrritationWeights};
pub use thresholds::{ClassificationThresholds, SchedulingThresholds};
