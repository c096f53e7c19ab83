// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod error;
pub mod explain;
pub mod intake;
pub mod io;
pub mod observability;
pub mod plan;
pub mod profile;
pub mod risk;
pub mod routine;
pub mod storage;

// Re-export commonly used types
pub use crate::error::{Error, Result, ResultExt, StorageError};

pub use crate::intake::{
    find_metric, FormAnswers, IntakeRequest, MachineMetric, MetricKey, MetricUnit,
    MoisturizerTexture, Preferences,
};

pub use crate::profile::{
    check_restrictions, determine_skin_type, extract_main_concerns, Concern, Restrictions,
    SkinProfile, SkinType, SkinTypeBasis,
};

pub use crate::risk::{calculate_irritation_score, RiskTier};

pub use crate::routine::{
    build_am_routine, build_pm_routine, Active, RoutineSchedule, RoutineStep, StepKind,
    TimeOfDay, Weekday, WeeklyStep,
};

pub use crate::explain::{generate_explainability, Explainability, SkinTypeSource};

pub use crate::plan::{generate_treatment_plan, PlanEngine, TreatmentPlan};

pub use crate::config::EngineConfig;

pub use crate::storage::{InMemoryPlanRepository, PlanRepository, StoredPlan};

pub use crate::comparison::{compare_sessions, SessionComparison, SessionSnapshot};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
