//! Session-to-session comparison of readings and resolved profile.

pub mod comparator;
pub mod types;

pub use comparator::{Comparator, SIGNIFICANT_METRIC_DELTA};
pub use types::{
    Change, MetricComparison, ProfileComparison, SessionComparison, SessionSnapshot,
};

/// Compare two sessions; the earlier one is treated as the baseline.
pub fn compare_sessions(first: &SessionSnapshot, second: &SessionSnapshot) -> SessionComparison {
    Comparator::new(first, second).compare()
}
