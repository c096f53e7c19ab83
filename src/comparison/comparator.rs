use crate::comparison::types::*;
use crate::intake::{find_metric, MetricKey};
use crate::profile::Concern;

/// Reading changes at or above this many points are called out in the notes
pub const SIGNIFICANT_METRIC_DELTA: f64 = 5.0;

pub struct Comparator<'a> {
    previous: &'a SessionSnapshot,
    latest: &'a SessionSnapshot,
}

impl<'a> Comparator<'a> {
    /// Snapshots are put in time order regardless of argument order.
    pub fn new(first: &'a SessionSnapshot, second: &'a SessionSnapshot) -> Self {
        let (previous, latest) = if first.created_at <= second.created_at {
            (first, second)
        } else {
            (second, first)
        };
        Self { previous, latest }
    }

    /// Perform full comparison
    pub fn compare(&self) -> SessionComparison {
        let metrics = self.compare_metrics();
        let profile = self.compare_profile();
        let notes = self.generate_notes(&metrics, &profile);

        SessionComparison {
            previous_session: self.previous.session_id,
            latest_session: self.latest.session_id,
            previous_at: self.previous.created_at,
            latest_at: self.latest.created_at,
            metrics,
            profile,
            notes,
        }
    }

    fn compare_metrics(&self) -> Vec<MetricComparison> {
        MetricKey::ALL
            .iter()
            .filter_map(|&key| {
                let previous = find_metric(&self.previous.metrics, key).map(|m| m.value);
                let latest = find_metric(&self.latest.metrics, key).map(|m| m.value);
                if previous.is_none() && latest.is_none() {
                    return None;
                }
                Some(MetricComparison {
                    key,
                    previous,
                    latest,
                    delta: previous.zip(latest).map(|(before, after)| after - before),
                })
            })
            .collect()
    }

    fn compare_profile(&self) -> ProfileComparison {
        ProfileComparison {
            skin_type: Change {
                previous: self.previous.skin_type,
                latest: self.latest.skin_type,
            },
            main_concerns: Change {
                previous: self.previous.main_concerns.clone(),
                latest: self.latest.main_concerns.clone(),
            },
        }
    }

    fn generate_notes(
        &self,
        metrics: &[MetricComparison],
        profile: &ProfileComparison,
    ) -> Vec<String> {
        let mut notes: Vec<String> = metrics.iter().filter_map(metric_note).collect();

        if let (Some(previous), Some(latest)) =
            (profile.skin_type.previous, profile.skin_type.latest)
        {
            if previous != latest {
                notes.push(format!("Skin type changed from {previous} to {latest}."));
            }
        }

        if let (Some(previous), Some(latest)) = (
            &profile.main_concerns.previous,
            &profile.main_concerns.latest,
        ) {
            let added = difference(latest, previous);
            if !added.is_empty() {
                notes.push(format!("New concerns reported: {}.", added.join(", ")));
            }
            let resolved = difference(previous, latest);
            if !resolved.is_empty() {
                notes.push(format!("Concerns no longer reported: {}.", resolved.join(", ")));
            }
        }

        if notes.is_empty() {
            notes.push("No significant changes between sessions.".to_string());
        }
        notes
    }
}

fn metric_note(metric: &MetricComparison) -> Option<String> {
    let (previous, latest, delta) = (metric.previous?, metric.latest?, metric.delta?);
    if delta.abs() < SIGNIFICANT_METRIC_DELTA {
        return None;
    }
    let direction = if delta > 0.0 { "increased" } else { "decreased" };
    Some(format!(
        "{} {} by {:.1} points ({:.1} to {:.1}).",
        metric.key,
        direction,
        delta.abs(),
        previous,
        latest
    ))
}

fn difference<'c>(from: &'c [Concern], without: &[Concern]) -> Vec<&'c str> {
    from.iter()
        .filter(|concern| !without.contains(concern))
        .map(Concern::as_str)
        .collect()
}
