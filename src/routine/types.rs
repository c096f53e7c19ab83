use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a step plays in the routine, tagged when the step is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Cleansing,
    Treatment,
    Moisturizing,
    Protection,
}

impl StepKind {
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Cleansing => "Cleansing",
            StepKind::Treatment => "Treatment",
            StepKind::Moisturizing => "Moisturizing",
            StepKind::Protection => "Protection",
        }
    }
}

/// Active ingredient carried by a treatment step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Active {
    Niacinamide,
    VitaminC,
    SalicylicAcid,
    Retinol,
}

impl Active {
    pub fn label(&self) -> &'static str {
        match self {
            Active::Niacinamide => "niacinamide",
            Active::VitaminC => "vitamin C",
            Active::SalicylicAcid => "salicylic acid",
            Active::Retinol => "retinol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Am => f.write_str("AM"),
            TimeOfDay::Pm => f.write_str("PM"),
        }
    }
}

/// Day of the week, serialized as 0 (Sunday) through 6 (Saturday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> u8 {
        day.index()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weekday::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| format!("day_of_week must be 0-6 (0 = Sunday), got {value}"))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A daily step; `step_order` is its 1-based position in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStep {
    pub step_order: u32,
    pub instructions: String,
    pub kind: StepKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Active>,
}

/// A step that recurs only on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStep {
    pub day_of_week: Weekday,
    pub when: TimeOfDay,
    pub instructions: String,
    pub kind: StepKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Active>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSchedule {
    pub am: Vec<RoutineStep>,
    pub pm: Vec<RoutineStep>,
    pub weekly: Vec<WeeklyStep>,
}

impl RoutineSchedule {
    pub fn daily(&self, when: TimeOfDay) -> &[RoutineStep] {
        match when {
            TimeOfDay::Am => &self.am,
            TimeOfDay::Pm => &self.pm,
        }
    }

    pub fn weekly_in(&self, when: TimeOfDay) -> impl Iterator<Item = &WeeklyStep> {
        self.weekly.iter().filter(move |step| step.when == when)
    }

    /// True if the active appears anywhere, daily or weekly
    pub fn contains_active(&self, active: Active) -> bool {
        self.am
            .iter()
            .chain(&self.pm)
            .any(|step| step.active == Some(active))
            || self.weekly.iter().any(|step| step.active == Some(active))
    }

    /// Distinct weekdays of a weekly active, in schedule order
    pub fn weekdays_for(&self, active: Active) -> Vec<Weekday> {
        let mut days: Vec<Weekday> = Vec::new();
        for step in self.weekly.iter().filter(|step| step.active == Some(active)) {
            if !days.contains(&step.day_of_week) {
                days.push(step.day_of_week);
            }
        }
        days
    }

    /// Broken structural guarantees, empty for a well-formed schedule
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for (label, steps) in [("am", &self.am), ("pm", &self.pm)] {
            let contiguous = steps
                .iter()
                .enumerate()
                .all(|(index, step)| step.step_order as usize == index + 1);
            if !contiguous {
                violations.push(format!("{label} step_order is not contiguous from 1"));
            }
        }

        if self.am.last().map(|step| step.kind) != Some(StepKind::Protection) {
            violations.push("sunscreen is not the final AM step".to_string());
        }

        for step in &self.weekly {
            let Some(active) = step.active else { continue };
            if self
                .daily(step.when)
                .iter()
                .any(|daily| daily.active == Some(active))
            {
                violations.push(format!(
                    "{} is scheduled both daily and weekly in the {}",
                    active.label(),
                    step.when
                ));
            }
        }
        violations.dedup();

        violations
    }
}

/// Appends daily steps, numbering them from 1
#[derive(Debug, Default)]
pub(crate) struct StepList {
    steps: Vec<RoutineStep>,
}

impl StepList {
    pub(crate) fn push(&mut self, kind: StepKind, instructions: &str, active: Option<Active>) {
        let step_order = self.steps.len() as u32 + 1;
        self.steps.push(RoutineStep {
            step_order,
            instructions: instructions.to_string(),
            kind,
            active,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<RoutineStep> {
        self.steps
    }
}
