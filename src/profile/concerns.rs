use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intake::FormAnswers;

/// At most this many concerns are targeted by one plan
pub const MAX_MAIN_CONCERNS: usize = 3;

/// A skin concern reported on the questionnaire.
///
/// Unrecognised concerns are kept verbatim in [`Concern::Other`] so they can
/// still be narrated and stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Concern {
    Acne,
    Pigmentation,
    Aging,
    Sensitivity,
    Rosacea,
    Other(String),
}

impl Concern {
    pub fn parse(value: &str) -> Concern {
        match value.trim().to_ascii_lowercase().as_str() {
            "acne" => Concern::Acne,
            "pigmentation" => Concern::Pigmentation,
            "aging" => Concern::Aging,
            "sensitivity" => Concern::Sensitivity,
            "rosacea" => Concern::Rosacea,
            _ => Concern::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Concern::Acne => "acne",
            Concern::Pigmentation => "pigmentation",
            Concern::Aging => "aging",
            Concern::Sensitivity => "sensitivity",
            Concern::Rosacea => "rosacea",
            Concern::Other(other) => other,
        }
    }

    /// Priority concerns are targeted ahead of everything else
    pub fn is_priority(&self) -> bool {
        matches!(
            self,
            Concern::Acne | Concern::Pigmentation | Concern::Aging | Concern::Sensitivity
        )
    }
}

impl From<String> for Concern {
    fn from(value: String) -> Self {
        Concern::parse(&value)
    }
}

impl From<Concern> for String {
    fn from(concern: Concern) -> Self {
        match concern {
            Concern::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority concerns first, then the rest, each group in input order,
/// truncated to [`MAX_MAIN_CONCERNS`].
pub fn prioritize_concerns<I>(concerns: I) -> Vec<Concern>
where
    I: IntoIterator<Item = Concern>,
{
    let (priority, other): (Vec<_>, Vec<_>) =
        concerns.into_iter().partition(Concern::is_priority);

    priority
        .into_iter()
        .chain(other)
        .take(MAX_MAIN_CONCERNS)
        .collect()
}

pub fn extract_main_concerns(form: &FormAnswers) -> Vec<Concern> {
    prioritize_concerns(form.raw_concerns().iter().map(|raw| Concern::parse(raw)))
}
