use serde::{Deserialize, Deserializer, Serialize};

/// Questionnaire answers as submitted by the person.
///
/// Both sections and every field inside them are optional; `null` is read
/// the same as an absent field. A value of the wrong JSON type is still a
/// deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormAnswers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skin_profile: SkinProfileAnswers,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medical_info: MedicalInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinProfileAnswers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skin_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_concerns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pregnant: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub breastfeeding: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medications: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FormAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skin_type(mut self, skin_type: impl Into<String>) -> Self {
        self.skin_profile.skin_type = Some(skin_type.into());
        self
    }

    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skin_profile.main_concerns = concerns.into_iter().map(Into::into).collect();
        self
    }

    pub fn pregnant(mut self, pregnant: bool) -> Self {
        self.medical_info.pregnant = pregnant;
        self
    }

    pub fn breastfeeding(mut self, breastfeeding: bool) -> Self {
        self.medical_info.breastfeeding = breastfeeding;
        self
    }

    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medical_info.medications = medications.into_iter().map(Into::into).collect();
        self
    }

    /// Concerns exactly as entered, untruncated and unprioritised
    pub fn raw_concerns(&self) -> &[String] {
        &self.skin_profile.main_concerns
    }

    /// Self-reported skin type, if one was given
    pub fn declared_skin_type(&self) -> Option<&str> {
        self.skin_profile.skin_type.as_deref()
    }
}
