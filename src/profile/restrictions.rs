use serde::{Deserialize, Serialize};

use super::concerns::Concern;
use crate::intake::FormAnswers;

/// Medical and safety restrictions derived from the questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restrictions {
    pub pregnant: bool,
    pub breastfeeding: bool,
    pub medications: bool,
    pub sensitive_skin: bool,
}

impl Restrictions {
    /// Every flag paired with its name, in fixed order
    pub fn flags(&self) -> [(&'static str, bool); 4] {
        [
            ("pregnant", self.pregnant),
            ("breastfeeding", self.breastfeeding),
            ("medications", self.medications),
            ("sensitive_skin", self.sensitive_skin),
        ]
    }

    /// Names of the flags that are set
    pub fn applied(&self) -> Vec<String> {
        self.flags()
            .into_iter()
            .filter(|(_, active)| *active)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn any(&self) -> bool {
        self.flags().iter().any(|(_, active)| *active)
    }
}

/// Derive restrictions from the form. `sensitive_skin` looks at every
/// concern the person entered, not only the prioritised ones.
pub fn check_restrictions(form: &FormAnswers) -> Restrictions {
    let medical = &form.medical_info;
    Restrictions {
        pregnant: medical.pregnant,
        breastfeeding: medical.breastfeeding,
        medications: !medical.medications.is_empty(),
        sensitive_skin: form
            .raw_concerns()
            .iter()
            .any(|raw| Concern::parse(raw) == Concern::Sensitivity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_no_restrictions() {
        let restrictions = check_restrictions(&FormAnswers::new());
        assert_eq!(restrictions, Restrictions::default());
        assert!(!restrictions.any());
        assert!(restrictions.applied().is_empty());
    }

    #[test]
    fn test_flags_copied_from_medical_info() {
        let form = FormAnswers::new()
            .pregnant(true)
            .breastfeeding(true)
            .with_medications(["tretinoin"]);
        let restrictions = check_restrictions(&form);
        assert!(restrictions.pregnant);
        assert!(restrictions.breastfeeding);
        assert!(restrictions.medications);
        assert!(!restrictions.sensitive_skin);
    }

    #[test]
    fn test_sensitive_skin_uses_untruncated_concerns() {
        // sensitivity is fourth and falls outside the prioritised three
        let form =
            FormAnswers::new().with_concerns(["acne", "pigmentation", "aging", "sensitivity"]);
        assert!(check_restrictions(&form).sensitive_skin);
    }

    #[test]
    fn test_applied_keeps_fixed_order() {
        let restrictions = Restrictions {
            pregnant: false,
            breastfeeding: true,
            medications: true,
            sensitive_skin: true,
        };
        assert_eq!(
            restrictions.applied(),
            vec!["breastfeeding", "medications", "sensitive_skin"]
        );
    }
}
