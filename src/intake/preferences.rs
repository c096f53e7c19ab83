use std::fmt;

use serde::{Deserialize, Serialize};

/// Optional per-request tweaks to the generated routine.
///
/// Unrecognised keys are ignored and missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Upper bound on morning serums
    #[serde(default = "default_max_serums")]
    pub max_serums: usize,

    #[serde(default)]
    pub moisturizer_texture: MoisturizerTexture,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_serums: default_max_serums(),
            moisturizer_texture: MoisturizerTexture::default(),
        }
    }
}

impl Preferences {
    pub fn with_max_serums(mut self, max_serums: usize) -> Self {
        self.max_serums = max_serums;
        self
    }

    pub fn with_texture(mut self, texture: MoisturizerTexture) -> Self {
        self.moisturizer_texture = texture;
        self
    }
}

pub fn default_max_serums() -> usize {
    2
}

/// Preferred moisturizer feel. Any value other than `"lightweight"` reads as
/// [`MoisturizerTexture::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MoisturizerTexture {
    #[default]
    Normal,
    Lightweight,
}

impl From<String> for MoisturizerTexture {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("lightweight") {
            MoisturizerTexture::Lightweight
        } else {
            MoisturizerTexture::Normal
        }
    }
}

impl fmt::Display for MoisturizerTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoisturizerTexture::Normal => f.write_str("normal"),
            MoisturizerTexture::Lightweight => f.write_str("lightweight"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.max_serums, 2);
        assert_eq!(prefs.moisturizer_texture, MoisturizerTexture::Normal);
    }

    #[test]
    fn test_unknown_texture_means_normal() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"moisturizer_texture": "whipped"}"#).unwrap();
        assert_eq!(prefs.moisturizer_texture, MoisturizerTexture::Normal);
    }

    #[test]
    fn test_lightweight_texture() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"moisturizer_texture": "lightweight", "max_serums": 1}"#)
                .unwrap();
        assert_eq!(prefs.moisturizer_texture, MoisturizerTexture::Lightweight);
        assert_eq!(prefs.max_serums, 1);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"fragrance_free": true, "max_serums": 3}"#).unwrap();
        assert_eq!(prefs.max_serums, 3);
    }

    #[test]
    fn test_texture_serializes_lowercase() {
        let json = serde_json::to_string(&MoisturizerTexture::Lightweight).unwrap();
        assert_eq!(json, r#""lightweight""#);
    }
}
