//! Theme configuration and its persisted JSON layout

use crate::error::ThemeError;
use crate::presets::*;
use serde::{Deserialize, Serialize};

/// Storage key holding the serialized configuration
pub const STORAGE_KEY: &str = "customTheme";

/// The user's visual preferences. Every field is drawn from a closed catalog,
/// so a `ThemeConfig` is always fully valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThemeConfig {
    pub primary_color: PrimaryColor,
    pub surface_color: SurfaceColor,
    pub font_family: FontFamily,
    pub text_size: TextSize,
    pub background_type: BackgroundType,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: PrimaryColor::Red,
            surface_color: SurfaceColor::Zinc,
            font_family: FontFamily::Inter,
            text_size: TextSize::Normal,
            background_type: BackgroundType::DarkVeil,
        }
    }
}

/// Wire shape of the persisted configuration.
///
/// Exactly these five fields; unknown or missing fields and wrong JSON types
/// are rejected by serde before any catalog lookup happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoredTheme {
    pub primary_color: String,
    pub surface_color: String,
    pub font_family: String,
    pub text_size: f64,
    pub background_type: String,
}

impl From<&ThemeConfig> for StoredTheme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            primary_color: config.primary_color.color().to_css(),
            surface_color: config.surface_color.color().to_css(),
            font_family: config.font_family.stack().to_string(),
            text_size: config.text_size.scale(),
            background_type: config.background_type.id().to_string(),
        }
    }
}

impl TryFrom<StoredTheme> for ThemeConfig {
    type Error = ThemeError;

    fn try_from(stored: StoredTheme) -> Result<Self, Self::Error> {
        Ok(Self {
            primary_color: stored.primary_color.parse()?,
            surface_color: stored.surface_color.parse()?,
            font_family: FontFamily::from_stack(&stored.font_family)
                .ok_or_else(|| FontFamily::unknown(&stored.font_family))?,
            text_size: TextSize::from_scale(stored.text_size)
                .ok_or_else(|| TextSize::unknown(&stored.text_size.to_string()))?,
            background_type: stored.background_type.parse()?,
        })
    }
}

impl ThemeConfig {
    /// Serialize to the persisted JSON layout
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(&StoredTheme::from(self))?)
    }

    /// Decode the persisted JSON layout, validating every field against its
    /// catalog. Any deviation yields an error; nothing is partially applied.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let stored: StoredTheme = serde_json::from_str(json)?;
        stored.try_into()
    }

    /// Copy with one field replaced
    pub fn with(self, change: ConfigChange) -> Self {
        let mut next = self;
        match change {
            ConfigChange::PrimaryColor(v) => next.primary_color = v,
            ConfigChange::SurfaceColor(v) => next.surface_color = v,
            ConfigChange::FontFamily(v) => next.font_family = v,
            ConfigChange::TextSize(v) => next.text_size = v,
            ConfigChange::BackgroundType(v) => next.background_type = v,
        }
        next
    }
}

/// A single-field edit of a [`ThemeConfig`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigChange {
    PrimaryColor(PrimaryColor),
    SurfaceColor(SurfaceColor),
    FontFamily(FontFamily),
    TextSize(TextSize),
    BackgroundType(BackgroundType),
}

impl ConfigChange {
    /// Persisted field name touched by this change
    pub fn field(&self) -> &'static str {
        match self {
            Self::PrimaryColor(_) => "primaryColor",
            Self::SurfaceColor(_) => "surfaceColor",
            Self::FontFamily(_) => "fontFamily",
            Self::TextSize(_) => "textSize",
            Self::BackgroundType(_) => "backgroundType",
        }
    }

    /// Whether the change only swaps the background renderer
    pub fn is_background_only(&self) -> bool {
        matches!(self, Self::BackgroundType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_json_layout() {
        let json = ThemeConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "primaryColor": "oklch(63.7% 0.237 25.331)",
                "surfaceColor": "oklch(55.51% 0.016 256.85)",
                "fontFamily": "\"Inter\", system-ui, sans-serif",
                "textSize": 1.0,
                "backgroundType": "darkveil",
            })
        );
    }

    #[test]
    fn decodes_leading_dot_chroma() {
        let json = r#"{
            "primaryColor": "oklch(62.3% .214 259.815)",
            "surfaceColor": "oklch(54.61% 0.022 252.89)",
            "fontFamily": "\"Geist\", system-ui, sans-serif",
            "textSize": 1.25,
            "backgroundType": "plasma"
        }"#;
        let config = ThemeConfig::from_json(json).unwrap();
        assert_eq!(config.primary_color, PrimaryColor::Blue);
        assert_eq!(config.surface_color, SurfaceColor::Slate);
        assert_eq!(config.font_family, FontFamily::Geist);
        assert_eq!(config.text_size, TextSize::Large);
        assert_eq!(config.background_type, BackgroundType::Plasma);
    }

    #[test]
    fn decodes_fractional_lightness() {
        let json = r#"{
            "primaryColor": "oklch(0.637 0.237 25.331)",
            "surfaceColor": "oklch(0.5501 0.011 258.34)",
            "fontFamily": "\"Inter\", system-ui, sans-serif",
            "textSize": 1,
            "backgroundType": "none"
        }"#;
        let config = ThemeConfig::from_json(json).unwrap();
        assert_eq!(config.primary_color, PrimaryColor::Red);
        assert_eq!(config.surface_color, SurfaceColor::Gray);
    }

    #[test]
    fn rejects_structural_mismatch() {
        let cases = [
            // textSize as a string
            r#"{"primaryColor":"red","surfaceColor":"zinc","fontFamily":"x","textSize":"1","backgroundType":"none"}"#,
            // missing backgroundType
            r#"{"primaryColor":"oklch(63.7% 0.237 25.331)","surfaceColor":"oklch(55.51% 0.016 256.85)","fontFamily":"\"Inter\", system-ui, sans-serif","textSize":1}"#,
            // object where a string belongs
            r#"{"primaryColor":{"l":1},"surfaceColor":"zinc","fontFamily":"x","textSize":1,"backgroundType":"none"}"#,
            // extra field
            r#"{"primaryColor":"oklch(63.7% 0.237 25.331)","surfaceColor":"oklch(55.51% 0.016 256.85)","fontFamily":"\"Inter\", system-ui, sans-serif","textSize":1,"backgroundType":"none","radius":4}"#,
            "not json",
            "null",
        ];
        for json in cases {
            assert!(
                matches!(ThemeConfig::from_json(json), Err(ThemeError::Decode(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn rejects_values_outside_catalogs() {
        let json = r#"{"primaryColor":"oklch(10% 0.1 10)","surfaceColor":"oklch(55.51% 0.016 256.85)","fontFamily":"\"Inter\", system-ui, sans-serif","textSize":1,"backgroundType":"darkveil"}"#;
        assert!(matches!(
            ThemeConfig::from_json(json),
            Err(ThemeError::UnknownPreset(_))
        ));

        let json = r#"{"primaryColor":"oklch(63.7% 0.237 25.331)","surfaceColor":"oklch(55.51% 0.016 256.85)","fontFamily":"\"Inter\", system-ui, sans-serif","textSize":3,"backgroundType":"darkveil"}"#;
        assert!(matches!(
            ThemeConfig::from_json(json),
            Err(ThemeError::UnknownPreset(_))
        ));
    }

    #[test]
    fn with_replaces_one_field() {
        let config = ThemeConfig::default().with(ConfigChange::TextSize(TextSize::Large));
        assert_eq!(config.text_size, TextSize::Large);
        assert_eq!(config.primary_color, ThemeConfig::default().primary_color);
    }
}
