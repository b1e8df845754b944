//! Design tokens derived from a theme configuration

use super::palette::{ColorVariants, Palette};
use crate::color::Oklch;
use crate::config::ThemeConfig;
use std::collections::BTreeMap;

/// Root font size the typography scale multiplies, in px
pub const BASE_FONT_SIZE_PX: f64 = 16.0;

/// Published variable names (without the `--` prefix)
pub mod names {
    pub const PRIMARY_COLOR: &str = "primary-color";
    pub const PRIMARY_COLOR_LIGHT: &str = "primary-color-light";
    pub const PRIMARY_COLOR_DARK: &str = "primary-color-dark";
    pub const PRIMARY_PALETTE_PREFIX: &str = "color-primary";
    pub const SURFACE_PALETTE_PREFIX: &str = "color-surface";
    pub const FONT_FAMILY: &str = "font-family";
    pub const TYPOGRAPHY_SCALE: &str = "typography-scale";
}

/// Everything visual consumers read, derived purely from a [`ThemeConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct DesignTokens {
    pub primary: Oklch,
    pub primary_variants: ColorVariants,
    pub primary_palette: Palette,
    pub surface: Oklch,
    pub surface_palette: Palette,
    pub font_family: &'static str,
    pub typography_scale: f64,
}

impl DesignTokens {
    pub fn derive(config: &ThemeConfig) -> Self {
        let primary = config.primary_color.color();
        let surface = config.surface_color.color();
        Self {
            primary,
            primary_variants: ColorVariants::from_base(primary),
            primary_palette: Palette::from_base(primary),
            surface,
            surface_palette: Palette::from_base(surface),
            font_family: config.font_family.stack(),
            typography_scale: config.text_size.scale(),
        }
    }

    /// Root element font size in px
    pub fn root_font_size_px(&self) -> f64 {
        self.typography_scale * BASE_FONT_SIZE_PX
    }

    /// Generate the CSS variable map.
    ///
    /// Keys are variable names without the `--` prefix, ordered so the
    /// rendered stylesheet is stable.
    pub fn to_css_variable_map(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();

        vars.insert(names::PRIMARY_COLOR.into(), self.primary.to_css());
        vars.insert(
            names::PRIMARY_COLOR_LIGHT.into(),
            self.primary_variants.light.to_css(),
        );
        vars.insert(
            names::PRIMARY_COLOR_DARK.into(),
            self.primary_variants.dark.to_css(),
        );

        for (shade, color) in self.primary_palette.iter() {
            vars.insert(
                format!("{}-{}", names::PRIMARY_PALETTE_PREFIX, shade),
                color.to_css(),
            );
        }
        for (shade, color) in self.surface_palette.iter() {
            vars.insert(
                format!("{}-{}", names::SURFACE_PALETTE_PREFIX, shade),
                color.to_css(),
            );
        }

        vars.insert(names::FONT_FAMILY.into(), self.font_family.to_string());
        vars.insert(
            names::TYPOGRAPHY_SCALE.into(),
            self.typography_scale.to_string(),
        );

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{PrimaryColor, TextSize};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_variable_map() {
        let tokens = DesignTokens::derive(&ThemeConfig::default());
        let vars = tokens.to_css_variable_map();

        // 3 primary + 2 x 11 palette + font + scale
        assert_eq!(vars.len(), 27);
        assert_eq!(vars["primary-color"], "oklch(63.7% 0.237 25.331)");
        assert_eq!(vars["primary-color-light"], "oklch(73.7% 0.237 25.331)");
        assert_eq!(vars["primary-color-dark"], "oklch(48.7% 0.237 25.331)");
        assert_eq!(vars["color-primary-50"], "oklch(97% 0.0237 25.331)");
        assert_eq!(vars["color-primary-500"], "oklch(63% 0.237 25.331)");
        assert_eq!(vars["color-primary-700"], "oklch(47% 0.22515 25.331)");
        assert_eq!(vars["color-surface-700"], "oklch(47% 0.0152 256.85)");
        assert_eq!(vars["color-surface-950"], "oklch(22% 0.0112 256.85)");
        assert_eq!(vars["font-family"], "\"Inter\", system-ui, sans-serif");
        assert_eq!(vars["typography-scale"], "1");
    }

    #[test]
    fn root_font_size_follows_scale() {
        let config = ThemeConfig {
            text_size: TextSize::Compact,
            ..ThemeConfig::default()
        };
        assert_eq!(DesignTokens::derive(&config).root_font_size_px(), 14.0);
    }

    #[test]
    fn derivation_is_deterministic() {
        for primary in [PrimaryColor::Blue, PrimaryColor::Yellow, PrimaryColor::Rose] {
            let config = ThemeConfig {
                primary_color: primary,
                ..ThemeConfig::default()
            };
            let a = DesignTokens::derive(&config).to_css_variable_map();
            let b = DesignTokens::derive(&config).to_css_variable_map();
            assert_eq!(a, b);
        }
    }
}
