//! Publication of design tokens into a document style scope

use crate::scheme::ColorScheme;
use crate::tokens::DesignTokens;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Attribute carrying the light/dark scheme on the root element
pub const SCHEME_ATTRIBUTE: &str = "data-theme";

/// A global style scope that visual consumers read from.
///
/// Consumers only ever read what is written here; the store's shell is the
/// single writer.
pub trait StyleScope {
    /// Set a custom property; `name` has no `--` prefix
    fn set_property(&mut self, name: &str, value: &str);

    /// Set the root element's font size in px
    fn set_root_font_size(&mut self, px: f64);

    /// Set an attribute on the root element
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Write every derived token into `scope`
pub fn apply_tokens(tokens: &DesignTokens, scope: &mut dyn StyleScope) {
    let vars = tokens.to_css_variable_map();
    tracing::trace!("publishing {} theme variables", vars.len());
    for (name, value) in &vars {
        scope.set_property(name, value);
    }
    scope.set_root_font_size(tokens.root_font_size_px());
}

/// Write the scheme attribute into `scope`
pub fn apply_scheme(scheme: ColorScheme, scope: &mut dyn StyleScope) {
    scope.set_attribute(SCHEME_ATTRIBUTE, scheme.id());
}

/// In-memory style scope that renders to a `:root` stylesheet
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CssVariables {
    properties: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    root_font_size: Option<f64>,
}

impl CssVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn root_font_size(&self) -> Option<f64> {
        self.root_font_size
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Render as a stylesheet.
    ///
    /// ```text
    /// :root[data-theme="dark"] {
    ///   --primary-color: oklch(63.7% 0.237 25.331);
    ///   font-size: 16px;
    /// }
    /// ```
    pub fn to_stylesheet(&self) -> String {
        let mut selector = String::from(":root");
        for (name, value) in &self.attributes {
            let _ = write!(selector, "[{name}=\"{value}\"]");
        }

        let mut css = format!("{selector} {{\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  --{name}: {value};");
        }
        if let Some(px) = self.root_font_size {
            let _ = writeln!(css, "  font-size: {px}px;");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleScope for CssVariables {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_root_font_size(&mut self, px: f64) {
        self.root_font_size = Some(px);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
