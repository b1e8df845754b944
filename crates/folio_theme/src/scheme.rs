//! Light/dark color scheme preference
//!
//! Kept apart from [`ThemeConfig`](crate::ThemeConfig): it has its own storage
//! key and is not part of the undo history.

use crate::storage::ThemeStorage;
use std::fmt;
use std::str::FromStr;

/// Storage key holding the scheme id
pub const SCHEME_STORAGE_KEY: &str = "theme";

/// Color scheme (light or dark mode)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn id(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Stored preference, or the system preference when nothing valid is stored
    pub fn load(storage: &dyn ThemeStorage, prefers_dark: bool) -> Self {
        match storage.get(SCHEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                tracing::debug!("ignoring stored color scheme {raw:?}");
                Self::from_system(prefers_dark)
            }),
            Ok(None) => Self::from_system(prefers_dark),
            Err(e) => {
                tracing::warn!("could not read color scheme: {e}");
                Self::from_system(prefers_dark)
            }
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(format!("unknown color scheme `{other}`")),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn stored_value_wins_over_system() {
        let storage = MemoryStorage::new();
        storage.set(SCHEME_STORAGE_KEY, "light").unwrap();
        assert_eq!(ColorScheme::load(&storage, true), ColorScheme::Light);
    }

    #[test]
    fn falls_back_to_system() {
        let storage = MemoryStorage::new();
        assert_eq!(ColorScheme::load(&storage, true), ColorScheme::Dark);
        storage.set(SCHEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(ColorScheme::load(&storage, false), ColorScheme::Light);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle().toggle(), ColorScheme::Dark);
    }
}
