//! Folio Theme Engine
//!
//! Theme customization for the folio portfolio site: a small set of
//! user-chosen values, the design tokens derived from them, a linear
//! undo/redo history and persistence to a key-value store.
//!
//! # Overview
//!
//! - **Presets**: closed catalogs for primary color, surface color, font
//!   family, text size and background renderer
//! - **Derivation**: light/dark variants and eleven-step shade ramps computed
//!   from an OKLCH color
//! - **History**: linear undo/redo; a fresh edit drops the redo tail
//! - **Persistence**: one JSON entry under a fixed key, validated on load
//! - **Broadcast**: synchronous fan-out to subscribers after every change
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{CssVariables, MemoryStorage, PrimaryColor, StoreOptions, ThemeStore};
//!
//! let mut store = ThemeStore::initialize(MemoryStorage::new(), StoreOptions::default());
//! store.set_primary_color(PrimaryColor::Blue);
//!
//! let mut scope = CssVariables::new();
//! store.apply_to(&mut scope);
//! assert_eq!(scope.property("primary-color"), Some("oklch(62.3% 0.214 259.815)"));
//!
//! store.undo();
//! assert_eq!(store.config().primary_color, PrimaryColor::Red);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod presets;
pub mod publish;
pub mod scheme;
pub mod storage;
pub mod store;
pub mod tokens;

// Re-export commonly used types
pub use color::{Oklch, ParseColorError};
pub use config::{ConfigChange, StoredTheme, ThemeConfig, STORAGE_KEY};
pub use error::ThemeError;
pub use events::{ChangeCause, SubscriptionId, ThemeChanged, ThemeEvents, THEME_CHANGE_EVENT};
pub use history::History;
pub use presets::{
    BackgroundType, FontFamily, Preset, PrimaryColor, SurfaceColor, TextSize, UnknownPreset,
};
pub use publish::{apply_scheme, apply_tokens, CssVariables, StyleScope, SCHEME_ATTRIBUTE};
pub use scheme::{ColorScheme, SCHEME_STORAGE_KEY};
pub use storage::{FileStorage, MemoryStorage, StorageError, ThemeStorage};
pub use store::{StoreOptions, ThemeStore};
pub use tokens::*;
