//! The theme store
//!
//! Single source of truth for the user's visual preferences. Every mutation
//! runs to completion before returning: update the configuration, record it
//! in history, re-derive tokens, persist, then notify subscribers.
//!
//! The store is an explicit object built once by the application shell and
//! passed by reference; publishing into a style scope is a separate call
//! ([`ThemeStore::apply_to`]) so derivation stays free of side effects.

use crate::config::{ConfigChange, ThemeConfig, STORAGE_KEY};
use crate::error::ThemeError;
use crate::events::{ChangeCause, SubscriptionId, ThemeChanged, ThemeEvents};
use crate::history::History;
use crate::presets::*;
use crate::publish::{apply_scheme, apply_tokens, StyleScope};
use crate::scheme::{ColorScheme, SCHEME_STORAGE_KEY};
use crate::storage::ThemeStorage;
use crate::tokens::DesignTokens;
use tracing::{debug, warn};

/// Start-up options for [`ThemeStore::initialize`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Maximum undo entries kept; unlimited when `None`
    pub history_limit: Option<usize>,
    /// Host preference used when no scheme is stored
    pub prefers_dark: bool,
}

pub struct ThemeStore {
    storage: Box<dyn ThemeStorage>,
    /// Cleared after the first failed write; the store then runs in memory only
    persistent: bool,
    config: ThemeConfig,
    tokens: DesignTokens,
    history: History<ThemeConfig>,
    scheme: ColorScheme,
    events: ThemeEvents,
}

impl ThemeStore {
    /// Build the store from persisted state.
    ///
    /// A stored configuration that fails validation is deleted and the
    /// defaults are used instead. History starts with a single entry.
    pub fn initialize(storage: impl ThemeStorage + 'static, options: StoreOptions) -> Self {
        let mut persistent = true;
        let config = match storage.get(STORAGE_KEY) {
            Ok(Some(json)) => match ThemeConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    warn!("discarding stored theme: {e}");
                    if let Err(e) = storage.remove(STORAGE_KEY) {
                        warn!("could not remove stored theme: {e}");
                    }
                    ThemeConfig::default()
                }
            },
            Ok(None) => ThemeConfig::default(),
            Err(e) => {
                warn!("theme storage unavailable, running in memory: {e}");
                persistent = false;
                ThemeConfig::default()
            }
        };
        let scheme = ColorScheme::load(&storage, options.prefers_dark);

        debug!(
            "ThemeStore::initialize - {:?}, scheme {}",
            config, scheme
        );

        Self {
            storage: Box::new(storage),
            persistent,
            config,
            tokens: DesignTokens::derive(&config),
            history: History::new(config).with_limit(options.history_limit),
            scheme,
            events: ThemeEvents::new(),
        }
    }

    // ========== Read access ==========

    /// The active configuration
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Tokens derived from the active configuration
    pub fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }

    pub fn history(&self) -> &History<ThemeConfig> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Whether changes are still being written to storage
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    // ========== Mutations ==========

    /// Returns false when the color is already active
    pub fn set_primary_color(&mut self, color: PrimaryColor) -> bool {
        self.update(ConfigChange::PrimaryColor(color))
    }

    /// Parse an id, display name or `oklch(...)` swatch value
    pub fn set_primary_color_str(&mut self, raw: &str) -> Result<bool, ThemeError> {
        Ok(self.set_primary_color(raw.parse()?))
    }

    pub fn set_surface_color(&mut self, color: SurfaceColor) -> bool {
        self.update(ConfigChange::SurfaceColor(color))
    }

    pub fn set_surface_color_str(&mut self, raw: &str) -> Result<bool, ThemeError> {
        Ok(self.set_surface_color(raw.parse()?))
    }

    pub fn set_font_family(&mut self, font: FontFamily) -> bool {
        self.update(ConfigChange::FontFamily(font))
    }

    pub fn set_font_family_str(&mut self, raw: &str) -> Result<bool, ThemeError> {
        Ok(self.set_font_family(raw.parse()?))
    }

    pub fn set_text_size(&mut self, size: TextSize) -> bool {
        self.update(ConfigChange::TextSize(size))
    }

    /// Only the preset scales are accepted
    pub fn set_text_size_value(&mut self, scale: f64) -> Result<bool, ThemeError> {
        let size =
            TextSize::from_scale(scale).ok_or_else(|| TextSize::unknown(&scale.to_string()))?;
        Ok(self.set_text_size(size))
    }

    pub fn set_background_type(&mut self, background: BackgroundType) -> bool {
        self.update(ConfigChange::BackgroundType(background))
    }

    pub fn set_background_type_str(&mut self, raw: &str) -> Result<bool, ThemeError> {
        Ok(self.set_background_type(raw.parse()?))
    }

    /// Apply any single-field change
    pub fn apply_change(&mut self, change: ConfigChange) -> bool {
        self.update(change)
    }

    /// Step back one history entry. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().copied() else {
            return false;
        };
        self.commit(snapshot, ChangeCause::Undo);
        true
    }

    /// Step forward one history entry. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().copied() else {
            return false;
        };
        self.commit(snapshot, ChangeCause::Redo);
        true
    }

    /// Forget stored state and history and return to the defaults
    pub fn reset(&mut self) {
        debug!("ThemeStore::reset");
        if let Err(e) = self.storage.remove(STORAGE_KEY) {
            warn!("could not clear stored theme: {e}");
        }
        let config = ThemeConfig::default();
        self.history.reset(config);
        self.config = config;
        self.tokens = DesignTokens::derive(&config);
        self.broadcast(ChangeCause::Reset);
    }

    // ========== Color scheme ==========

    /// Returns false when `scheme` is already active
    pub fn set_scheme(&mut self, scheme: ColorScheme) -> bool {
        if self.scheme == scheme {
            return false;
        }
        debug!(
            "ThemeStore::set_scheme - switching from {} to {}",
            self.scheme, scheme
        );
        self.scheme = scheme;
        self.write(SCHEME_STORAGE_KEY, scheme.id());
        self.broadcast(ChangeCause::Scheme);
        true
    }

    pub fn toggle_scheme(&mut self) {
        self.set_scheme(self.scheme.toggle());
    }

    // ========== Publication ==========

    /// Write the current tokens and scheme into `scope`
    pub fn apply_to(&self, scope: &mut dyn StyleScope) {
        apply_tokens(&self.tokens, scope);
        apply_scheme(self.scheme, scope);
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&ThemeChanged) + Send + Sync + 'static,
    {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // ========== Internals ==========

    fn update(&mut self, change: ConfigChange) -> bool {
        let next = self.config.with(change);
        if next == self.config {
            debug!("ThemeStore: {} unchanged, skipping", change.field());
            return false;
        }
        debug!("ThemeStore: {} -> {:?}", change.field(), change);
        self.history.record(next);
        self.commit(next, ChangeCause::Set(change));
        true
    }

    fn commit(&mut self, config: ThemeConfig, cause: ChangeCause) {
        let background_only =
            matches!(cause, ChangeCause::Set(change) if change.is_background_only());
        self.config = config;
        if !background_only {
            self.tokens = DesignTokens::derive(&config);
        }
        match config.to_json() {
            Ok(json) => self.write(STORAGE_KEY, &json),
            Err(e) => warn!("could not serialize theme: {e}"),
        }
        self.broadcast(cause);
    }

    fn write(&mut self, key: &str, value: &str) {
        if !self.persistent {
            return;
        }
        if let Err(e) = self.storage.set(key, value) {
            warn!("theme storage unavailable, continuing in memory: {e}");
            self.persistent = false;
        }
    }

    fn broadcast(&self, cause: ChangeCause) {
        if self.events.is_empty() {
            return;
        }
        self.events.emit(&ThemeChanged {
            config: self.config,
            tokens: self.tokens.clone(),
            scheme: self.scheme,
            cause,
        });
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("config", &self.config)
            .field("scheme", &self.scheme)
            .field("cursor", &self.history.cursor())
            .field("history_len", &self.history.len())
            .field("persistent", &self.persistent)
            .field("events", &self.events)
            .finish()
    }
}
