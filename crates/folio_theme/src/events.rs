//! Theme change broadcast
//!
//! One writer (the store), any number of readers. Handlers run synchronously
//! in registration order after every change.

use crate::config::{ConfigChange, ThemeConfig};
use crate::scheme::ColorScheme;
use crate::tokens::DesignTokens;
use slotmap::{new_key_type, SlotMap};

/// Name of the broadcast, as seen by out-of-tree listeners
pub const THEME_CHANGE_EVENT: &str = "themechange";

new_key_type! {
    /// Handle returned by [`ThemeEvents::subscribe`]
    pub struct SubscriptionId;
}

/// What caused a change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeCause {
    Set(ConfigChange),
    Undo,
    Redo,
    Reset,
    Scheme,
}

/// Payload delivered to subscribers
#[derive(Clone, Debug)]
pub struct ThemeChanged {
    pub config: ThemeConfig,
    pub tokens: DesignTokens,
    pub scheme: ColorScheme,
    pub cause: ChangeCause,
}

/// Theme change handler function type
pub type ThemeHandler = Box<dyn Fn(&ThemeChanged) + Send + Sync>;

/// Subscriber list for [`ThemeChanged`]
pub struct ThemeEvents {
    handlers: SlotMap<SubscriptionId, ThemeHandler>,
    order: Vec<SubscriptionId>,
}

impl ThemeEvents {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a handler
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&ThemeChanged) + Send + Sync + 'static,
    {
        let id = self.handlers.insert(Box::new(handler));
        self.order.push(id);
        id
    }

    /// Remove a handler. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.order.retain(|other| *other != id);
        self.handlers.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver `event` to every handler
    pub fn emit(&self, event: &ThemeChanged) {
        tracing::trace!(
            "{THEME_CHANGE_EVENT}: {:?} -> {} subscriber(s)",
            event.cause,
            self.handlers.len()
        );
        for id in &self.order {
            if let Some(handler) = self.handlers.get(*id) {
                handler(event);
            }
        }
    }
}

impl Default for ThemeEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEvents")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn event() -> ThemeChanged {
        let config = ThemeConfig::default();
        ThemeChanged {
            config,
            tokens: DesignTokens::derive(&config),
            scheme: ColorScheme::Light,
            cause: ChangeCause::Reset,
        }
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut events = ThemeEvents::new();

        let first = log.clone();
        events.subscribe(move |_| first.lock().unwrap().push("first"));
        let second = log.clone();
        events.subscribe(move |_| second.lock().unwrap().push("second"));

        events.emit(&event());
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_handler_is_not_called() {
        let count = Arc::new(Mutex::new(0));
        let mut events = ThemeEvents::new();

        let counter = count.clone();
        let id = events.subscribe(move |_| *counter.lock().unwrap() += 1);
        events.emit(&event());
        assert!(events.unsubscribe(id));
        assert!(!events.unsubscribe(id));
        events.emit(&event());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(events.is_empty());
    }
}
