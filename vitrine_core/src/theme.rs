// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Light/dark theme with a sticky user choice.
//!
//! Until the user toggles, the page follows the system colour-scheme
//! preference, live. The first toggle persists the choice under one storage
//! key; from then on the stored value wins over any system change, on this
//! visit and on every later one.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::config::ThemeConfig;
use crate::element::Element;
use crate::storage::KeyValueStore;
use crate::subscription::{MediaPreference, Subscription};
use crate::trace::{StorageErrorEvent, ThemeEvent, TraceSink, Tracer};

/// A colour theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the stored / attribute form: `"light"` or `"dark"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything but `"light"` or `"dark"` is `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Maps a `prefers-color-scheme: dark` match to a theme.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an applied theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// Read back from storage.
    Stored,
    /// The system colour-scheme preference.
    System,
    /// An explicit user toggle.
    Toggle,
}

/// Owns the current theme, its persistence, and the root element it styles.
#[derive(Debug)]
pub struct ThemeStore<S, E> {
    storage: S,
    root: E,
    config: ThemeConfig,
    current: Theme,
    tracer: Tracer,
}

impl<S: KeyValueStore, E: Element> ThemeStore<S, E> {
    /// Creates a store. Nothing is read or applied until [`init`](Self::init).
    pub fn new(storage: S, root: E, config: ThemeConfig) -> Self {
        Self {
            storage,
            root,
            config,
            current: Theme::default(),
            tracer: Tracer::none(),
        }
    }

    /// Routes this store's events to `sink`.
    pub fn set_trace_sink(&mut self, sink: impl TraceSink + 'static) {
        self.tracer.set_sink(sink);
    }

    /// Applies the stored theme, or the system snapshot if nothing is stored.
    ///
    /// Never writes storage: without a stored value the page keeps
    /// following the system preference.
    pub fn init(&mut self, system_dark: bool) -> Theme {
        match self.stored() {
            Some(theme) => self.apply(theme, ThemeSource::Stored),
            None => self.apply(Theme::from_dark(system_dark), ThemeSource::System),
        }
        self.current
    }

    /// Flips the theme, applies it, and persists it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next, ThemeSource::Toggle);
        if let Err(error) = self.storage.set(self.config.storage_key, next.as_str()) {
            self.tracer.storage_error(&StorageErrorEvent {
                key: self.config.storage_key,
                error: &error,
            });
        }
        next
    }

    /// Follows a system preference change unless the user chose a theme.
    ///
    /// Returns `true` if the change was applied.
    pub fn on_system_change(&mut self, dark: bool) -> bool {
        if self.stored().is_some() {
            return false;
        }
        self.apply(Theme::from_dark(dark), ThemeSource::System);
        true
    }

    /// Returns the theme currently applied.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Returns the persisted choice. Read failures and unknown values count
    /// as "no choice".
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.storage
            .get(self.config.storage_key)
            .ok()
            .flatten()
            .and_then(|value| Theme::from_stored(&value))
    }

    fn apply(&mut self, theme: Theme, source: ThemeSource) {
        self.current = theme;
        self.root
            .set_attribute(self.config.root_attribute, theme.as_str());
        self.tracer.theme_applied(&ThemeEvent { theme, source });
    }
}

/// Feeds system colour-scheme changes into `store` until the returned
/// subscription is dropped.
pub fn watch_system<S, E, P>(store: &Rc<RefCell<ThemeStore<S, E>>>, preference: &P) -> Subscription
where
    S: KeyValueStore + 'static,
    E: Element + 'static,
    P: MediaPreference + ?Sized,
{
    let weak = Rc::downgrade(store);
    preference.subscribe(Box::new(move |dark| {
        if let Some(store) = weak.upgrade() {
            store.borrow_mut().on_system_change(dark);
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::testing::{FailingStore, FakeElement, ManualPreference};

    const KEY: &str = "cenm-theme";

    fn store(storage: MemoryStore) -> (FakeElement, ThemeStore<MemoryStore, FakeElement>) {
        let root = FakeElement::new();
        let store = ThemeStore::new(storage, root.clone(), ThemeConfig::landing());
        (root, store)
    }

    #[test]
    fn parse_and_print() {
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
        assert_eq!(Theme::from_stored("Dark"), None);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(alloc::format!("{}", Theme::Light), "light");
    }

    #[test]
    fn init_without_stored_value_follows_system() {
        let (root, mut themes) = store(MemoryStore::new());
        assert_eq!(themes.init(true), Theme::Dark);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(themes.stored(), None, "init must not persist");
    }

    #[test]
    fn stored_light_beats_dark_system() {
        let (root, mut themes) = store(MemoryStore::with_entry(KEY, "light"));
        assert_eq!(themes.init(true), Theme::Light);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let (_, mut themes) = store(MemoryStore::with_entry(KEY, "sepia"));
        assert_eq!(themes.init(true), Theme::Dark);
        assert!(themes.on_system_change(false));
    }

    #[test]
    fn toggle_persists_and_pins_the_choice() {
        let (root, mut themes) = store(MemoryStore::new());
        themes.init(false);
        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(themes.stored(), Some(Theme::Dark));

        assert!(!themes.on_system_change(false));
        assert_eq!(themes.current(), Theme::Dark);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));

        assert_eq!(themes.toggle(), Theme::Light);
        assert_eq!(themes.stored(), Some(Theme::Light));
    }

    #[test]
    fn system_changes_apply_until_toggled() {
        let (root, mut themes) = store(MemoryStore::new());
        themes.init(false);
        assert!(themes.on_system_change(true));
        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
        assert!(themes.on_system_change(false));
        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
    }

    #[test]
    fn watch_system_stops_after_unsubscribe() {
        let (root, mut themes) = store(MemoryStore::new());
        themes.init(false);
        let themes = Rc::new(RefCell::new(themes));
        let preference = ManualPreference::new(false);

        let sub = watch_system(&themes, &preference);
        preference.set(true);
        assert_eq!(themes.borrow().current(), Theme::Dark);

        sub.unsubscribe();
        assert_eq!(preference.listener_count(), 0);
        preference.set(false);
        assert_eq!(themes.borrow().current(), Theme::Dark);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn broken_storage_still_toggles() {
        let root = FakeElement::new();
        let mut themes = ThemeStore::new(FailingStore, root.clone(), ThemeConfig::landing());
        assert_eq!(themes.init(true), Theme::Dark);
        assert_eq!(themes.toggle(), Theme::Light);
        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
        assert!(themes.on_system_change(true), "nothing was persisted");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn failed_write_is_traced() {
        use crate::testing::EventLog;

        let log = EventLog::new();
        let mut themes = ThemeStore::new(FailingStore, FakeElement::new(), ThemeConfig::landing());
        themes.set_trace_sink(log.clone());
        themes.init(false);
        themes.toggle();

        let sources: alloc::vec::Vec<_> = log.themes().iter().map(|e| e.source).collect();
        assert_eq!(sources, [ThemeSource::System, ThemeSource::Toggle]);
        let errors = log.storage_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, KEY);
    }

    #[test]
    fn watch_system_respects_toggle() {
        let (_, mut themes) = store(MemoryStore::new());
        themes.init(false);
        let themes = Rc::new(RefCell::new(themes));
        let preference = ManualPreference::new(false);
        let _sub = watch_system(&themes, &preference);

        themes.borrow_mut().toggle();
        preference.set(false);
        assert_eq!(themes.borrow().current(), Theme::Dark);
    }
}
