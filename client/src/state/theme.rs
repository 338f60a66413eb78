//! Light/dark theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolved synchronously at startup so the first paint already carries the
//! right marker. Every change, including the initial resolution, first marks
//! the document root and then writes the preference to storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::dark_mode::{DocumentRoot, ThemeSurface};
use crate::util::storage::{KeyValueStore, LocalStorage};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact strings `"light"` and `"dark"` are recognized.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeService<S, R> {
    store: S,
    root: R,
}

impl<S: KeyValueStore, R: ThemeSurface> ThemeService<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self { store, root }
    }

    /// Read the stored preference and apply it.
    pub fn resolve_initial(&self) -> Theme {
        let theme = Theme::parse(self.store.get_item(THEME_KEY).as_deref());
        self.commit(theme);
        theme
    }

    /// Mark the document root, then persist.
    pub fn commit(&self, theme: Theme) {
        self.root.set_dark(theme.is_dark());
        self.store.set_item(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.commit(next);
        next
    }
}

/// Page-lifetime theme context provided at the application root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    service: ThemeService<LocalStorage, DocumentRoot>,
}

impl ThemeContext {
    pub fn new(service: ThemeService<LocalStorage, DocumentRoot>) -> Self {
        let theme = RwSignal::new(service.resolve_initial());
        Self { theme, service }
    }

    /// Flip the theme. The only mutator.
    pub fn toggle_theme(self) {
        let next = self.service.toggle(self.theme.get_untracked());
        self.theme.set(next);
    }
}
