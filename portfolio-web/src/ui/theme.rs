use constants::page::{MOON_ICON_HTML, SUN_ICON_HTML, THEME_STORAGE_KEY};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether `<body>` carries the light-theme class.
    pub fn uses_light_class(self) -> bool {
        self == Self::Light
    }

    /// The toggle shows the theme you would switch to.
    pub fn toggle_icon_html(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON_HTML,
            Self::Dark => SUN_ICON_HTML,
        }
    }
}

/// Key/value persistence for user preferences (browser local storage on the web).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

/// Stored choice wins; otherwise follow the OS colour scheme.
/// Any stored value other than `light` means dark; only an empty or absent
/// value defers to the OS.
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.filter(|v| !v.is_empty()) {
        Some(value) => Theme::parse(value).unwrap_or(Theme::Dark),
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub struct ThemeToggle<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    pub fn new(store: S, prefers_dark: bool) -> Self {
        let stored = store.load(THEME_STORAGE_KEY);
        let current = initial_theme(stored.as_deref(), prefers_dark);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(THEME_STORAGE_KEY, self.current.as_str());
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_dark_without_stored_choice_starts_dark_with_sun() {
        let toggle = ThemeToggle::new(MemoryStore::default(), true);
        assert_eq!(toggle.current(), Theme::Dark);
        assert!(!toggle.current().uses_light_class());
        assert!(toggle.current().toggle_icon_html().contains("fa-sun"));
    }

    #[test]
    fn os_light_without_stored_choice_starts_light_with_moon() {
        let toggle = ThemeToggle::new(MemoryStore::default(), false);
        assert_eq!(toggle.current(), Theme::Light);
        assert!(toggle.current().toggle_icon_html().contains("fa-moon"));
    }

    #[test]
    fn stored_choice_beats_os_preference() {
        let mut store = MemoryStore::default();
        store.save("theme", "light");
        assert_eq!(ThemeToggle::new(store, true).current(), Theme::Light);

        let mut store = MemoryStore::default();
        store.save("theme", "dark");
        assert_eq!(ThemeToggle::new(store, false).current(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_means_dark() {
        assert_eq!(initial_theme(Some("sepia"), false), Theme::Dark);
        assert_eq!(initial_theme(Some("sepia"), true), Theme::Dark);

        let mut store = MemoryStore::default();
        store.save("theme", "Light ");
        assert_eq!(ThemeToggle::new(store, false).current(), Theme::Dark);
    }

    #[test]
    fn empty_stored_value_defers_to_os() {
        assert_eq!(initial_theme(Some(""), false), Theme::Light);
        assert_eq!(initial_theme(Some(""), true), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_class_and_stored_value() {
        let mut store = MemoryStore::default();
        store.save("theme", "dark");
        let mut toggle = ThemeToggle::new(store, false);
        let original = toggle.current();

        assert_eq!(toggle.toggle(), Theme::Light);
        assert_eq!(toggle.store().load("theme").as_deref(), Some("light"));

        assert_eq!(toggle.toggle(), original);
        assert_eq!(
            toggle.current().uses_light_class(),
            original.uses_light_class()
        );
        assert_eq!(toggle.store().load("theme").as_deref(), Some("dark"));
    }
}
