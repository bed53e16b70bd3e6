use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str);
}

impl PreferenceStore for HashMap<String, String> {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// The active theme, owned by the app and handed to views explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSettings {
    theme: Theme,
}

impl ThemeSettings {
    /// A persisted choice wins over the environment's preference.
    pub fn init(store: &impl PreferenceStore, prefers_dark: bool) -> Self {
        let theme = match store.load(THEME_STORAGE_KEY) {
            Some(saved) => saved.parse().unwrap_or_else(|err: UnknownTheme| {
                warn!("ignoring persisted theme: {err}");
                Theme::from_preference(prefers_dark)
            }),
            None => Theme::from_preference(prefers_dark),
        };
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        store.store(THEME_STORAGE_KEY, self.theme.as_str());
        self.theme
    }
}
