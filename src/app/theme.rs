use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{PreferenceStore, Theme, ThemeSettings, THEME_STORAGE_KEY};

/// Browser local storage bound to a single key.
#[derive(Clone, Copy)]
struct LocalStore {
    key: &'static str,
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl LocalStore {
    fn new(key: &'static str) -> Self {
        let (value, set_value, _) = use_local_storage::<String, FromToStringCodec>(key);
        Self {
            key,
            value,
            set_value,
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        if key != self.key {
            return None;
        }
        // an absent key reads back as the codec default
        Some(self.value.get_untracked()).filter(|v| !v.is_empty())
    }

    fn store(&mut self, key: &str, value: &str) {
        if key == self.key {
            self.set_value.set(value.to_string());
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    settings: RwSignal<ThemeSettings>,
    store: LocalStore,
}

impl ThemeContext {
    /// Creates the context, provides it to descendants and resolves the
    /// initial theme once the app is running in the browser.
    pub fn provide() -> Self {
        let ctx = Self {
            settings: RwSignal::new(ThemeSettings::default()),
            store: LocalStore::new(THEME_STORAGE_KEY),
        };
        let prefers_dark = use_preferred_dark();

        Effect::watch(
            || (),
            move |_, _, _| {
                let settings = ThemeSettings::init(&ctx.store, prefers_dark.get_untracked());
                ctx.settings.set(settings);
            },
            true,
        );

        provide_context(ctx);
        ctx
    }

    pub fn theme(&self) -> Theme {
        self.settings.with(ThemeSettings::theme)
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub fn toggle(&self) {
        let mut store = self.store;
        self.settings.update(|s| {
            s.toggle(&mut store);
        });
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
