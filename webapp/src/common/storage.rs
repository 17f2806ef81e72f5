use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use view::{
    host::Preferences,
    theme::{ActiveTheme, ThemePreference},
};

// gloo's LocalStorage throws if the browser has storage disabled (private
// windows, blocked cookies), so every access checks for it first
fn local_storage_available() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .is_some()
}

// values are stored as bare strings, so they go through the raw storage
// handle rather than gloo's json encoding
pub fn set_local_storage(key: &str, value: &str) -> anyhow::Result<()> {
    if !local_storage_available() {
        return Err(anyhow::Error::msg("local storage is unavailable"));
    }

    LocalStorage::raw().set_item(key, value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a missing key is not an error, just an absent value
pub fn get_local_storage(key: &str) -> anyhow::Result<Option<String>> {
    if !local_storage_available() {
        return Err(anyhow::Error::msg("local storage is unavailable"));
    }

    LocalStorage::raw().get_item(key).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// theme persistence and the ambient colour scheme, backed by the browser
pub struct BrowserPreferences {
    key: String,
}

impl BrowserPreferences {
    pub fn new(key: impl Into<String>) -> Self {
        BrowserPreferences { key: key.into() }
    }
}

impl Preferences for BrowserPreferences {
    fn load_theme(&self) -> anyhow::Result<ThemePreference> {
        let stored = get_local_storage(&self.key)?;
        Ok(ThemePreference::parse(stored.as_deref()))
    }

    fn store_theme(&mut self, theme: ActiveTheme) -> anyhow::Result<()> {
        set_local_storage(&self.key, theme.as_str())
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}
