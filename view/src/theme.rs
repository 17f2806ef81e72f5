use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::host::{Chrome, Preferences};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTheme {
    Light,
    Dark,
}

impl ActiveTheme {
    pub fn is_dark(self) -> bool {
        self == ActiveTheme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ActiveTheme::Light => ActiveTheme::Dark,
            ActiveTheme::Dark => ActiveTheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActiveTheme::Light => "light",
            ActiveTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ActiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ActiveTheme::Light),
            "dark" => Ok(ActiveTheme::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other}"))),
        }
    }
}

// what storage said at startup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Unset,
}

impl ThemePreference {
    // anything other than the two known strings reads as unset
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(ActiveTheme::from_str) {
            Some(Ok(theme)) => theme.into(),
            _ => ThemePreference::Unset,
        }
    }

    pub fn resolve(self, prefers_dark: bool) -> ActiveTheme {
        match self {
            ThemePreference::Light => ActiveTheme::Light,
            ThemePreference::Dark => ActiveTheme::Dark,
            ThemePreference::Unset if prefers_dark => ActiveTheme::Dark,
            ThemePreference::Unset => ActiveTheme::Light,
        }
    }
}

impl From<ActiveTheme> for ThemePreference {
    fn from(theme: ActiveTheme) -> Self {
        match theme {
            ActiveTheme::Light => ThemePreference::Light,
            ActiveTheme::Dark => ThemePreference::Dark,
        }
    }
}

// ThemeStore
//
// holds the session theme.  until hydrate() runs, writes only touch memory and
// the root class, so the pre-hydration default can never clobber a stored
// preference that simply has not been read yet
#[derive(Clone, Debug)]
pub struct ThemeStore {
    active: ActiveTheme,
    hydrated: bool,
}

impl Default for ThemeStore {
    fn default() -> Self {
        ThemeStore {
            active: ActiveTheme::Dark,
            hydrated: false,
        }
    }
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ActiveTheme {
        self.active
    }

    /// Stored preference if there is one, otherwise the ambient colour scheme.
    pub fn resolve_initial(prefs: &impl Preferences) -> ActiveTheme {
        let stored = prefs.load_theme().unwrap_or_else(|err| {
            warn!("theme storage unavailable, using ambient preference: {err}");
            ThemePreference::Unset
        });

        let theme = stored.resolve(prefs.prefers_dark());
        debug!(?stored, %theme, "resolved initial theme");
        theme
    }

    pub fn hydrate(
        &mut self,
        theme: ActiveTheme,
        prefs: &mut impl Preferences,
        chrome: &mut impl Chrome,
    ) {
        self.hydrated = true;
        self.set_theme(theme, prefs, chrome);
    }

    pub fn set_theme(
        &mut self,
        theme: ActiveTheme,
        prefs: &mut impl Preferences,
        chrome: &mut impl Chrome,
    ) {
        self.active = theme;
        chrome.set_dark_class(theme.is_dark());

        if self.hydrated {
            if let Err(err) = prefs.store_theme(theme) {
                warn!("failed to persist theme {theme}: {err}");
            }
        }
    }

    pub fn toggle(&mut self, prefs: &mut impl Preferences, chrome: &mut impl Chrome) -> ActiveTheme {
        let next = self.active.toggled();
        self.set_theme(next, prefs, chrome);
        next
    }
}
