// scripted host implementations for the unit tests
use std::collections::HashMap;

use content::Section;

use crate::{
    host::{Chrome, Preferences, Viewport},
    theme::{ActiveTheme, ThemePreference},
};

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    pub stored: Option<ActiveTheme>,
    pub ambient_dark: bool,
    pub failing: bool,
    pub writes: usize,
}

impl MemoryPreferences {
    pub fn new(ambient_dark: bool) -> Self {
        MemoryPreferences {
            ambient_dark,
            ..Default::default()
        }
    }
}

impl Preferences for MemoryPreferences {
    fn load_theme(&self) -> anyhow::Result<ThemePreference> {
        if self.failing {
            return Err(anyhow::Error::msg("storage disabled"));
        }
        Ok(self.stored.map(ThemePreference::from).unwrap_or_default())
    }

    fn store_theme(&mut self, theme: ActiveTheme) -> anyhow::Result<()> {
        if self.failing {
            return Err(anyhow::Error::msg("storage disabled"));
        }
        self.stored = Some(theme);
        self.writes += 1;
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.ambient_dark
    }
}

// a laid-out page with fixed section boundaries
#[derive(Debug, Clone)]
pub struct FixedViewport {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
    pub tops: HashMap<Section, f64>,
    pub scrolls: Vec<(f64, bool)>,
    pub restoration_disabled: bool,
}

impl FixedViewport {
    // the page order is about, projects, skills, experience, contact
    pub fn page() -> Self {
        let tops = HashMap::from([
            (Section::About, 0.0),
            (Section::Projects, 1400.0),
            (Section::Skills, 2200.0),
            (Section::Experience, 2900.0),
            (Section::Contact, 5200.0),
        ]);

        FixedViewport {
            scroll_y: 0.0,
            scroll_height: 6000.0,
            viewport_height: 800.0,
            tops,
            scrolls: Vec::new(),
            restoration_disabled: false,
        }
    }

    pub fn empty() -> Self {
        FixedViewport {
            scroll_y: 0.0,
            scroll_height: 0.0,
            viewport_height: 0.0,
            tops: HashMap::new(),
            scrolls: Vec::new(),
            restoration_disabled: false,
        }
    }
}

impl Viewport for FixedViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn section_top(&self, section: Section) -> Option<f64> {
        self.tops.get(&section).copied()
    }

    // smooth scrolling lands instantly here
    fn scroll_to(&mut self, top: f64, smooth: bool) {
        self.scrolls.push((top, smooth));
        self.scroll_y = top;
    }

    fn disable_scroll_restoration(&mut self) {
        self.restoration_disabled = true;
    }
}

#[derive(Debug, Default)]
pub struct RecordingChrome {
    pub dark: bool,
    pub locked: bool,
    pub lock_writes: usize,
}

impl Chrome for RecordingChrome {
    fn set_dark_class(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.locked = locked;
        self.lock_writes += 1;
    }
}
