use content::Section;

use crate::theme::{ActiveTheme, ThemePreference};

// host capabilities
//
// the view state never touches the browser directly.  the webapp implements
// these against web_sys/gloo, and the tests implement them against fixed
// values so layouts and storage failures can be scripted

// persisted and ambient theme inputs
pub trait Preferences {
    /// Read the stored preference; a missing key is `ThemePreference::Unset`.
    fn load_theme(&self) -> anyhow::Result<ThemePreference>;

    fn store_theme(&mut self, theme: ActiveTheme) -> anyhow::Result<()>;

    // prefers-color-scheme: dark
    fn prefers_dark(&self) -> bool;
}

// measurement provider plus the one scrolling primitive we need
//
// all positions are document-relative css pixels
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    fn scroll_height(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Top boundary of the section, or None if it is not in the document.
    fn section_top(&self, section: Section) -> Option<f64>;

    fn scroll_to(&mut self, top: f64, smooth: bool);

    // stop the browser from restoring the previous scroll offset on reload
    fn disable_scroll_restoration(&mut self);
}

// the two pieces of global presentation state
pub trait Chrome {
    fn set_dark_class(&mut self, dark: bool);

    fn set_scroll_lock(&mut self, locked: bool);
}
