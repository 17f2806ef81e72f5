use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// view configuration
//
// the pixel offsets are tuned against the sticky header height and have
// no deeper meaning; they live here so they can be changed without touching
// the tracker logic
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    // how far below the viewport top a section boundary may sit and still
    // count as the active section
    pub look_ahead_px: f64,

    // scroll targets land this far below the viewport top, clear of the header
    pub nav_offset_px: f64,

    // delay between closing a spotlight and moving the viewport
    pub jump_delay_ms: u32,

    // local storage key holding the theme
    pub storage_key: String,

    // timeline cards collapse to this many bullets
    pub preview_bullets: usize,

    // bullets per employer in the experience spotlight
    pub spotlight_bullets: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            look_ahead_px: 140.0,
            nav_offset_px: 92.0,
            jump_delay_ms: 100,
            storage_key: String::from("theme"),
            preview_bullets: 4,
            spotlight_bullets: 3,
        }
    }
}

// the view table lives under [view] so the same document can carry other
// tables later without colliding
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    view: ViewConfig,
}

impl ViewConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let data: TomlConfigFile = toml::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse view config: {err}")))?;

        if data.view.look_ahead_px < 0.0 || data.view.nav_offset_px < 0.0 {
            return Err(anyhow::Error::msg("view offsets must not be negative"));
        }

        debug!("successfully parsed view config");
        Ok(data.view)
    }
}
