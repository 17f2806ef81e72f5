// view state for the portfolio page
//
// nothing in this crate knows about the browser.  the webapp supplies the
// host traits in host.rs and drives the coordinator from dom events, which
// keeps everything here testable on the native target
pub mod config;
pub mod coordinator;
pub mod host;
pub mod overlay;
pub mod scroll;
pub mod theme;

#[cfg(test)]
mod testing;

pub use config::ViewConfig;
pub use coordinator::{PendingJump, ViewCoordinator};
pub use overlay::Overlay;
pub use scroll::{FrameCoalescer, ScrollState, ScrollUpdate};
pub use theme::{ActiveTheme, ThemePreference};
