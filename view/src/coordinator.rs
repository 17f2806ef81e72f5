use content::{Section, TechRecord, highlight::HighlightRecord};
use tracing::{Level, debug, info, instrument};

use crate::{
    config::ViewConfig,
    host::{Chrome, Preferences, Viewport},
    overlay::{Overlay, OverlayManager},
    scroll::{ScrollState, ScrollTracker, ScrollUpdate},
    theme::{ActiveTheme, ThemeStore},
};

// a scroll the spotlight asked for once its closing transition has played
//
// the host owns the timer; when it fires it hands this back through
// complete_jump().  dropping it is the same as cancelling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct PendingJump {
    pub target: Section,
    pub delay_ms: u32,
}

// ViewCoordinator
//
// the single owner of the page's transient state.  components never mutate
// theme or overlay state themselves; they call in here, and the host
// capabilities it was built with carry the side effects out to the page
pub struct ViewCoordinator<P, V, C> {
    config: ViewConfig,
    prefs: P,
    viewport: V,
    chrome: C,
    theme: ThemeStore,
    scroll: ScrollTracker,
    overlays: OverlayManager,
}

impl<P: Preferences, V: Viewport, C: Chrome> ViewCoordinator<P, V, C> {
    pub fn new(config: ViewConfig, prefs: P, viewport: V, chrome: C) -> Self {
        let scroll = ScrollTracker::new(&config);
        ViewCoordinator {
            config,
            prefs,
            viewport,
            chrome,
            theme: ThemeStore::new(),
            scroll,
            overlays: OverlayManager::new(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn theme(&self) -> ActiveTheme {
        self.theme.active()
    }

    pub fn overlay(&self) -> Overlay {
        self.overlays.state()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    /// First-load setup.  Returns the theme the page should hydrate to; the
    /// caller applies it with `hydrate_theme` on the next frame.
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn mount(&mut self) -> ActiveTheme {
        self.viewport.disable_scroll_restoration();
        self.viewport.scroll_to(0.0, false);

        // class for the pre-hydration default, so the first paint is themed
        self.chrome.set_dark_class(self.theme.active().is_dark());
        self.scroll.recompute(&self.viewport);

        ThemeStore::resolve_initial(&self.prefs)
    }

    pub fn hydrate_theme(&mut self, theme: ActiveTheme) {
        info!(%theme, "theme hydrated");
        self.theme
            .hydrate(theme, &mut self.prefs, &mut self.chrome);
    }

    pub fn set_theme(&mut self, theme: ActiveTheme) {
        self.theme
            .set_theme(theme, &mut self.prefs, &mut self.chrome);
    }

    pub fn toggle_theme(&mut self) -> ActiveTheme {
        self.theme.toggle(&mut self.prefs, &mut self.chrome)
    }

    // called from the coalesced animation frame, never straight from the event
    pub fn on_scroll_frame(&mut self) -> ScrollUpdate {
        self.scroll.recompute(&self.viewport)
    }

    /// Smooth-scroll so `section` sits under the header.  The mobile menu is
    /// closed either way; returns false if the section is not on the page.
    pub fn scroll_to_section(&mut self, section: Section) -> bool {
        let target = self.scroll.target_offset(section, &self.viewport);
        self.overlays.close_mobile_menu(&mut self.chrome);

        match target {
            Some(top) => {
                debug!(%section, top, "scrolling to section");
                self.viewport.scroll_to(top, true);
                true
            }
            None => {
                debug!(%section, "section not in document, skipping scroll");
                false
            }
        }
    }

    pub fn open_spotlight(&mut self, section: Section) {
        self.overlays.open_spotlight(section, &mut self.chrome);
    }

    pub fn open_tech_detail(&mut self, tech: &'static TechRecord) {
        self.overlays.open_tech_detail(tech, &mut self.chrome);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.overlays.toggle_mobile_menu(&mut self.chrome);
    }

    pub fn close_all(&mut self) {
        self.overlays.close_all(&mut self.chrome);
    }

    pub fn view_experience_from_tech(&mut self) {
        self.overlays.view_experience_from_tech(&mut self.chrome);
    }

    /// Keyboard handling; returns whether the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }

        self.close_all();
        true
    }

    pub fn jump_from_spotlight(&mut self, target: Section) -> PendingJump {
        self.overlays.close_spotlight(&mut self.chrome);
        PendingJump {
            target,
            delay_ms: self.config.jump_delay_ms,
        }
    }

    pub fn complete_jump(&mut self, jump: PendingJump) -> bool {
        self.scroll_to_section(jump.target)
    }

    // highlight cards scroll straight away; from inside the spotlight they
    // close it first
    pub fn follow_highlight(&mut self, highlight: &HighlightRecord) -> bool {
        self.overlays.close_spotlight(&mut self.chrome);
        self.scroll_to_section(highlight.target)
    }

    /// Put the page's global presentation state back to its defaults.
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn teardown(&mut self) {
        self.overlays.release(&mut self.chrome);
        self.chrome.set_dark_class(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedViewport, MemoryPreferences, RecordingChrome};
    use content::{highlight::HIGHLIGHTS, tech::TECH_STACK};

    type TestCoordinator = ViewCoordinator<MemoryPreferences, FixedViewport, RecordingChrome>;

    fn coordinator(prefs: MemoryPreferences) -> TestCoordinator {
        ViewCoordinator::new(
            ViewConfig::default(),
            prefs,
            FixedViewport::page(),
            RecordingChrome::default(),
        )
    }

    // a host timer: the jump only runs once its delay has been waited out
    struct Clock {
        now: u32,
        pending: Option<(u32, PendingJump)>,
    }

    impl Clock {
        fn schedule(&mut self, jump: PendingJump) {
            self.pending = Some((self.now + jump.delay_ms, jump));
        }

        fn advance(&mut self, ms: u32, view: &mut TestCoordinator) {
            self.now += ms;
            if let Some((due, jump)) = self.pending {
                if due <= self.now {
                    self.pending = None;
                    view.complete_jump(jump);
                }
            }
        }
    }

    #[test]
    fn mount_resets_scroll_and_resolves_theme() {
        let mut view = coordinator(MemoryPreferences::new(true));
        view.viewport.scroll_y = 2400.0;

        let theme = view.mount();

        assert!(view.viewport().restoration_disabled);
        assert_eq!(view.viewport().scroll_y, 0.0);
        assert_eq!(view.viewport().scrolls, vec![(0.0, false)]);
        assert_eq!(theme, ActiveTheme::Dark);
        // nothing persisted until hydration
        assert_eq!(view.prefs().writes, 0);

        view.hydrate_theme(theme);
        assert_eq!(view.prefs().stored, Some(ActiveTheme::Dark));
        assert!(view.chrome().dark);
    }

    #[test]
    fn spotlight_then_tech_detail() {
        let mut view = coordinator(MemoryPreferences::new(false));

        view.open_spotlight(Section::Skills);
        view.open_tech_detail(&TECH_STACK[1]);

        assert_eq!(view.overlay().spotlight(), None);
        assert_eq!(view.overlay().tech(), Some(&TECH_STACK[1]));
    }

    #[test]
    fn jump_waits_for_delay_then_scrolls() {
        let mut view = coordinator(MemoryPreferences::new(false));
        let mut clock = Clock { now: 0, pending: None };

        view.open_spotlight(Section::Projects);
        assert!(view.chrome().locked);

        let jump = view.jump_from_spotlight(Section::Experience);
        assert_eq!(view.overlay(), Overlay::Closed);
        assert!(!view.chrome().locked);
        clock.schedule(jump);

        clock.advance(99, &mut view);
        assert!(view.viewport().scrolls.is_empty());

        clock.advance(1, &mut view);
        assert_eq!(view.overlay(), Overlay::Closed);
        assert_eq!(view.viewport().scrolls, vec![(2900.0 - 92.0, true)]);
        assert_eq!(view.viewport().scroll_y, 2808.0);
    }

    #[test]
    fn escape_closes_menu_and_releases_lock() {
        let mut view = coordinator(MemoryPreferences::new(false));

        view.toggle_mobile_menu();
        assert!(view.chrome().locked);

        assert!(!view.on_key("Enter"));
        assert!(view.overlay().is_mobile_menu());

        assert!(view.on_key("Escape"));
        assert_eq!(view.overlay(), Overlay::Closed);
        assert!(!view.chrome().locked);
    }

    #[test]
    fn menu_item_swaps_menu_for_spotlight() {
        let mut view = coordinator(MemoryPreferences::new(false));

        view.toggle_mobile_menu();
        view.open_spotlight(Section::Skills);

        assert_eq!(view.overlay(), Overlay::Spotlight(Section::Skills));
        assert!(!view.overlay().is_mobile_menu());
        assert!(view.chrome().locked);
        assert_eq!(view.chrome().lock_writes, 1);
        assert!(view.viewport().scrolls.is_empty());
    }

    #[test]
    fn scroll_to_missing_section_still_closes_menu() {
        let mut view = ViewCoordinator::new(
            ViewConfig::default(),
            MemoryPreferences::new(false),
            FixedViewport::empty(),
            RecordingChrome::default(),
        );

        view.toggle_mobile_menu();
        assert!(!view.scroll_to_section(Section::Contact));
        assert_eq!(view.overlay(), Overlay::Closed);
        assert!(view.viewport().scrolls.is_empty());
    }

    #[test]
    fn scroll_to_section_leaves_spotlight_alone() {
        let mut view = coordinator(MemoryPreferences::new(false));

        view.open_spotlight(Section::About);
        assert!(view.scroll_to_section(Section::Contact));
        assert_eq!(view.overlay(), Overlay::Spotlight(Section::About));
    }

    #[test]
    fn highlight_from_spotlight_closes_and_scrolls() {
        let mut view = coordinator(MemoryPreferences::new(false));

        view.open_spotlight(Section::Projects);
        let kubernetes = &HIGHLIGHTS[2];
        assert!(view.follow_highlight(kubernetes));

        assert_eq!(view.overlay(), Overlay::Closed);
        assert_eq!(view.viewport().scroll_y, 2200.0 - 92.0);
    }

    #[test]
    fn scroll_frames_track_active_section() {
        let mut view = coordinator(MemoryPreferences::new(false));
        view.mount();

        view.viewport.scroll_y = 5100.0;
        let update = view.on_scroll_frame();
        assert_eq!(update.section, Some(Section::Contact));
        assert_eq!(view.scroll_state().active, Section::Contact);
        assert!((update.progress - 5100.0 / 5200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn teardown_restores_presentation_defaults() {
        let mut view = coordinator(MemoryPreferences::new(true));
        let theme = view.mount();
        view.hydrate_theme(theme);
        view.open_spotlight(Section::Contact);

        view.teardown();

        assert!(!view.chrome().locked);
        assert!(!view.chrome().dark);
        assert_eq!(view.overlay(), Overlay::Closed);
        // the stored preference survives teardown
        assert_eq!(view.prefs().stored, Some(ActiveTheme::Dark));
    }

    #[test]
    fn custom_offsets_are_honoured() {
        let config = ViewConfig {
            nav_offset_px: 0.0,
            jump_delay_ms: 250,
            ..ViewConfig::default()
        };
        let mut view = ViewCoordinator::new(
            config,
            MemoryPreferences::new(false),
            FixedViewport::page(),
            RecordingChrome::default(),
        );

        view.open_spotlight(Section::About);
        let jump = view.jump_from_spotlight(Section::Skills);
        assert_eq!(jump.delay_ms, 250);
        view.complete_jump(jump);
        assert_eq!(view.viewport().scroll_y, 2200.0);
    }
}
