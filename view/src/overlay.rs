use content::{Section, TechRecord};
use tracing::debug;

use crate::host::Chrome;

// Overlay
//
// every modal surface on the page.  there is exactly one value at a time,
// which is what keeps the spotlight, the tech detail and the mobile menu
// mutually exclusive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Spotlight(Section),
    TechDetail(&'static TechRecord),
    MobileMenu,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::Closed)
    }

    pub fn spotlight(&self) -> Option<Section> {
        match self {
            Overlay::Spotlight(section) => Some(*section),
            _ => None,
        }
    }

    pub fn tech(&self) -> Option<&'static TechRecord> {
        match self {
            Overlay::TechDetail(tech) => Some(tech),
            _ => None,
        }
    }

    pub fn is_mobile_menu(&self) -> bool {
        matches!(self, Overlay::MobileMenu)
    }
}

// OverlayManager
//
// owns the overlay and the body scroll lock that goes with it.  the lock is
// derived from "is anything open" and only written to the chrome when that
// answer changes
#[derive(Clone, Debug, Default)]
pub struct OverlayManager {
    state: Overlay,
    locked: bool,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Overlay {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn open_spotlight(&mut self, section: Section, chrome: &mut impl Chrome) {
        self.transition(Overlay::Spotlight(section), chrome);
    }

    pub fn open_tech_detail(&mut self, tech: &'static TechRecord, chrome: &mut impl Chrome) {
        self.transition(Overlay::TechDetail(tech), chrome);
    }

    pub fn toggle_mobile_menu(&mut self, chrome: &mut impl Chrome) {
        let next = if self.state.is_mobile_menu() {
            Overlay::Closed
        } else {
            Overlay::MobileMenu
        };
        self.transition(next, chrome);
    }

    // no-op unless the menu is the open overlay
    pub fn close_mobile_menu(&mut self, chrome: &mut impl Chrome) {
        if self.state.is_mobile_menu() {
            self.transition(Overlay::Closed, chrome);
        }
    }

    /// Close the spotlight if it is open, returning the section it showed.
    pub fn close_spotlight(&mut self, chrome: &mut impl Chrome) -> Option<Section> {
        let section = self.state.spotlight()?;
        self.transition(Overlay::Closed, chrome);
        Some(section)
    }

    // the "view experience" button on a tech detail
    pub fn view_experience_from_tech(&mut self, chrome: &mut impl Chrome) {
        if self.state.tech().is_some() {
            self.transition(Overlay::Spotlight(Section::Experience), chrome);
        }
    }

    pub fn close_all(&mut self, chrome: &mut impl Chrome) {
        self.transition(Overlay::Closed, chrome);
    }

    // teardown: close and unconditionally clear the lock, in case something
    // outside of us touched it
    pub fn release(&mut self, chrome: &mut impl Chrome) {
        self.state = Overlay::Closed;
        self.locked = false;
        chrome.set_scroll_lock(false);
    }

    fn transition(&mut self, next: Overlay, chrome: &mut impl Chrome) {
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "overlay transition");
        }
        self.state = next;

        let want = self.state.is_open();
        if want != self.locked {
            chrome.set_scroll_lock(want);
            self.locked = want;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingChrome;
    use content::tech::TECH_STACK;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Spotlight(Section),
        Tech(usize),
        ToggleMenu,
        CloseMenu,
        CloseSpotlight,
        ViewExperience,
        CloseAll,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            prop::sample::select(Section::all().to_vec()).prop_map(Op::Spotlight),
            (0..TECH_STACK.len()).prop_map(Op::Tech),
            Just(Op::ToggleMenu),
            Just(Op::CloseMenu),
            Just(Op::CloseSpotlight),
            Just(Op::ViewExperience),
            Just(Op::CloseAll),
        ]
    }

    #[test]
    fn tech_detail_replaces_spotlight() {
        let mut chrome = RecordingChrome::default();
        let mut overlays = OverlayManager::new();

        overlays.open_spotlight(Section::Skills, &mut chrome);
        overlays.open_tech_detail(&TECH_STACK[0], &mut chrome);

        assert_eq!(overlays.state().spotlight(), None);
        assert_eq!(overlays.state().tech(), Some(&TECH_STACK[0]));
        assert!(chrome.locked);
        // still just the one lock write
        assert_eq!(chrome.lock_writes, 1);
    }

    #[test]
    fn spotlight_closes_mobile_menu() {
        let mut chrome = RecordingChrome::default();
        let mut overlays = OverlayManager::new();

        overlays.toggle_mobile_menu(&mut chrome);
        assert!(overlays.state().is_mobile_menu());

        overlays.open_spotlight(Section::About, &mut chrome);
        assert!(!overlays.state().is_mobile_menu());
        assert_eq!(overlays.state().spotlight(), Some(Section::About));
    }

    #[test]
    fn toggle_menu_round_trip_releases_lock() {
        let mut chrome = RecordingChrome::default();
        let mut overlays = OverlayManager::new();

        overlays.toggle_mobile_menu(&mut chrome);
        assert!(chrome.locked);
        overlays.toggle_mobile_menu(&mut chrome);
        assert!(!chrome.locked);
        assert_eq!(overlays.state(), Overlay::Closed);
    }

    #[test]
    fn view_experience_only_from_tech_detail() {
        let mut chrome = RecordingChrome::default();
        let mut overlays = OverlayManager::new();

        overlays.view_experience_from_tech(&mut chrome);
        assert_eq!(overlays.state(), Overlay::Closed);

        overlays.open_tech_detail(&TECH_STACK[3], &mut chrome);
        overlays.view_experience_from_tech(&mut chrome);
        assert_eq!(overlays.state(), Overlay::Spotlight(Section::Experience));
    }

    #[test]
    fn close_spotlight_reports_section() {
        let mut chrome = RecordingChrome::default();
        let mut overlays = OverlayManager::new();

        assert_eq!(overlays.close_spotlight(&mut chrome), None);
        overlays.open_spotlight(Section::Contact, &mut chrome);
        assert_eq!(overlays.close_spotlight(&mut chrome), Some(Section::Contact));
        assert!(!chrome.locked);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The scroll lock always mirrors whether any overlay is open, and the
        /// latest open call decides which overlay that is.
        #[test]
        fn prop_single_overlay_and_consistent_lock(ops in prop::collection::vec(op_strategy(), 1..60)) {
            let mut chrome = RecordingChrome::default();
            let mut overlays = OverlayManager::new();

            for op in ops {
                let before = overlays.state();
                match op {
                    Op::Spotlight(section) => {
                        overlays.open_spotlight(section, &mut chrome);
                        prop_assert_eq!(overlays.state(), Overlay::Spotlight(section));
                    }
                    Op::Tech(idx) => {
                        overlays.open_tech_detail(&TECH_STACK[idx], &mut chrome);
                        prop_assert_eq!(overlays.state(), Overlay::TechDetail(&TECH_STACK[idx]));
                    }
                    Op::ToggleMenu => {
                        overlays.toggle_mobile_menu(&mut chrome);
                        prop_assert_eq!(overlays.state().is_mobile_menu(), !before.is_mobile_menu());
                    }
                    Op::CloseMenu => overlays.close_mobile_menu(&mut chrome),
                    Op::CloseSpotlight => {
                        overlays.close_spotlight(&mut chrome);
                    }
                    Op::ViewExperience => overlays.view_experience_from_tech(&mut chrome),
                    Op::CloseAll => {
                        overlays.close_all(&mut chrome);
                        prop_assert_eq!(overlays.state(), Overlay::Closed);
                    }
                }

                let state = overlays.state();
                let open = [
                    state.spotlight().is_some(),
                    state.tech().is_some(),
                    state.is_mobile_menu(),
                ];
                prop_assert!(open.iter().filter(|o| **o).count() <= 1);
                prop_assert_eq!(chrome.locked, state.is_open());
                prop_assert_eq!(overlays.is_locked(), state.is_open());
            }

            overlays.release(&mut chrome);
            prop_assert!(!chrome.locked);
        }
    }
}
