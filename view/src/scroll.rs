use content::Section;
use tracing::debug;

use crate::{config::ViewConfig, host::Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub active: Section,
    pub progress: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        ScrollState {
            active: Section::About,
            progress: 0.0,
        }
    }
}

// result of one recomputation
//
// section is only Some when the active section actually changed, so the
// view can skip re-rendering the nav bar on every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub section: Option<Section>,
    pub progress: f64,
}

/// The section furthest down the page whose top is at or above `marker`.
///
/// Ties on the same boundary go to the later section in nav order; with no
/// qualifying section the page is still on `about`.
pub fn active_section(marker: f64, tops: impl IntoIterator<Item = (Section, f64)>) -> Section {
    let mut best: Option<(Section, f64)> = None;

    for (section, top) in tops {
        if marker < top {
            continue;
        }

        best = match best {
            Some((prev, prev_top)) if prev_top > top || (prev_top == top && prev > section) => {
                Some((prev, prev_top))
            }
            _ => Some((section, top)),
        };
    }

    best.map(|(section, _)| section).unwrap_or(Section::About)
}

/// Fraction of the scrollable range already scrolled, clamped to [0, 1].
pub fn progress_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;

    // also catches NaN from a page that has not been laid out yet
    if !(total > 0.0) {
        return 0.0;
    }

    let fraction = scroll_y / total;
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

// FrameCoalescer
//
// at most one recomputation may be pending per animation frame.  T is whatever
// handle the host hands back for a scheduled frame (the raf id in the browser).
// further requests while a frame is pending are dropped, not queued
#[derive(Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        FrameCoalescer { pending: None }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule a frame unless one is already pending.  Returns whether
    /// `schedule` was called and produced a handle.
    pub fn request(&mut self, schedule: impl FnOnce() -> Option<T>) -> bool {
        if self.pending.is_some() {
            return false;
        }

        self.pending = schedule();
        self.pending.is_some()
    }

    // the frame fired; the next event may schedule again
    pub fn complete(&mut self) -> Option<T> {
        self.pending.take()
    }

    // teardown: hand back the handle so the host can cancel it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }
}

// ScrollTracker
//
// derives the scroll state from whatever the viewport currently measures
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    state: ScrollState,
    look_ahead: f64,
    nav_offset: f64,
}

impl ScrollTracker {
    pub fn new(config: &ViewConfig) -> Self {
        ScrollTracker {
            state: ScrollState::default(),
            look_ahead: config.look_ahead_px,
            nav_offset: config.nav_offset_px,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn recompute(&mut self, viewport: &impl Viewport) -> ScrollUpdate {
        let scroll_y = viewport.scroll_y();
        let marker = scroll_y + self.look_ahead;

        let tops = Section::all()
            .iter()
            .filter_map(|s| viewport.section_top(*s).map(|top| (*s, top)));
        let active = active_section(marker, tops);

        let progress = progress_fraction(
            scroll_y,
            viewport.scroll_height(),
            viewport.viewport_height(),
        );

        let section = if active != self.state.active {
            debug!(from = %self.state.active, to = %active, "active section changed");
            Some(active)
        } else {
            None
        };

        self.state = ScrollState { active, progress };
        ScrollUpdate { section, progress }
    }

    /// Where the viewport should scroll to put `section` just under the header.
    pub fn target_offset(&self, section: Section, viewport: &impl Viewport) -> Option<f64> {
        viewport
            .section_top(section)
            .map(|top| top - self.nav_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedViewport;
    use proptest::prelude::*;

    fn document_rank(viewport: &FixedViewport, section: Section) -> f64 {
        viewport.section_top(section).unwrap_or(0.0)
    }

    #[test]
    fn defaults_to_about_with_no_sections() {
        assert_eq!(active_section(500.0, std::iter::empty()), Section::About);
    }

    #[test]
    fn look_ahead_marks_section_before_it_reaches_the_top() {
        let mut viewport = FixedViewport::page();
        let mut tracker = ScrollTracker::new(&ViewConfig::default());

        // projects starts at 1400; 1400 - 140 = 1260
        viewport.scroll_y = 1259.0;
        assert_eq!(tracker.recompute(&viewport).section, None);
        assert_eq!(tracker.state().active, Section::About);

        viewport.scroll_y = 1260.0;
        assert_eq!(tracker.recompute(&viewport).section, Some(Section::Projects));
    }

    #[test]
    fn follows_document_order_not_nav_order() {
        let mut viewport = FixedViewport::page();
        let mut tracker = ScrollTracker::new(&ViewConfig::default());

        viewport.scroll_y = 3000.0;
        tracker.recompute(&viewport);
        assert_eq!(tracker.state().active, Section::Experience);
    }

    #[test]
    fn updates_only_emit_on_change() {
        let mut viewport = FixedViewport::page();
        let mut tracker = ScrollTracker::new(&ViewConfig::default());

        viewport.scroll_y = 2200.0;
        let first = tracker.recompute(&viewport);
        assert_eq!(first.section, Some(Section::Skills));

        viewport.scroll_y = 2300.0;
        let second = tracker.recompute(&viewport);
        assert_eq!(second.section, None);
        assert!(second.progress > first.progress);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut viewport = FixedViewport::page();
        viewport.tops.remove(&Section::Experience);
        viewport.scroll_y = 3000.0;

        let mut tracker = ScrollTracker::new(&ViewConfig::default());
        tracker.recompute(&viewport);
        assert_eq!(tracker.state().active, Section::Skills);
        assert_eq!(tracker.target_offset(Section::Experience, &viewport), None);
        assert_eq!(tracker.target_offset(Section::Skills, &viewport), Some(2108.0));
    }

    #[test]
    fn progress_handles_unlaid_page() {
        assert_eq!(progress_fraction(100.0, 0.0, 0.0), 0.0);
        assert_eq!(progress_fraction(100.0, 500.0, 800.0), 0.0);
        assert_eq!(progress_fraction(f64::NAN, 1000.0, 800.0), 0.0);
        assert_eq!(progress_fraction(100.0, 1000.0, 800.0), 0.5);
        assert_eq!(progress_fraction(400.0, 1000.0, 800.0), 1.0);
    }

    #[test]
    fn coalescer_drops_requests_while_pending() {
        let mut frames = FrameCoalescer::new();
        let mut scheduled = 0;

        for _ in 0..5 {
            frames.request(|| {
                scheduled += 1;
                Some(scheduled)
            });
        }
        assert_eq!(scheduled, 1);
        assert_eq!(frames.complete(), Some(1));

        assert!(frames.request(|| Some(7)));
        assert_eq!(frames.cancel(), Some(7));
        assert!(!frames.is_pending());
    }

    #[test]
    fn coalescer_stays_idle_when_host_refuses() {
        let mut frames: FrameCoalescer<i32> = FrameCoalescer::new();
        assert!(!frames.request(|| None));
        assert!(!frames.is_pending());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Scrolling down never moves the active section back up the page.
        #[test]
        fn prop_active_section_is_monotonic(mut offsets in prop::collection::vec(0.0f64..7000.0, 1..40)) {
            offsets.sort_by(|a, b| a.total_cmp(b));

            let mut viewport = FixedViewport::page();
            let mut tracker = ScrollTracker::new(&ViewConfig::default());
            let mut last_rank = f64::MIN;

            for y in offsets {
                viewport.scroll_y = y;
                tracker.recompute(&viewport);
                let rank = document_rank(&viewport, tracker.state().active);
                prop_assert!(rank >= last_rank);
                last_rank = rank;
            }
        }

        #[test]
        fn prop_progress_is_a_fraction(
            y in -1.0e6f64..1.0e6,
            height in -1.0e6f64..1.0e6,
            viewport in -1.0e6f64..1.0e6,
        ) {
            let fraction = progress_fraction(y, height, viewport);
            prop_assert!((0.0..=1.0).contains(&fraction));
            if height - viewport <= 0.0 {
                prop_assert_eq!(fraction, 0.0);
            }
        }
    }
}
