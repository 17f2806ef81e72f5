use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};

use content::{Section, TechRecord, highlight::HighlightRecord};
use view::{ActiveTheme, FrameCoalescer, Overlay, PendingJump, ViewConfig, ViewCoordinator};

use crate::common::{
    dom::{self, BrowserChrome, BrowserViewport, DomListener},
    storage::BrowserPreferences,
};

pub type BrowserCoordinator = ViewCoordinator<BrowserPreferences, BrowserViewport, BrowserChrome>;

const VIEW_CONFIG: &str = include_str!("../view.toml");

pub fn load_config() -> ViewConfig {
    ViewConfig::from_toml(VIEW_CONFIG).unwrap_or_else(|err| {
        warn!("falling back to default view config: {err}");
        ViewConfig::default()
    })
}

// ViewHandle
//
// the coordinator itself sits in a signal that nothing subscribes to; it is
// only ever peeked or written.  the four public signals mirror the pieces the
// components render, and are only set when their value changes, so a scroll
// frame that does not move the active section only re-renders the progress bar
#[derive(Clone, Copy)]
pub struct ViewHandle {
    core: Signal<BrowserCoordinator>,
    pub overlay: Signal<Overlay>,
    pub theme: Signal<ActiveTheme>,
    pub active: Signal<Section>,
    pub progress: Signal<f64>,
    frames: Signal<FrameCoalescer<i32>>,
    hydration: Signal<Option<i32>>,
    jump: Signal<Option<Timeout>>,
    listeners: Signal<Vec<DomListener>>,
}

impl ViewHandle {
    pub fn config(&self) -> ViewConfig {
        self.core.peek().config().clone()
    }

    pub fn open_spotlight(mut self, section: Section) {
        self.core.write().open_spotlight(section);
        self.sync();
    }

    pub fn open_tech_detail(mut self, tech: &'static TechRecord) {
        self.core.write().open_tech_detail(tech);
        self.sync();
    }

    pub fn toggle_mobile_menu(mut self) {
        self.core.write().toggle_mobile_menu();
        self.sync();
    }

    pub fn close_all(mut self) {
        self.core.write().close_all();
        self.sync();
    }

    pub fn view_experience_from_tech(mut self) {
        self.core.write().view_experience_from_tech();
        self.sync();
    }

    pub fn toggle_theme(mut self) {
        self.core.write().toggle_theme();
        self.sync();
    }

    pub fn scroll_to_section(mut self, section: Section) {
        self.core.write().scroll_to_section(section);
        self.sync();
    }

    pub fn follow_highlight(mut self, highlight: &HighlightRecord) {
        self.core.write().follow_highlight(highlight);
        self.sync();
    }

    // close the spotlight now, scroll once its exit has played out.  a newer
    // jump replaces (and so cancels) an older one
    pub fn jump_from_spotlight(mut self, target: Section) {
        let jump = self.core.write().jump_from_spotlight(target);
        self.sync();

        let handle = self;
        let timeout = Timeout::new(jump.delay_ms, move || handle.complete_jump(jump));
        self.jump.set(Some(timeout));
    }

    // the fired timeout stays in its slot until the next jump or teardown
    // replaces it, since it cannot be dropped from inside its own callback
    fn complete_jump(mut self, jump: PendingJump) {
        self.core.write().complete_jump(jump);
        self.sync();
    }

    fn sync(mut self) {
        let (overlay, theme) = {
            let core = self.core.peek();
            (core.overlay(), core.theme())
        };

        if *self.overlay.peek() != overlay {
            self.overlay.set(overlay);
        }
        if *self.theme.peek() != theme {
            self.theme.set(theme);
        }
    }

    // scroll and resize land here; only the first event before a frame
    // schedules anything
    fn on_scroll_event(mut self) {
        let handle = self;
        self.frames
            .write()
            .request(|| dom::request_frame(move || handle.on_frame()));
    }

    fn on_frame(mut self) {
        self.frames.write().complete();

        let update = self.core.write().on_scroll_frame();
        if let Some(section) = update.section {
            self.active.set(section);
        }
        if *self.progress.peek() != update.progress {
            self.progress.set(update.progress);
        }
    }

    fn on_key(mut self, key: &str) {
        if self.core.write().on_key(key) {
            self.sync();
        }
    }

    fn mount(mut self) {
        let theme = self.core.write().mount();
        self.on_frame();

        // theme resolution is applied on the next frame, independently of the
        // scroll reset above
        let handle = self;
        let frame = dom::request_frame(move || handle.hydrate(theme));
        self.hydration.set(frame);

        let mut listeners = Vec::new();
        listeners.extend(DomListener::window("scroll", true, move |_| {
            handle.on_scroll_event()
        }));
        listeners.extend(DomListener::window("resize", false, move |_| {
            handle.on_scroll_event()
        }));
        listeners.extend(DomListener::window("keydown", false, move |event| {
            if let Some(key) = dom::key_of(&event) {
                handle.on_key(&key);
            }
        }));

        if listeners.len() < 3 {
            warn!("only {} of 3 window listeners registered", listeners.len());
        }
        self.listeners.set(listeners);
        debug!("view mounted");
    }

    fn hydrate(mut self, theme: ActiveTheme) {
        self.hydration.set(None);
        self.core.write().hydrate_theme(theme);
        self.sync();
    }

    // listeners deregister on drop, the frame ids are cancelled by hand, and
    // dropping the timeout cancels it
    fn teardown(mut self) {
        self.listeners.write().clear();

        if let Some(id) = self.frames.write().cancel() {
            dom::cancel_frame(id);
        }
        if let Some(id) = self.hydration.write().take() {
            dom::cancel_frame(id);
        }
        self.jump.write().take();

        self.core.write().teardown();
        debug!("view torn down");
    }
}

/// Build the coordinator for this page, wire it to the window, and provide
/// the handle to every component below.
pub fn use_view_coordinator() -> ViewHandle {
    let config = use_hook(load_config);

    let core = use_signal(move || {
        let prefs = BrowserPreferences::new(config.storage_key.clone());
        ViewCoordinator::new(config, prefs, BrowserViewport, BrowserChrome)
    });

    let handle = ViewHandle {
        core,
        overlay: use_signal(Overlay::default),
        theme: use_signal(move || core.peek().theme()),
        active: use_signal(|| Section::About),
        progress: use_signal(|| 0.0),
        frames: use_signal(FrameCoalescer::new),
        hydration: use_signal(|| None),
        jump: use_signal(|| None),
        listeners: use_signal(Vec::new),
    };

    // after the first render, so the sections exist to be measured
    use_effect(move || handle.mount());
    use_drop(move || handle.teardown());

    use_context_provider(|| handle)
}

pub fn use_view() -> ViewHandle {
    use_context::<ViewHandle>()
}
