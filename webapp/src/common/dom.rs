use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, ScrollBehavior, ScrollRestoration,
    ScrollToOptions, Window,
};

use content::Section;
use tracing::debug;
use view::host::{Chrome, Viewport};

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn root_element() -> Option<Element> {
    document().and_then(|d| d.document_element())
}

// measurements straight off the live document
//
// every query degrades to zero/None when the dom is not there, which the
// tracker already treats as "nothing laid out yet"
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scroll_height(&self) -> f64 {
        root_element().map(|e| e.scroll_height() as f64).unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        root_element().map(|e| e.client_height() as f64).unwrap_or(0.0)
    }

    fn section_top(&self, section: Section) -> Option<f64> {
        let element = document()?.get_element_by_id(section.dom_id())?;
        Some(element.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn scroll_to(&mut self, top: f64, smooth: bool) {
        let Some(window) = window() else { return };

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_left(0.0);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn disable_scroll_restoration(&mut self) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(err) = history.set_scroll_restoration(ScrollRestoration::Manual) {
                debug!("failed to disable scroll restoration: {err:?}");
            }
        }
    }
}

// an empty value hands overflow back to the stylesheet
fn body_overflow(locked: bool) -> &'static str {
    if locked { "hidden" } else { "" }
}

// the root "dark" class and the body overflow lock
pub struct BrowserChrome;

impl Chrome for BrowserChrome {
    fn set_dark_class(&mut self, dark: bool) {
        if let Some(root) = root_element() {
            if let Err(err) = root.class_list().toggle_with_force("dark", dark) {
                debug!(dark, "failed to set theme class: {err:?}");
            }
        }
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        if let Some(body) = document().and_then(|d| d.body()) {
            if let Err(err) = body.style().set_property("overflow", body_overflow(locked)) {
                debug!(locked, "failed to set scroll lock: {err:?}");
            }
        }
    }
}

// DomListener
//
// a window event listener that deregisters itself when dropped, so dropping
// the list of listeners is all the teardown they need
pub struct DomListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn window(
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let window = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(DomListener {
            window,
            event,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            debug!(event = self.event, "failed to remove listener: {err:?}");
        }
    }
}

/// Run `callback` on the next animation frame, returning the frame id.
pub fn request_frame(callback: impl FnOnce() + 'static) -> Option<i32> {
    let callback = Closure::once_into_js(callback);
    window()?
        .request_animation_frame(callback.unchecked_ref())
        .ok()
}

pub fn cancel_frame(id: i32) {
    if let Some(window) = window() {
        if let Err(err) = window.cancel_animation_frame(id) {
            debug!(id, "failed to cancel animation frame: {err:?}");
        }
    }
}

pub fn key_of(event: &Event) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|e| e.key())
}
