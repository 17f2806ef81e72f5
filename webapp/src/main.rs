#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

use view::Overlay;

mod common;

mod components;
use components::{navigation::NavBar, spotlight::SectionSpotlight, tech_detail::TechDetail};

mod coordinator;
use coordinator::use_view_coordinator;

mod home;
use home::Portfolio;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Shell {}
    }
}

// owns the coordinator; the overlays render from its mirrored state, so at
// most one of them is ever mounted
#[component]
fn Shell() -> Element {
    let view = use_view_coordinator();
    let overlay = *view.overlay.read();

    rsx! {
        NavBar {}
        Portfolio {}
        {
            match overlay {
                Overlay::Spotlight(section) => rsx! { SectionSpotlight { section } },
                Overlay::TechDetail(tech) => rsx! { TechDetail { tech } },
                Overlay::Closed | Overlay::MobileMenu => rsx! {},
            }
        }
    }
}
