use dioxus::prelude::*;

use content::{
    Section,
    contact::{OWNER_NAME, RESUME_PATH},
};

use crate::coordinator::use_view;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: Section,
}

// nav items open the section's spotlight rather than scrolling; the
// highlight follows whatever the scroll tracker reports
#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let view = use_view();
    let section = props.section;

    let active = *view.active.read() == section;

    rsx! {
        button {
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| view.open_spotlight(section),
            "{section.label()}"
        }
    }
}

#[component]
fn ScrollProgress() -> Element {
    let view = use_view();
    let progress = *view.progress.read();

    rsx! {
        div { class: "scroll-progress",
            div {
                class: "scroll-progress-fill",
                style: "transform: scaleX({progress});",
            }
        }
    }
}

#[component]
fn ThemeToggle(compact: bool) -> Element {
    let view = use_view();
    let dark = view.theme.read().is_dark();

    let label = match (compact, dark) {
        (false, true) => "Light Mode",
        (false, false) => "Dark Mode",
        (true, true) => "Light",
        (true, false) => "Dark",
    };

    rsx! {
        button {
            class: "btn btn-pill",
            aria_label: "Toggle theme",
            onclick: move |_| view.toggle_theme(),
            "{label}"
        }
    }
}

#[component]
fn MobileMenu() -> Element {
    rsx! {
        div { class: "mobile-menu",
            for section in Section::all().iter().copied() {
                NavBarButton { key: "{section}", section }
            }
            a {
                class: "btn btn-primary",
                href: RESUME_PATH,
                download: "",
                "Resume"
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let view = use_view();
    let menu_open = view.overlay.read().is_mobile_menu();

    rsx! {
        ScrollProgress {}
        header { class: "app-header",
            div { class: "nav-container",
                span { class: "brand", "{OWNER_NAME}" }

                nav { class: "nav-links",
                    for section in Section::all().iter().copied() {
                        NavBarButton { key: "{section}", section }
                    }
                    ThemeToggle { compact: false }
                    a {
                        class: "btn btn-primary btn-pill",
                        href: RESUME_PATH,
                        download: "",
                        "Resume"
                    }
                }

                div { class: "nav-mobile-controls",
                    ThemeToggle { compact: true }
                    button {
                        class: "btn btn-pill",
                        aria_label: "Toggle menu",
                        onclick: move |_| view.toggle_mobile_menu(),
                        if menu_open { "Close" } else { "Menu" }
                    }
                }

                if menu_open {
                    MobileMenu {}
                }
            }
        }
    }
}
