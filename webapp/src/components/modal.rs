use dioxus::prelude::*;

use crate::coordinator::use_view;

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    eyebrow: Option<String>,
    #[props(default)]
    size: ModalSize,
    #[props(default)]
    stacked: bool,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[derive(Clone, Default, PartialEq)]
pub enum ModalSize {
    #[default]
    Medium,
    Large,
}

// both overlays share this frame; the backdrop and the back button close
// whatever is open, and the coordinator releases the scroll lock
#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let view = use_view();

    let width = match props.size {
        ModalSize::Medium => "max-width: 640px;",
        ModalSize::Large => "max-width: 900px;",
    };

    rsx! {
        div {
            class: if props.stacked { "modal-overlay tech" } else { "modal-overlay" },
            role: "dialog",
            aria_modal: "true",
            button {
                class: "modal-backdrop",
                aria_label: "Close",
                onclick: move |_| view.close_all(),
            }
            div {
                class: "modal-content",
                style: "{width}",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    div {
                        if let Some(eyebrow) = &props.eyebrow {
                            p { class: "modal-eyebrow", "{eyebrow}" }
                        }
                        h2 { class: "modal-title", "{props.title}" }
                    }
                    button {
                        class: "btn btn-pill",
                        onclick: move |_| view.close_all(),
                        "Back"
                    }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div { class: "modal-footer", {footer.clone()} }
                }
            }
        }
    }
}
