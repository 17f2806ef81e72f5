use dioxus::prelude::*;

use content::{
    TechRecord,
    contact::{ContactKind, ContactLink},
};

use crate::coordinator::use_view;

#[derive(Clone, PartialEq, Props)]
pub struct TechTileProps {
    tech: &'static TechRecord,
}

#[component]
pub fn TechTile(props: TechTileProps) -> Element {
    let view = use_view();
    let tech = props.tech;
    let tint = tech.tint("1A");

    rsx! {
        button {
            class: "tech-tile",
            title: "{tech.label}",
            onclick: move |_| view.open_tech_detail(tech),
            span {
                class: "tech-monogram",
                style: "color: {tech.color}; background-color: {tint};",
                "{tech.monogram()}"
            }
            span { class: "stat-subtext", "{tech.label}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactTileProps {
    link: &'static ContactLink,
}

// plain outbound links; profile sites open in a new tab
#[component]
pub fn ContactTile(props: ContactTileProps) -> Element {
    let link = props.link;

    let badge = match link.kind {
        ContactKind::Phone => "Call",
        ContactKind::Email => "Write",
        ContactKind::LinkedIn | ContactKind::GitHub => "Visit",
    };

    rsx! {
        a {
            class: "tile link-tile",
            href: link.href,
            target: if link.is_external() { "_blank" } else { "_self" },
            rel: if link.is_external() { "noopener noreferrer" } else { "" },
            div {
                p { class: "stat-subtext", "{link.caption}" }
                p { class: "stat-label", "{link.label}" }
            }
            span { class: "tag", "{badge}" }
        }
    }
}
