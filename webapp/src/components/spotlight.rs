use dioxus::prelude::*;

use content::{
    Section,
    contact::{CONTACT_LINKS, OWNER_TITLE},
    experience::EXPERIENCE,
    highlight::HIGHLIGHTS,
    stat::STATS,
    tech::TECH_STACK,
};

use crate::{
    components::{
        modal::{ModalSize, ModernModal},
        tiles::{ContactTile, TechTile},
    },
    coordinator::use_view,
};

#[derive(Clone, PartialEq, Props)]
pub struct SpotlightProps {
    section: Section,
}

#[component]
pub fn SectionSpotlight(props: SpotlightProps) -> Element {
    let view = use_view();
    let section = props.section;

    rsx! {
        ModernModal {
            title: section.spotlight_heading().to_owned(),
            eyebrow: "Section Spotlight".to_owned(),
            size: ModalSize::Large,
            footer: rsx! {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| view.jump_from_spotlight(section),
                    "Open Section"
                }
            },
            {
                match section {
                    Section::About => rsx! { AboutSpotlight {} },
                    Section::Skills => rsx! { SkillsSpotlight {} },
                    Section::Experience => rsx! { ExperienceSpotlight {} },
                    Section::Projects => rsx! { ProjectsSpotlight {} },
                    Section::Contact => rsx! { ContactSpotlight {} },
                }
            }
        }
    }
}

#[component]
fn AboutSpotlight() -> Element {
    rsx! {
        p { class: "section-lead", "{OWNER_TITLE}" }
        div { class: "tile-grid",
            for stat in STATS.iter() {
                div { key: "{stat.label}", class: "tile",
                    p { class: "stat-value", "{stat.display()}" }
                    p { class: "stat-label", "{stat.label}" }
                    p { class: "stat-subtext", "{stat.subtext}" }
                }
            }
        }
    }
}

// picking a tool here swaps the spotlight for its detail view
#[component]
fn SkillsSpotlight() -> Element {
    rsx! {
        div { class: "tile-grid",
            for tech in TECH_STACK.iter() {
                TechTile { key: "{tech.label}", tech }
            }
        }
    }
}

#[component]
fn ExperienceSpotlight() -> Element {
    let view = use_view();
    let shown = view.config().spotlight_bullets;

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: var(--space-4);",
            for record in EXPERIENCE.iter() {
                div { key: "{record.company}", class: "tile",
                    p { class: "stat-label", "{record.role}" }
                    p { class: "stat-subtext", "{record.company} | {record.period}" }
                    ul { class: "bullet-list",
                        for bullet in record.visible_bullets(shown, false).iter() {
                            li { key: "{bullet}", "{bullet}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectsSpotlight() -> Element {
    let view = use_view();

    rsx! {
        div { class: "highlight-grid",
            for highlight in HIGHLIGHTS.iter() {
                button {
                    key: "{highlight.title}",
                    class: "highlight-card",
                    onclick: move |_| view.follow_highlight(highlight),
                    p { class: "stat-label", "{highlight.title}" }
                    p { class: "stat-subtext", "{highlight.context}" }
                    p { class: "highlight-impact", "{highlight.impact}" }
                }
            }
        }
    }
}

#[component]
fn ContactSpotlight() -> Element {
    rsx! {
        div { class: "contact-grid",
            for link in CONTACT_LINKS.iter() {
                ContactTile { key: "{link.href}", link }
            }
        }
    }
}
