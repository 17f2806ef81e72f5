use std::collections::HashSet;

use dioxus::prelude::*;

use content::{
    Section,
    contact::{CONTACT_LINKS, OWNER_NAME, OWNER_TITLE, PROFILE_IMAGE_PATH, RESUME_PATH},
    experience::{EXPERIENCE, ExperienceRecord},
    highlight::HIGHLIGHTS,
    stat::STATS,
    tech::TECH_STACK,
};

use crate::{
    components::tiles::{ContactTile, TechTile},
    coordinator::use_view,
};

// the single page; every section carries the dom id the scroll tracker
// measures, laid out in document order rather than nav order
#[component]
pub fn Portfolio() -> Element {
    let view = use_view();

    rsx! {
        main { class: "page",
            // Hero section
            section { id: Section::About.dom_id(),
                div { class: "hero",
                    div {
                        p { class: "modal-eyebrow", "{OWNER_TITLE}" }
                        h1 { class: "hero-title", "Hi, I'm {OWNER_NAME}" }
                        p { class: "hero-subtitle",
                            "I build and run the platforms other engineers ship on: Kubernetes fleets, "
                            "delivery pipelines and the observability that keeps them honest."
                        }
                        div { class: "hero-actions",
                            a {
                                class: "btn btn-primary btn-lg",
                                href: RESUME_PATH,
                                download: "",
                                "Download Resume"
                            }
                            button {
                                class: "btn btn-outline btn-lg",
                                onclick: move |_| view.open_spotlight(Section::Projects),
                                "View Highlights"
                            }
                        }
                    }
                    div { class: "hero-portrait",
                        img { src: PROFILE_IMAGE_PATH, alt: "{OWNER_NAME}" }
                    }
                }
            }

            // Stats section
            section {
                div { class: "stats-grid",
                    for stat in STATS.iter() {
                        div { key: "{stat.label}", class: "stat-card",
                            h3 { class: "stat-value", "{stat.display()}" }
                            p { class: "stat-label", "{stat.label}" }
                            p { class: "stat-subtext", "{stat.subtext}" }
                        }
                    }
                }
            }

            // Highlights section
            section { id: Section::Projects.dom_id(),
                h2 { class: "section-heading", "Highlights" }
                p { class: "section-lead", "Outcomes worth a closer look. Pick one to see where it happened." }
                div { class: "highlight-grid",
                    for highlight in HIGHLIGHTS.iter() {
                        button {
                            key: "{highlight.title}",
                            class: "highlight-card",
                            onclick: move |_| view.follow_highlight(highlight),
                            h3 { class: "stat-label", "{highlight.title}" }
                            p { class: "stat-subtext", "{highlight.context}" }
                            p { class: "highlight-impact", "{highlight.impact}" }
                        }
                    }
                }
            }

            // Tech stack section
            section { id: Section::Skills.dom_id(),
                h2 { class: "section-heading", "Tech Stack" }
                p { class: "section-lead", "Tools I use daily. Select one for what it delivered." }
                div { class: "tile-grid",
                    for tech in TECH_STACK.iter() {
                        TechTile { key: "{tech.label}", tech }
                    }
                }
            }

            // Experience section
            section { id: Section::Experience.dom_id(),
                h2 { class: "section-heading", "Experience" }
                Timeline {}
            }

            // Contact section
            section { id: Section::Contact.dom_id(),
                h2 { class: "section-heading", "Get In Touch" }
                p { class: "section-lead", "Open to platform, SRE and DevOps roles." }
                div { class: "contact-grid",
                    for link in CONTACT_LINKS.iter() {
                        ContactTile { key: "{link.href}", link }
                    }
                    a {
                        class: "tile link-tile resume-tile",
                        href: RESUME_PATH,
                        download: "",
                        div {
                            p { class: "stat-subtext", style: "color: inherit;", "Resume" }
                            p { class: "stat-label", "Download PDF" }
                        }
                    }
                }
            }
        }
    }
}

// expansion is local to the page and keyed by company
#[component]
fn Timeline() -> Element {
    let expanded = use_signal(HashSet::<&'static str>::new);

    rsx! {
        div { class: "timeline",
            for (index, record) in EXPERIENCE.iter().enumerate() {
                TimelineCard {
                    key: "{record.company}",
                    record,
                    right: index % 2 == 1,
                    expanded,
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TimelineCardProps {
    record: &'static ExperienceRecord,
    right: bool,
    expanded: Signal<HashSet<&'static str>>,
}

#[component]
fn TimelineCard(props: TimelineCardProps) -> Element {
    let view = use_view();
    let preview = view.config().preview_bullets;

    let record = props.record;
    let mut expanded = props.expanded;
    let is_expanded = expanded.read().contains(record.company);

    let toggle = move |_| {
        let mut expanded = expanded.write();
        if !expanded.remove(record.company) {
            expanded.insert(record.company);
        }
    };

    rsx! {
        article { class: if props.right { "timeline-card right" } else { "timeline-card left" },
            div { class: "timeline-bar" }
            h3 { class: "stat-label", "{record.role}" }
            p { class: "stat-subtext",
                "{record.company} | {record.period}"
                if let Some(location) = record.location {
                    " | {location}"
                }
            }
            p { style: "margin-top: var(--space-3);", "{record.summary}" }

            div { class: "metric-grid",
                for metric in record.metrics.iter() {
                    div { key: "{metric.label}", class: "tile",
                        p { class: "stat-value", style: "font-size: 1.25rem;", "{metric.value}" }
                        p { class: "stat-subtext", "{metric.label}" }
                    }
                }
            }

            div { class: "tag-list",
                for highlight in record.highlights.iter() {
                    span { key: "{highlight}", class: "tag", "{highlight}" }
                }
            }

            ul { class: "bullet-list",
                for bullet in record.visible_bullets(preview, is_expanded).iter() {
                    li { key: "{bullet}", "{bullet}" }
                }
            }

            if record.is_collapsible(preview) {
                button { class: "expand-toggle", onclick: toggle,
                    if is_expanded { "Show less" } else { "Show more achievements" }
                }
            }
        }
    }
}
