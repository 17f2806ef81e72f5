use dioxus::prelude::*;

use content::TechRecord;

use crate::{
    components::modal::{ModalSize, ModernModal},
    coordinator::use_view,
};

#[derive(Clone, PartialEq, Props)]
pub struct TechDetailProps {
    tech: &'static TechRecord,
}

#[component]
pub fn TechDetail(props: TechDetailProps) -> Element {
    let view = use_view();
    let tech = props.tech;
    let tint = tech.tint("22");

    rsx! {
        ModernModal {
            title: tech.label.to_owned(),
            eyebrow: "Achievements".to_owned(),
            size: ModalSize::Medium,
            stacked: true,
            footer: rsx! {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| view.view_experience_from_tech(),
                    "View Experience"
                }
            },
            div { style: "display: flex; align-items: center; gap: var(--space-3); margin-bottom: var(--space-4);",
                span {
                    class: "tech-monogram",
                    style: "color: {tech.color}; background-color: {tint};",
                    "{tech.monogram()}"
                }
                p { class: "stat-subtext", "Key outcomes delivered with {tech.label}" }
            }
            ul { class: "bullet-list",
                for achievement in tech.achievements.iter() {
                    li { key: "{achievement}", "{achievement}" }
                }
            }
        }
    }
}
