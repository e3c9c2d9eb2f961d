use leptos::prelude::*;

use crate::content::{anchor, Project, PROJECTS};
use crate::decoration::PROJECTS_BG;

use super::background::BgIcons;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=anchor::PROJECTS class="section">
            <BgIcons items=PROJECTS_BG class="bgProjects" />
            <div class="container reveal">
                <h2 class="h2">"Projects"</h2>
                <div class="stacked">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="glassCard lift accent">
            <h3 class="cardTitle">{project.title}</h3>
            <ul class="bullets">
                {project.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
            </ul>
            <div class="pillWrap compact">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="pill">{*tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
