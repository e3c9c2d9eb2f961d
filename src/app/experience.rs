use leptos::prelude::*;

use crate::content::{anchor, Job, JOBS};
use crate::decoration::EXPERIENCE_BG;

use super::background::BgIcons;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=anchor::EXPERIENCE class="section">
            <BgIcons items=EXPERIENCE_BG class="bgExperience" />
            <div class="container reveal">
                <h2 class="h2">"Experience"</h2>
                <div class="grid">
                    {JOBS.iter().map(|job| view! { <JobCard job=*job /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn JobCard(job: Job) -> impl IntoView {
    view! {
        <div class="glassCard lift">
            <h3 class="cardTitle">{job.heading()}</h3>
            <p class="meta">{job.meta()}</p>
            <ul class="bullets">
                {job.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
            </ul>
            <div class="toolsSection">
                <h4 class="toolsTitle">"Tools & Technologies"</h4>
                <div class="toolsGrid">
                    {job
                        .tools
                        .iter()
                        .map(|tool| {
                            view! {
                                <div class="toolBox">
                                    <i class=tool.glyph.class()></i>
                                    <span>{tool.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
