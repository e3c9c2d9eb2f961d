use leptos::prelude::*;

use crate::content::{anchor, SkillGroup, SKILL_GROUPS};
use crate::decoration::SKILLS_BG;

use super::background::BgIcons;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=anchor::SKILLS class="section sectionSkills">
            <BgIcons items=SKILLS_BG class="bgSkills" />
            <div class="container reveal">
                <h2 class="h2 h2Big">"Tech Stack"</h2>
                <div class="skillsGrid">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| view! { <SkillCard group=*group /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="skillsCard">
            <div class="skillsHead">
                <h3 class="skillsTitle">{group.title}</h3>
                <div class="skillsIcons">
                    {group
                        .glyphs
                        .iter()
                        .map(|g| view! { <i class=g.class()></i> })
                        .collect_view()}
                </div>
            </div>
            <div class="skillsPills">
                {group
                    .items
                    .iter()
                    .map(|item| view! { <span class="skillsPill">{*item}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
