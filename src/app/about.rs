use leptos::prelude::*;

use crate::content::{anchor, ABOUT_PARAGRAPHS};
use crate::decoration::ABOUT_BG;

use super::background::BgIcons;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=anchor::ABOUT class="section">
            <BgIcons items=ABOUT_BG class="bgAbout" />
            <div class="container reveal narrow">
                <h2 class="h2">"About Me"</h2>
                {ABOUT_PARAGRAPHS
                    .iter()
                    .map(|text| view! { <p class="p">{*text}</p> })
                    .collect_view()}
            </div>
        </section>
    }
}
