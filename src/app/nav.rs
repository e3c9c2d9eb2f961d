use leptos::prelude::*;

use crate::content::NAV_LINKS;

use super::anchor_href;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            {NAV_LINKS
                .iter()
                .map(|link| view! { <a href=anchor_href(link.anchor)>{link.label}</a> })
                .collect_view()}
        </nav>
    }
}
