use leptos::prelude::*;

use crate::content::{anchor, hero};
use crate::popup::PopupAction;

use super::anchor_href;

#[component]
pub fn Hero(
    #[prop(into)] show_popup: Signal<bool>,
    on_action: Callback<PopupAction>,
) -> impl IntoView {
    view! {
        <section class="section hero">
            <div class="tech-bg">
                {hero::BACKDROP
                    .iter()
                    .map(|g| view! { <i class=g.class()></i> })
                    .collect_view()}
            </div>

            <Show when=move || show_popup.get()>
                <WelcomePopup on_action />
            </Show>

            <div class="container reveal">
                <h1 class="heroTitle">{hero::TITLE}</h1>
                <p class="subtitle">{hero::SUBTITLE}</p>
                <p class="heroText">{hero::TEXT}</p>
                <div class="heroCtas">
                    <a class="cta primary" href=anchor_href(anchor::PROJECTS)>
                        "View Projects"
                    </a>
                    <a class="cta ghost" href=anchor_href(anchor::SKILLS)>
                        "View Tech Stack"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Side-mounted welcome card. Both controls dismiss it; "connect" also
/// follows its anchor to the contact section.
#[component]
fn WelcomePopup(on_action: Callback<PopupAction>) -> impl IntoView {
    let connect_href = PopupAction::Connect.target().map(anchor_href);
    view! {
        <div class="heroPopup" role="dialog" aria-label="Welcome">
            <h3 class="heroPopupTitle">{hero::POPUP_TITLE}</h3>
            <p class="heroPopupText">{hero::POPUP_TEXT}</p>
            <div class="heroPopupActions">
                <a
                    href=connect_href
                    class="cta primary"
                    aria-label="Yes, navigate to contact section"
                    on:click=move |_| on_action.run(PopupAction::Connect)
                >
                    {hero::POPUP_CONNECT}
                </a>
                <button
                    type="button"
                    class="cta ghost"
                    aria-label="No, close popup"
                    on:click=move |_| on_action.run(PopupAction::Decline)
                >
                    {hero::POPUP_DECLINE}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render(show: bool) -> String {
        Owner::new().with(|| {
            let (show_popup, _) = signal(show);
            let on_action = Callback::new(|_: PopupAction| {});
            view! { <Hero show_popup on_action /> }.to_html()
        })
    }

    #[test]
    fn test_unseen_renders_popup_with_both_controls() {
        let html = render(true);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains(hero::POPUP_CONNECT));
        assert!(html.contains(hero::POPUP_DECLINE));
    }

    #[test]
    fn test_seen_renders_no_popup() {
        let html = render(false);
        assert!(!html.contains("heroPopup"));
        assert!(!html.contains(hero::POPUP_CONNECT));
        // rest of the hero is unaffected
        assert!(html.contains(hero::TITLE));
        assert!(html.contains("href=\"#projects\""));
        assert!(html.contains("href=\"#skills\""));
    }

    #[test]
    fn test_connect_links_to_contact_and_decline_does_not_navigate() {
        let html = render(true);
        let connect = html
            .find("aria-label=\"Yes, navigate to contact section\"")
            .expect("connect control should render");
        let before_connect = &html[..connect];
        let tag_start = before_connect.rfind("<a").expect("connect is an anchor");
        assert!(html[tag_start..connect].contains("href=\"#contact\""));

        let decline = html
            .find("aria-label=\"No, close popup\"")
            .expect("decline control should render");
        let tag_start = html[..decline]
            .rfind("<button")
            .expect("decline is a button");
        assert!(!html[tag_start..decline].contains("href"));
        assert!(html[tag_start..decline].contains("type=\"button\""));
    }
}
