use leptos::prelude::*;

use crate::popup::PopupAction;

use super::about::About;
use super::contact::Contact;
use super::experience::Experience;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

/// The whole portfolio, top to bottom.
#[component]
pub fn HomePage(
    #[prop(into)] show_popup: Signal<bool>,
    on_popup_action: Callback<PopupAction>,
) -> impl IntoView {
    view! {
        <Hero show_popup on_action=on_popup_action />
        <About />
        <Skills />
        <Projects />
        <Experience />
        <Contact />
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;
    use crate::content::{CONTACT_LINKS, NAV_LINKS};

    fn render_page() -> String {
        Owner::new().with(|| {
            let (show_popup, _) = signal(false);
            let on_popup_action = Callback::new(|_: PopupAction| {});
            view! { <HomePage show_popup on_popup_action /> }.to_html()
        })
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render_page();
        let hero = html.find("class=\"section hero\"").expect("hero rendered");
        let mut last = hero;
        for link in NAV_LINKS {
            let pos = html
                .find(&format!("id=\"{}\"", link.anchor))
                .unwrap_or_else(|| panic!("section {} should render", link.anchor));
            assert!(pos > last, "{} out of order", link.anchor);
            last = pos;
        }
    }

    #[test]
    fn test_every_section_has_background_layer() {
        let html = render_page();
        for class in ["bgAbout", "bgSkills", "bgProjects", "bgExperience", "bgContact"] {
            assert!(html.contains(&format!("class=\"bgIcons {class}\"")));
        }
    }

    #[test]
    fn test_contact_links() {
        let html = render_page();
        for link in CONTACT_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
            assert!(html.contains(&format!("aria-label=\"{}\"", link.label)));
        }
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }
}
