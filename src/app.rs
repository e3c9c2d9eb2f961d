mod about;
mod background;
mod contact;
mod experience;
#[cfg(any(feature = "hydrate", all(test, feature = "ssr")))]
mod flag;
mod hero;
mod homepage;
mod nav;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER;
use crate::popup::{FlagStore, PopupAction, VisibilityGate};

use homepage::HomePage;
use nav::Navbar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

pub(crate) fn anchor_href(anchor: &str) -> String {
    format!("#{anchor}")
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (show_popup, set_show_popup) = signal(false);
    let on_popup_action = popup_controller(set_show_popup);

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Title text="Portfolio" />

        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=path!("/")
                        view=move || view! { <HomePage show_popup on_popup_action /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Owns the popup gate for the page and mirrors its state onto the
/// visibility signal the hero renders from.
///
/// Building it reads the flag once. The signal is left alone until `sync`
/// so the first client render can match the server markup, which never
/// shows the popup.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct PopupController<S: FlagStore + Send + Sync + 'static> {
    gate: StoredValue<VisibilityGate<S>>,
    set_show_popup: WriteSignal<bool>,
}

impl<S: FlagStore + Send + Sync + 'static> Clone for PopupController<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: FlagStore + Send + Sync + 'static> Copy for PopupController<S> {}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl<S: FlagStore + Send + Sync + 'static> PopupController<S> {
    pub fn new(store: S, set_show_popup: WriteSignal<bool>) -> Self {
        Self {
            gate: StoredValue::new(VisibilityGate::initialize(store)),
            set_show_popup,
        }
    }

    /// Pushes the gate's current state to the signal.
    pub fn sync(&self) {
        self.set_show_popup
            .set(self.gate.with_value(|gate| gate.should_show()));
    }

    /// Dismisses for the given control and returns its scroll target.
    pub fn respond(&self, action: PopupAction) -> Option<&'static str> {
        let mut target = None;
        self.gate.update_value(|gate| target = gate.respond(action));
        log::debug!("popup closed via {action:?}, target {target:?}");
        self.sync();
        target
    }

    pub fn callback(self) -> Callback<PopupAction> {
        Callback::new(move |action: PopupAction| {
            self.respond(action);
        })
    }

    #[cfg(test)]
    fn with_store<U>(&self, f: impl FnOnce(&S) -> U) -> U {
        self.gate.with_value(|gate| f(gate.store()))
    }
}

/// Wires the welcome popup to the browser's local storage. The popup
/// appears right after hydration if it was never dismissed on this device.
#[cfg(feature = "hydrate")]
fn popup_controller(set_show_popup: WriteSignal<bool>) -> Callback<PopupAction> {
    use crate::popup::POPUP_FLAG_KEY;
    use flag::LocalStorageFlag;

    let controller = PopupController::new(LocalStorageFlag::new(POPUP_FLAG_KEY), set_show_popup);
    Effect::watch(|| (), move |_, _, _| controller.sync(), true);
    controller.callback()
}

#[cfg(not(feature = "hydrate"))]
fn popup_controller(_set_show_popup: WriteSignal<bool>) -> Callback<PopupAction> {
    // no storage on the server; the browser decides after hydrating
    Callback::new(|_: PopupAction| {})
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::hero::Hero;
    use super::*;
    use crate::popup::{MemoryFlagStore, SEEN};

    fn render_hero(show_popup: ReadSignal<bool>, on_action: Callback<PopupAction>) -> String {
        view! { <Hero show_popup on_action /> }.to_html()
    }

    #[test]
    fn test_connect_persists_flag_and_hides_popup() {
        Owner::new().with(|| {
            let (show_popup, set_show_popup) = signal(false);
            let controller = PopupController::new(MemoryFlagStore::default(), set_show_popup);
            controller.sync();
            assert!(show_popup.get_untracked());
            assert!(render_hero(show_popup, controller.callback()).contains("heroPopup"));

            controller.callback().run(PopupAction::Connect);

            assert!(!show_popup.get_untracked());
            assert_eq!(controller.with_store(|s| s.value.clone()).as_deref(), Some(SEEN));
            assert!(!render_hero(show_popup, controller.callback()).contains("heroPopup"));
        });
    }

    #[test]
    fn test_decline_persists_flag_and_hides_popup() {
        Owner::new().with(|| {
            let (show_popup, set_show_popup) = signal(false);
            let controller = PopupController::new(MemoryFlagStore::default(), set_show_popup);
            controller.sync();
            assert!(render_hero(show_popup, controller.callback()).contains("heroPopup"));

            controller.callback().run(PopupAction::Decline);

            assert!(!show_popup.get_untracked());
            assert_eq!(controller.with_store(|s| s.value.clone()).as_deref(), Some(SEEN));
            assert!(!render_hero(show_popup, controller.callback()).contains("heroPopup"));
        });
    }

    #[test]
    fn test_respond_reports_scroll_target() {
        Owner::new().with(|| {
            let (_, set_show_popup) = signal(false);
            let controller = PopupController::new(MemoryFlagStore::default(), set_show_popup);
            assert_eq!(controller.respond(PopupAction::Connect), Some("contact"));
            assert_eq!(controller.respond(PopupAction::Decline), None);
            // second control after dismissal writes nothing more
            assert_eq!(controller.with_store(|s| s.writes), 1);
        });
    }

    #[test]
    fn test_repeat_visit_never_shows_popup() {
        Owner::new().with(|| {
            let (show_popup, set_show_popup) = signal(true);
            let controller =
                PopupController::new(MemoryFlagStore::with_value(SEEN), set_show_popup);
            controller.sync();
            assert!(!show_popup.get_untracked());
            assert!(!render_hero(show_popup, controller.callback()).contains("heroPopup"));
            assert_eq!(controller.with_store(|s| (s.read_count(), s.writes)), (1, 0));
        });
    }
}
