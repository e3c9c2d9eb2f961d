use leptos::prelude::*;

use crate::decoration::Decoration;

/// Ambient layer of slowly drifting glyphs behind a section's content.
/// Purely decorative: hidden from assistive tech and from the pointer.
#[component]
pub fn BgIcons(
    items: &'static [Decoration],
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let layer_class = if class.is_empty() {
        "bgIcons".to_string()
    } else {
        format!("bgIcons {class}")
    };
    view! {
        <div class=layer_class aria-hidden="true">
            {items
                .iter()
                .map(|d| {
                    view! {
                        <span class=d.class() style=d.style()>
                            <i class=d.glyph.class()></i>
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
