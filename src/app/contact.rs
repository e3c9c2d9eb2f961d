use leptos::{either::Either, prelude::*};

use crate::content::{anchor, contact, CONTACT_LINKS};
use crate::decoration::CONTACT_BG;

use super::background::BgIcons;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=anchor::CONTACT class="section">
            <BgIcons items=CONTACT_BG class="bgContact" />
            <div class="container reveal narrow">
                <h2 class="h2">{contact::HEADING}</h2>
                <p class="p">
                    {contact::PITCH_LEAD} <b>{contact::PITCH_ROLES}</b> {contact::PITCH_TAIL}
                </p>
                <div class="socials">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            let icon = view! { <i class=link.glyph.class()></i> };
                            if link.external {
                                Either::Left(
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noreferrer"
                                            aria-label=link.label
                                        >
                                            {icon}
                                        </a>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <a href=link.href aria-label=link.label>
                                            {icon}
                                        </a>
                                    },
                                )
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
