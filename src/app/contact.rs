use leptos::{either::Either, prelude::*};

use crate::content::{ContactLink, CONTACT_LINKS};

use super::components::{Card, SectionHeading};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section aria-labelledby="contact-section" class="fade-in" style="animation-delay: 0.6s">
            <SectionHeading id="contact-section" text="Contact" />
            <Card>
                <div class="p-6 flex justify-center space-x-4">
                    {CONTACT_LINKS.iter().map(|link| view! { <ContactIcon link /> }).collect_view()}
                </div>
            </Card>
        </section>
    }
}

#[component]
fn ContactIcon(link: &'static ContactLink) -> impl IntoView {
    let icon = if link.icon.starts_with("devicon-") {
        Either::Left(view! { <i class=link.icon></i> })
    } else {
        Either::Right(view! { <span>{link.icon}</span> })
    };
    let (target, rel) = if link.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=link.href
            target=target
            rel=rel
            aria-label=link.label
            class="inline-flex h-10 w-10 items-center justify-center rounded-md border border-gray-500 text-lg transition-transform duration-200 hover:scale-110 active:scale-90 hover:bg-secondary"
        >
            {icon}
        </a>
    }
}
