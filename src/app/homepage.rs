use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{TechStackEntry, PROFILE, TECH_STACK};

use super::avatar::Avatar;
use super::components::{Card, SectionHeading};
use super::PortfolioState;

#[component]
pub fn HomePanel() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div id="home-panel" class="panel-enter space-y-8">
            <header class="text-center drop-in">
                <Avatar />
                <h1 class="text-4xl font-bold mb-2 text-primary">{PROFILE.name}</h1>
                <p class="text-xl text-secondary-foreground">{PROFILE.headline}</p>
            </header>

            <section aria-labelledby="about-section" class="fade-in" style="animation-delay: 0.2s">
                <SectionHeading id="about-section" text="About Me" />
                <Card>
                    <div class="p-6">
                        <p class="text-secondary-foreground">{PROFILE.about}</p>
                    </div>
                </Card>
            </section>

            <section aria-labelledby="tech-stack-section" class="fade-in" style="animation-delay: 0.3s">
                <SectionHeading id="tech-stack-section" text="Tech Stack" />
                <Card>
                    <div class="p-6 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4">
                        {TECH_STACK.iter().map(|tech| view! { <TechTile tech /> }).collect_view()}
                    </div>
                </Card>
            </section>
        </div>
    }
}

#[component]
fn TechTile(tech: &'static TechStackEntry) -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let name = tech.name;
    view! {
        <div
            class="relative transition-transform duration-200 hover:scale-105"
            on:mouseenter=move |_| state.hover_tech(name)
            on:mouseleave=move |_| state.leave_tech(name)
        >
            <div class="flex flex-col items-center justify-center p-4 rounded-lg bg-secondary hover:bg-secondary/80 transition-all duration-300">
                <span class="text-4xl mb-2">{tech.icon}</span>
                <span class="text-center">{name}</span>
            </div>
            <Show when=move || state.hovered_tech.get().is_shown(name)>
                <div
                    role="tooltip"
                    class="tooltip-enter absolute top-full left-0 right-0 mt-2 p-2 bg-popover rounded-md shadow-lg z-10"
                >
                    <p class="text-sm text-popover-foreground">{tech.description}</p>
                </div>
            </Show>
        </div>
    }
}
