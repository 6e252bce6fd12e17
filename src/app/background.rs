use leptos::prelude::*;

use crate::background::{scatter, svg_markup, OsEntropy, Particle, PARTICLE_COUNT};

use super::PortfolioState;

#[component]
pub fn Background() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let (particles, set_particles) = signal(Vec::<Particle>::new());

    // browser only; the server renders the glow without dots
    Effect::new(move |_| match scatter(PARTICLE_COUNT, &mut OsEntropy) {
        Ok(p) => set_particles.set(p),
        Err(e) => log::warn!("skipping background dots: {e}"),
    });

    view! {
        <div
            class="fixed inset-0 z-0 pointer-events-none"
            aria-hidden="true"
            inner_html=move || particles.with(|p| svg_markup(p, state.theme.get()))
        ></div>
    }
}
