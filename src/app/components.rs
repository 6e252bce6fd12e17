use leptos::prelude::*;

const STAGGER_SECS: f32 = 0.2;

/// Inline style delaying a list item's entrance by its position.
pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f32 * STAGGER_SECS)
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-lg border border-gray-700/40 bg-white/80 dark:bg-gray-800/80 shadow-sm {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn CardHeader(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col space-y-1.5 p-6">
            <h3 class="text-2xl font-semibold leading-none tracking-tight text-primary">{title}</h3>
            <div class="text-sm text-secondary-foreground">{children()}</div>
        </div>
    }
}

#[component]
pub fn Badge(text: &'static str) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold bg-secondary text-secondary-foreground">
            {text}
        </span>
    }
}

#[component]
pub fn SectionHeading(id: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <h2 id=id class="text-2xl font-semibold mb-4 text-primary">
            {text}
        </h2>
    }
}
