use leptos::prelude::*;

use crate::state::Tab;

use super::PortfolioState;

const TAB_BUTTON: &str = "inline-flex items-center rounded-md px-4 py-2 text-sm font-medium hover:bg-white/10 transition-colors";

fn tab_button_class(active: Tab, tab: Tab) -> String {
    if active == tab {
        format!("{TAB_BUTTON} bg-primary")
    } else {
        TAB_BUTTON.to_string()
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 backdrop-blur-md bg-opacity-70 bg-gray-800 dark:bg-gray-900 p-4 text-white">
            <div class="container mx-auto flex justify-between items-center">
                <div class="flex space-x-4">
                    {Tab::ALL.into_iter().map(|tab| view! { <TabButton tab /> }).collect_view()}
                </div>
                <ThemeSwitch />
            </div>
        </nav>
    }
}

#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    view! {
        <button
            type="button"
            class=move || tab_button_class(state.tab.get(), tab)
            aria-pressed=move || (state.tab.get() == tab).to_string()
            on:click=move |_| state.select_tab(tab)
        >
            <span class="mr-2">{tab.icon()}</span>
            {tab.label()}
        </button>
    }
}

#[component]
fn ThemeSwitch() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let is_dark = move || state.theme.get().is_dark();
    view! {
        <div class="flex items-center space-x-2">
            <span aria-hidden="true">"☀"</span>
            <button
                type="button"
                role="switch"
                aria-label="Dark mode"
                aria-checked=move || is_dark().to_string()
                on:click=move |_| state.toggle_theme()
                class=move || {
                    format!(
                        "relative inline-flex h-6 w-11 items-center rounded-full transition-colors {}",
                        if is_dark() { "bg-primary" } else { "bg-gray-400" },
                    )
                }
            >
                <span class=move || {
                    format!(
                        "inline-block h-5 w-5 rounded-full bg-white shadow transition-transform {}",
                        if is_dark() { "translate-x-5" } else { "translate-x-0.5" },
                    )
                }></span>
            </button>
            <span aria-hidden="true">"☾"</span>
        </div>
    }
}
