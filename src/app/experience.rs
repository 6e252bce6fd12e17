use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{ExperienceEntry, EXPERIENCES};

use super::components::{stagger_delay, Card, CardHeader};
use super::PortfolioState;

/// Classes for an experience description; folded cards clamp to two lines.
fn description_class(expanded: bool) -> &'static str {
    if expanded {
        "text-secondary-foreground"
    } else {
        "text-secondary-foreground line-clamp-2"
    }
}

#[component]
pub fn ExperiencePanel() -> impl IntoView {
    view! {
        <Title text="Experience" />
        <div id="experience-panel" class="panel-enter">
            <h2 class="text-3xl font-bold mb-6 text-primary">"Experience"</h2>
            <div class="space-y-6">
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <ExperienceCard entry index /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry, index: usize) -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let key = entry.title;
    let expanded = move || state.expanded.with(|s| s.is_expanded(key));
    view! {
        <div class="rise-in" style=stagger_delay(index)>
            <Card>
                <CardHeader title=entry.title>
                    <p>{entry.byline()}</p>
                </CardHeader>
                <div class="px-6 pb-6">
                    <p class=move || description_class(expanded())>{entry.description}</p>
                    <button
                        type="button"
                        class="mt-2 text-sm text-primary hover:underline"
                        aria-expanded=move || expanded().to_string()
                        on:click=move |_| state.toggle_section(key)
                    >
                        {move || if expanded() { "▴ Show less" } else { "▾ Show more" }}
                    </button>
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_with_state;

    #[test]
    fn test_descriptions_start_in_full() {
        let html = render_with_state(|_| {}, || view! { <ExperiencePanel /> });
        assert!(!html.contains("line-clamp"));
        assert_eq!(html.matches("▴ Show less").count(), EXPERIENCES.len());
        for entry in EXPERIENCES {
            assert!(html.contains(entry.title));
            assert!(html.contains(&entry.byline()));
        }
        assert!(html.contains("statistical methods, through hands-on projects and coursework."));
    }

    #[test]
    fn test_folding_one_card() {
        let folded = EXPERIENCES[0].title;
        let html = render_with_state(
            |s| s.toggle_section(folded),
            || view! { <ExperiencePanel /> },
        );
        assert_eq!(html.matches("line-clamp-2").count(), 1);
        assert_eq!(html.matches("▾ Show more").count(), 1);

        let html = render_with_state(
            |s| {
                s.toggle_section(folded);
                s.toggle_section(folded);
            },
            || view! { <ExperiencePanel /> },
        );
        assert!(!html.contains("line-clamp"));
    }

    #[test]
    fn test_description_clamp() {
        assert!(description_class(false).contains("line-clamp-2"));
        assert!(!description_class(true).contains("line-clamp"));
    }
}
