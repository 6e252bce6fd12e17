mod avatar;
mod background;
mod components;
mod contact;
mod experience;
mod homepage;
mod nav;
mod projects;
mod resume;

use leptos::{either::EitherOf4, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::state::{ExpandedSections, Tab, TechHover, Theme};

use background::Background;
use contact::ContactSection;
use experience::ExperiencePanel;
use homepage::HomePanel;
use nav::NavBar;
use projects::ProjectsPanel;
use resume::ResumePanel;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="dark">
                <App />
            </body>
        </html>
    }
}

/// Page-local UI state, shared with every panel through context.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioState {
    pub tab: RwSignal<Tab>,
    pub theme: RwSignal<Theme>,
    pub hovered_tech: RwSignal<TechHover>,
    pub expanded: RwSignal<ExpandedSections>,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self {
            tab: RwSignal::new(Tab::default()),
            theme: RwSignal::new(Theme::default()),
            hovered_tech: RwSignal::new(TechHover::default()),
            expanded: RwSignal::new(ExpandedSections::default()),
        }
    }

    pub fn select_tab(&self, tab: Tab) {
        log::debug!("showing {} panel", tab.label());
        self.tab.set(tab);
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggle());
    }

    pub fn hover_tech(&self, name: &'static str) {
        self.hovered_tech.update(|h| h.enter(name));
    }

    pub fn leave_tech(&self, name: &'static str) {
        self.hovered_tech.update(|h| h.leave(name));
    }

    pub fn toggle_section(&self, section: &'static str) {
        self.expanded.update(|s| s.toggle(section));
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.headline />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    let state = PortfolioState::new();
    provide_context(state);

    // mirror the theme onto <body> so `dark:` variants apply page-wide
    Effect::new(move |_| {
        let is_dark = state.theme.get().is_dark();
        let Some(body) = document().body() else {
            log::warn!("no document body to apply theme to");
            return;
        };
        if let Err(e) = body.class_list().toggle_with_force("dark", is_dark) {
            log::warn!("couldn't toggle dark class: {e:?}");
        }
    });

    view! {
        <Title text="Portfolio" />
        <PageFrame />
    }
}

#[component]
fn PageFrame() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    view! {
        <div class=move || {
            format!(
                "min-h-screen {} transition-colors duration-300",
                state.theme.get().root_classes(),
            )
        }>
            <Background />
            <NavBar />
            <main class="container mx-auto p-4 space-y-8 relative z-10">
                <ActivePanel />
                <ContactSection />
            </main>
        </div>
    }
}

/// Renders the panel for the active tab and nothing for the other three.
#[component]
fn ActivePanel() -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    move || match state.tab.get() {
        Tab::Home => EitherOf4::A(view! { <HomePanel /> }),
        Tab::Projects => EitherOf4::B(view! { <ProjectsPanel /> }),
        Tab::Experience => EitherOf4::C(view! { <ExperiencePanel /> }),
        Tab::Resume => EitherOf4::D(view! { <ResumePanel /> }),
    }
}

/// Renders `view` to HTML under a fresh page state adjusted by `setup`.
#[cfg(test)]
pub(crate) fn render_with_state<V: IntoView + 'static>(
    setup: impl FnOnce(&PortfolioState),
    view: impl FnOnce() -> V,
) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_meta_context();
        let state = PortfolioState::new();
        setup(&state);
        provide_context(state);
        view().to_html()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL_IDS: [&str; 4] = [
        "id=\"home-panel\"",
        "id=\"projects-panel\"",
        "id=\"experience-panel\"",
        "id=\"resume-panel\"",
    ];

    fn panel_id(tab: Tab) -> &'static str {
        match tab {
            Tab::Home => PANEL_IDS[0],
            Tab::Projects => PANEL_IDS[1],
            Tab::Experience => PANEL_IDS[2],
            Tab::Resume => PANEL_IDS[3],
        }
    }

    #[test]
    fn test_each_tab_renders_exactly_one_panel() {
        for tab in Tab::ALL {
            let html = render_with_state(|s| s.select_tab(tab), || view! { <ActivePanel /> });
            let shown = PANEL_IDS
                .iter()
                .filter(|id| html.contains(*id))
                .collect::<Vec<_>>();
            assert_eq!(shown, vec![&panel_id(tab)], "tab {tab:?}");
        }
    }

    #[test]
    fn test_page_starts_on_home() {
        let html = render_with_state(|_| {}, || view! { <PageFrame /> });
        assert!(html.contains(panel_id(Tab::Home)));
        assert!(html.contains("id=\"contact-section\""));
    }

    #[test]
    fn test_theme_toggle_changes_root_classes() {
        let dark = render_with_state(|_| {}, || view! { <PageFrame /> });
        assert!(dark.contains("min-h-screen bg-gray-900 text-white"));

        let light = render_with_state(|s| s.toggle_theme(), || view! { <PageFrame /> });
        assert!(light.contains("min-h-screen bg-gray-100 text-gray-900"));
        assert!(!light.contains("min-h-screen bg-gray-900"));

        let round_trip = render_with_state(
            |s| {
                s.toggle_theme();
                s.toggle_theme();
            },
            || view! { <PageFrame /> },
        );
        assert!(round_trip.contains("min-h-screen bg-gray-900 text-white"));
    }

    #[test]
    fn test_theme_toggle_flips_state() {
        Owner::new().with(|| {
            let state = PortfolioState::new();
            assert!(state.theme.get_untracked().is_dark());
            state.toggle_theme();
            assert!(!state.theme.get_untracked().is_dark());
            state.toggle_theme();
            assert!(state.theme.get_untracked().is_dark());
        });
    }
}
