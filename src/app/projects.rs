use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{ProjectEntry, PROJECTS};

use super::components::{stagger_delay, Badge, Card, CardHeader};

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div id="projects-panel" class="panel-enter">
            <h2 class="text-3xl font-bold mb-6 text-primary">"Projects"</h2>
            <div class="grid gap-6 md:grid-cols-2">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project index /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry, index: usize) -> impl IntoView {
    view! {
        <div class="rise-in" style=stagger_delay(index)>
            <Card class="h-full flex flex-col">
                <CardHeader title=project.title>
                    <p>{project.description}</p>
                </CardHeader>
                <div class="flex-grow px-6">
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| view! { <Badge text=*tech /> })
                            .collect_view()}
                    </div>
                </div>
                <div class="px-6 pb-6">
                    <a
                        href=project.link
                        class="inline-flex w-full items-center justify-center rounded-md border border-gray-500 px-4 py-2 text-sm font-medium hover:bg-secondary transition-colors"
                    >
                        "View Project"
                    </a>
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_with_state;

    const BADGE: &str = "rounded-full px-2.5 py-0.5";

    #[test]
    fn test_renders_both_projects_with_tags() {
        let html = render_with_state(|_| {}, || view! { <ProjectsPanel /> });
        assert_eq!(html.matches("class=\"rise-in\"").count(), 2);
        assert_eq!(html.matches("View Project").count(), 2);

        let tag_count = PROJECTS.iter().map(|p| p.technologies.len()).sum::<usize>();
        assert_eq!(html.matches(BADGE).count(), tag_count);

        let mut cursor = 0;
        for project in PROJECTS {
            cursor += html[cursor..].find(project.title).expect("project title");
            for tech in project.technologies {
                let badge = cursor + html[cursor..].find(BADGE).expect("tag badge");
                let close = badge + html[badge..].find("</span>").expect("badge closes");
                assert!(html[badge..close].contains(tech), "{tech} badge");
                cursor = close;
            }
        }
    }
}
