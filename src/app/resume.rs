use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{ACHIEVEMENTS, EDUCATION, EXPERIENCES, RESUME_PATH, SKILLS};

use super::components::{Badge, Card};

#[component]
pub fn ResumePanel() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <div id="resume-panel" class="panel-enter">
            <h2 class="text-3xl font-bold mb-6 text-primary">"Resume"</h2>
            <Card>
                <div id="resume" class="p-6 space-y-6">
                    <Education />
                    <Experience />
                    <Skills />
                    <Achievements />
                    <a
                        href=RESUME_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex w-full items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-white hover:bg-primary/90 transition-colors"
                    >
                        <span class="mr-2">"⬇"</span>
                        "Download Resume"
                    </a>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <section id="education">
            <h3 class="text-2xl font-semibold mb-2 text-primary">"Education"</h3>
            {EDUCATION
                .iter()
                .map(|edu| {
                    view! {
                        <p class="text-secondary-foreground">
                            <strong>{edu.institution}</strong>
                            ", "
                            {edu.location}
                            <br />
                            {edu.degree}
                            <br />
                            {format!("{} | {}", edu.grade, edu.years)}
                        </p>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experience">
            <h3 class="text-2xl font-semibold mb-2 text-primary">"Experience"</h3>
            {EXPERIENCES
                .iter()
                .map(|exp| {
                    view! {
                        <div class="mb-4">
                            <h4 class="text-lg font-semibold text-secondary-foreground">
                                {exp.title}
                            </h4>
                            <p class="text-muted-foreground">{exp.byline()}</p>
                            <p class="text-secondary-foreground">{exp.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills">
            <h3 class="text-2xl font-semibold mb-2 text-primary">"Skills"</h3>
            <div class="flex flex-wrap gap-2">
                {SKILLS.iter().map(|skill| view! { <Badge text=*skill /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Achievements() -> impl IntoView {
    view! {
        <section id="achievements">
            <h3 class="text-2xl font-semibold mb-2 text-primary">"Achievements"</h3>
            <ul class="list-disc pl-5 space-y-2 text-secondary-foreground">
                {ACHIEVEMENTS.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_with_state;

    const BADGE: &str = "rounded-full px-2.5 py-0.5";

    fn section<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html
            .find(&format!("id=\"{id}\""))
            .expect("section should render");
        let end = html[start..].find("</section>").expect("section should close") + start;
        &html[start..end]
    }

    #[test]
    fn test_skills_match_table() {
        let html = render_with_state(|_| {}, || view! { <ResumePanel /> });
        let skills = section(&html, "skills");
        assert_eq!(skills.matches(BADGE).count(), SKILLS.len());

        let mut cursor = 0;
        for skill in SKILLS {
            let badge = cursor + skills[cursor..].find(BADGE).expect("skill badge");
            let close = badge + skills[badge..].find("</span>").expect("badge closes");
            assert!(skills[badge..close].contains(skill), "{skill} out of order");
            cursor = close;
        }
    }

    #[test]
    fn test_experience_matches_table() {
        let html = render_with_state(|_| {}, || view! { <ResumePanel /> });
        let experience = section(&html, "experience");
        assert_eq!(experience.matches("<h4").count(), EXPERIENCES.len());
        for entry in EXPERIENCES {
            assert!(experience.contains(entry.title));
            assert!(experience.contains(&entry.byline()));
        }
        assert!(experience.contains("InternPe | April 2024 – May 2024"));
        assert!(experience.contains("IBM Skills build and CSRBOX-Micro Internship | Feb 2024"));
    }

    #[test]
    fn test_education_matches_table() {
        let html = render_with_state(|_| {}, || view! { <ResumePanel /> });
        let education = section(&html, "education");
        assert!(education.contains("VNR VJIET"));
        assert!(education.contains("Hyderabad, India"));
        assert!(education.contains("Bachelor of Technology in Computer Engineering"));
        assert!(education.contains("CGPA: 9.80 | 2022-2026"));
    }

    #[test]
    fn test_download_link() {
        let html = render_with_state(|_| {}, || view! { <ResumePanel /> });
        assert!(html.contains(&format!("href=\"{RESUME_PATH}\"")));
        assert!(html.contains("Download Resume"));
        for achievement in ACHIEVEMENTS {
            assert!(html.contains(achievement));
        }
    }
}
