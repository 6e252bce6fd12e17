//! Hand-authored portfolio content.
//!
//! Everything here is fixed at compile time and rendered as-is. Order within
//! each table is display order; experience is kept newest first.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub avatar_url: &'static str,
    pub initials: &'static str,
    pub about: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

impl ExperienceEntry {
    /// "company | duration", shown under the title on cards and the resume.
    pub fn byline(&self) -> String {
        format!("{} | {}", self.company, self.duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechStackEntry {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub location: &'static str,
    pub degree: &'static str,
    pub grade: &'static str,
    pub years: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    /// Opens in a new tab with `noopener noreferrer`.
    pub external: bool,
}

pub const PROFILE: Profile = Profile {
    name: "Sathwik Kokkonda",
    headline: "Full Stack Developer | AI Enthusiast",
    avatar_url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/image-I0BMU3nc1xdM4HOiRtnCL9LwRt6yNc.png",
    initials: "SK",
    about: "I'm a passionate Full Stack Developer with a strong foundation in Python, JavaScript, and various web technologies. Currently pursuing my B.Tech in Computer Science and Engineering at VNR Vignana Jyothi Institute of Engineering and Technology, I'm dedicated to creating innovative solutions and driving technological advancements.",
};

pub const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "Machine Learning",
    "Deep Learning",
    "Natural Language Processing",
    "Computer Vision",
    "TensorFlow",
    "PyTorch",
    "MongoDB",
    "SQL",
    "Git",
    "Docker",
];

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Web Development Intern",
        company: "InternPe",
        duration: "April 2024 – May 2024",
        description: "Innovated and sustained high-performance websites emphasizing user experience and cross-device functionality; utilized HTML, CSS, JavaScript, and React.js, resulting in a 30% increase in user retention and a 20% reduction in bounce rates.",
    },
    ExperienceEntry {
        title: "Data Science Intern",
        company: "IBM Skills build and CSRBOX-Micro Internship",
        duration: "Feb 2024",
        description: "Acquired foundational knowledge in data science, including data analysis, visualization techniques, and statistical methods, through hands-on projects and coursework.",
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Online Campus Navigation System",
        description: "Crafted and deployed an interactive online campus navigation system utilizing OpenStreetMap and frontend technologies, enhancing campus accessibility and improving user experience with dynamic, real-time maps, benefiting over 10,000 students.",
        technologies: &["OpenStreetMap", "HTML5", "CSS3", "JavaScript"],
        link: "#",
    },
    ProjectEntry {
        title: "Student Material Management",
        description: "Created a Student Material Management system using MongoDB and frontend technologies, organizing over 50 resources and benefiting 1500 students by providing efficient access and retrieval of educational materials.",
        technologies: &["MongoDB", "React.js", "Node.js", "CSS"],
        link: "#",
    },
];

pub const TECH_STACK: &[TechStackEntry] = &[
    TechStackEntry {
        name: "Python",
        icon: "🐍",
        description: "Primary programming language for ML and data science",
    },
    TechStackEntry {
        name: "JavaScript",
        icon: "🌐",
        description: "Web development and interactive frontend applications",
    },
    TechStackEntry {
        name: "React",
        icon: "⚛️",
        description: "Building user interfaces for web applications",
    },
    TechStackEntry {
        name: "Node.js",
        icon: "🟢",
        description: "Server-side JavaScript runtime",
    },
    TechStackEntry {
        name: "MongoDB",
        icon: "🍃",
        description: "NoSQL database for scalable applications",
    },
    TechStackEntry {
        name: "Git",
        icon: "🔄",
        description: "Version control system for code management",
    },
    TechStackEntry {
        name: "Docker",
        icon: "🐳",
        description: "Containerization platform for application deployment",
    },
    TechStackEntry {
        name: "Cloud",
        icon: "☁️",
        description: "Google Cloud Platform and cloud technologies",
    },
];

pub const EDUCATION: &[Education] = &[Education {
    institution: "VNR VJIET",
    location: "Hyderabad, India",
    degree: "Bachelor of Technology in Computer Engineering",
    grade: "CGPA: 9.80",
    years: "2022-2026",
}];

pub const ACHIEVEMENTS: &[&str] = &[
    "Certifications: Introduction to Internet of Things, PYTHON BOOTCAMP, REACT BOOTCAMP, CODING CONTEST",
    "Competed in 5+ hackathons such as Smart India Hackathon by Govt. of India and 24 Hour Hackathon conducted by our college Clubs",
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        href: "mailto:sathwikkokkonda997@gmail.com",
        icon: "✉",
        external: false,
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/sathwikkokkonda",
        icon: "devicon-github-plain",
        external: true,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/sathwikkokkonda/",
        icon: "devicon-linkedin-plain",
        external: true,
    },
];

// Placeholder; there is no resume file behind this path yet.
pub const RESUME_PATH: &str = "/path-to-your-resume.pdf";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skills_in_authored_order() {
        assert_eq!(
            SKILLS,
            &[
                "Python",
                "JavaScript",
                "React",
                "Node.js",
                "Machine Learning",
                "Deep Learning",
                "Natural Language Processing",
                "Computer Vision",
                "TensorFlow",
                "PyTorch",
                "MongoDB",
                "SQL",
                "Git",
                "Docker",
            ]
        );
    }

    #[test]
    fn test_projects_have_tags() {
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(PROJECTS[0].title, "Online Campus Navigation System");
        assert_eq!(
            PROJECTS[0].technologies,
            &["OpenStreetMap", "HTML5", "CSS3", "JavaScript"]
        );
        assert_eq!(PROJECTS[1].technologies, &["MongoDB", "React.js", "Node.js", "CSS"]);
        for project in PROJECTS {
            assert_eq!(project.link, "#");
        }
    }

    #[test]
    fn test_experience_byline() {
        assert_eq!(EXPERIENCES.len(), 2);
        assert_eq!(
            EXPERIENCES[0].byline(),
            "InternPe | April 2024 – May 2024"
        );
        assert_eq!(
            EXPERIENCES[1].byline(),
            "IBM Skills build and CSRBOX-Micro Internship | Feb 2024"
        );
    }

    #[test]
    fn test_experience_titles_unique() {
        // titles double as keys for the expanded-section set
        let titles: HashSet<_> = EXPERIENCES.iter().map(|e| e.title).collect();
        assert_eq!(titles.len(), EXPERIENCES.len());
    }

    #[test]
    fn test_tech_stack_entries() {
        assert_eq!(TECH_STACK.len(), 8);
        let names: HashSet<_> = TECH_STACK.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TECH_STACK.len());

        let docker = TECH_STACK
            .iter()
            .find(|t| t.name == "Docker")
            .expect("Docker should be in the tech stack");
        assert_eq!(docker.icon, "🐳");
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(CONTACT_LINKS.len(), 3);
        let mail = CONTACT_LINKS
            .iter()
            .filter(|l| l.href.starts_with("mailto:"))
            .collect::<Vec<_>>();
        assert_eq!(mail.len(), 1);
        assert!(!mail[0].external);
        assert!(CONTACT_LINKS
            .iter()
            .filter(|l| l.external)
            .all(|l| l.href.starts_with("https://")));
    }
}
