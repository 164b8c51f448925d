//! Hand-authored page content. Everything here is `'static` and never changes
//! after load; the view layer is a pure function of these records.

use serde::Serialize;

pub const OWNER_NAME: &str = "Gamid Muratbekov";
pub const HEADLINE: &str = "Full-Stack Engineer";
pub const TAGLINE: &str =
    "Building performant applications, while thinking about the best user experience.";
pub const RESUME_PATH: &str = "/Resume.pdf";
pub const RESUME_LABEL: &str = "View Resume";

pub const ABOUT_SECTION: &str = "about";
pub const EXPERIENCE_SECTION: &str = "experience";
pub const PROJECTS_SECTION: &str = "projects";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Mail,
}

impl SocialIcon {
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Mail => "Email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub href: &'static str,
    pub icon: SocialIcon,
    pub is_email: bool,
}

impl SocialLink {
    /// E-mail links are stored as bare addresses and get the `mailto:` scheme
    /// at render time.
    pub fn resolved_href(&self) -> String {
        if self.is_email {
            format!("mailto:{}", self.href)
        } else {
            self.href.to_string()
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        (!self.is_email).then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        (!self.is_email).then_some("noreferrer")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub roles: &'static [&'static str],
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

impl ExperienceEntry {
    pub fn heading(&self) -> String {
        format!("{} • {}", self.title, self.company)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

pub const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        id: ABOUT_SECTION,
        label: "ABOUT",
    },
    NavigationItem {
        id: EXPERIENCE_SECTION,
        label: "EXPERIENCE",
    },
    NavigationItem {
        id: PROJECTS_SECTION,
        label: "PROJECTS",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://github.com/KorewaWatchful",
        icon: SocialIcon::Github,
        is_email: false,
    },
    SocialLink {
        href: "gamidmuratbekov@gmail.com",
        icon: SocialIcon::Mail,
        is_email: true,
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I've been drawn to computers for as long as I can remember, not just using them, but pulling them apart, breaking things, and figuring out how to put them back together. I grew up in Moscow, where I spent my early teens writing scripts to automate games and poking around Linux just to see what I could get away with. Over time, that curiosity turned into a deeper obsession with systems programming, backend architecture, and building tools that actually make people's lives easier.",
    "After moving to the U.S., I studied Computer Science at UConn and recently built a full-stack repair technician platform at UBIF Patriot, from a speedy C++ backend with real-time repair metrics and task delegation, to a sleek SvelteKit desktop app now used daily by over 100 employees. Alongside work, I contribute to open-source projects, and spend time building my own tools and apps, anything that scratches a technical itch or improves some corner of my workflow.",
    "Outside of code, I've been expanding my music taste and recently got hooked on old melodic trance tracks. When I'm not chasing new playlists, I'm either hitting the gym or grinding the ranked ladder in whatever the current flavor-of-the-month tac shooter is.",
];

pub const EXPERIENCES: &[ExperienceEntry] = &[ExperienceEntry {
    period: "2022 — 2025",
    title: "Full Stack Software Engineer",
    company: "UBIF Patriot, Inc",
    roles: &[],
    description: "Designed and built a full-stack repair technician platform from scratch, featuring a C++ backend with asynchronous REST APIs, real-time WebSocket metrics, and concurrent caching for high-throughput performance. Architected a PostgreSQL schema and backend functionality to support granular device diagnostics and business operations such as part ordering, inventory management, and administrative control. Deployed the backend to an in-house Linux server and set up CI pipelines for seamless delivery of the SvelteKit + Tauri desktop app to 100+ repair technicians, boosting diagnostic efficiency by 40%.",
    technologies: &[
        "C++",
        "TypeScript",
        "PostgreSQL",
        "REST API",
        "Concurrency",
        "SvelteKit",
        "Vite.js",
        "Back-End Design",
        "Linux Server Administration",
        "CI/CD",
        "GitHub Actions",
    ],
}];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Vita3k - A PlayStation Vita Emulator",
        description: "Core maintainer on the first experimental open-source PlayStation Vita emulator. Developed various staple features such as PKG decryption and game installation, input remapping and I/O improvements for linux compatibility. Currently working on decoupling the GUI from the emulator core and introducing a fresher Qt6 based GUI.",
        technologies: &[
            "C++",
            "Cross-Platform Development",
            "GPU emulation",
            "GUI",
            "PKG Decryption",
            "Button Remapping",
            "Qt6",
        ],
        image: "https://raw.githubusercontent.com/Vita3K/Vita3K/refs/heads/master/data/image/icon.png",
        link: "https://vita3k.org/",
    },
    ProjectEntry {
        title: "Sugari - iOS & Android Diabetes Management App",
        description: "Building a personalized digital health assistant for helping users with diebetes manage their blood sugar levels. Adding in AI-driven analysis and seamless bluetooth integration with various blood glucose monitors.",
        technologies: &[
            "TypeScript",
            "React",
            "React-Native",
            "Expo Go",
            "AI Integration",
            "Mobile Development",
            "SQLite",
        ],
        image: "https://raw.githubusercontent.com/DarkSyed/sugari/refs/heads/main/assets/icon.png",
        link: "https://github.com/DarkSyed/sugari",
    },
    ProjectEntry {
        title: "Chaya - Stealth Startup",
        description: "Full-Stack developer for a UNC-based startup, focusing on implementing inventory management and ordering automation with plans for advanced AI analysis.",
        technologies: &[
            "Python",
            "Flask",
            "TypeScript",
            "WebDriver",
            "Selenium/Playwright",
            "AI",
        ],
        image: "/chaya.png",
        link: "",
    },
];

/// Section ids in scroll-spy priority order.
pub fn section_ids() -> Vec<&'static str> {
    NAVIGATION_ITEMS.iter().map(|item| item.id).collect()
}

pub fn default_section() -> &'static str {
    NAVIGATION_ITEMS.first().map(|item| item.id).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_navigation_order() {
        assert_eq!(section_ids(), vec!["about", "experience", "projects"]);
        assert_eq!(default_section(), "about");
    }

    #[test]
    fn email_link_uses_mailto_without_new_tab() {
        let email = SOCIAL_LINKS
            .iter()
            .find(|link| link.is_email)
            .expect("an email link is configured");

        assert_eq!(email.resolved_href(), "mailto:gamidmuratbekov@gmail.com");
        assert_eq!(email.target(), None);
        assert_eq!(email.rel(), None);
    }

    #[test]
    fn web_link_opens_in_new_tab() {
        let github = SOCIAL_LINKS[0];

        assert_eq!(github.resolved_href(), "https://github.com/KorewaWatchful");
        assert_eq!(github.target(), Some("_blank"));
        assert_eq!(github.rel(), Some("noreferrer"));
    }

    #[test]
    fn experience_heading_joins_title_and_company() {
        assert_eq!(
            EXPERIENCES[0].heading(),
            "Full Stack Software Engineer • UBIF Patriot, Inc"
        );
    }
}
