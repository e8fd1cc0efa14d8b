//! Static page content.

pub const OWNER_NAME: &str = "Himanshu Patel";
pub const BRAND: &str = "HIMANSHU";
pub const RESUME_URL: &str = "https://docs.google.com/document/d/1PkiuD3HtuQh9x7N1knalj0Q_SF-0kKFhTxg66TSjMts/edit?usp=sharing";
pub const GITHUB_URL: &str = "https://github.com/HIMANSHU-PATEL9691";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/himanshu-patel-a43200329/";
pub const EMAIL: &str = "himanshupatel9691@gmail.com";
pub const HEATMAP_URL: &str = "https://ghchart.rshah.org/3b82f6/HIMANSHU-PATEL9691";
pub const PROFILE_IMAGE: &str = "/himanshu.jpg";

/// Header height compensation for the active-section tracker.
pub const NAV_OFFSET: f64 = 120.0;

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", id: "home" },
    NavItem { label: "About", id: "about" },
    NavItem { label: "Skills", id: "skills" },
    NavItem { label: "Projects", id: "projects" },
    NavItem { label: "Contact", id: "contact" },
];

pub fn nav_section_ids() -> Vec<String> {
    NAV_ITEMS.iter().map(|n| n.id.to_string()).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static PHILOSOPHY: [Card; 3] = [
    Card {
        icon: "extra-code",
        title: "Full-Stack Expertise",
        description: "Mastering MERN & React Native",
    },
    Card {
        icon: "extra-rocket",
        title: "Production Focused",
        description: "Building real-world scalable apps",
    },
    Card {
        icon: "extra-lightbulb",
        title: "Problem Solver",
        description: "Applying DSA to complex logic",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// devicon slug, e.g. `html5/html5-original`
    pub icon: &'static str,
}

impl Skill {
    pub fn icon_url(&self) -> String {
        format!(
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/{}.svg",
            self.icon
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            Skill { name: "HTML5", icon: "html5/html5-original" },
            Skill { name: "CSS3", icon: "css3/css3-original" },
            Skill { name: "JavaScript", icon: "javascript/javascript-original" },
            Skill { name: "React", icon: "react/react-original" },
            Skill { name: "TypeScript", icon: "typescript/typescript-original" },
            Skill { name: "Tailwind CSS", icon: "tailwindcss/tailwindcss-original" },
        ],
    },
    SkillCategory {
        title: "Backend & Database",
        skills: &[
            Skill { name: "Node.js", icon: "nodejs/nodejs-original" },
            Skill { name: "Express.js", icon: "express/express-original" },
            Skill { name: "MongoDB", icon: "mongodb/mongodb-original" },
            Skill { name: "MySQL", icon: "mysql/mysql-original" },
            Skill { name: "PostgreSQL", icon: "postgresql/postgresql-original" },
        ],
    },
    SkillCategory {
        title: "Software & Tools",
        skills: &[
            Skill { name: "Git", icon: "git/git-original" },
            Skill { name: "GitHub", icon: "github/github-original" },
            Skill { name: "VS Code", icon: "vscode/vscode-original" },
            Skill { name: "Postman", icon: "postman/postman-original" },
            Skill { name: "npm", icon: "npm/npm-original-wordmark" },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub tags: &'static [&'static str],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Petro Shop",
        category: "E-Commerce",
        description: "A high-performance B2B marketplace for petrol pump essentials, focused on operational efficiency using a scalable MERN architecture.",
        image: "https://portfolio-web-mu-weld.vercel.app/projects/petroshop.png",
        link: "https://thepetroshop.com/",
        tags: &["React", "Tailwind", "Firebase", "Express", "MongoDB"],
    },
    Project {
        title: "Electronics Repair",
        category: "Service Platform",
        description: "A service booking and repair-tracking platform integrated with WhatsApp Business API for instant customer engagement.",
        image: "https://portfolio-web-mu-weld.vercel.app/projects/patel.png",
        link: "https://patel-electronics-shop.vercel.app/",
        tags: &["React", "Tailwind", "WhatsApp API"],
    },
    Project {
        title: "School Portfolio",
        category: "Institutional",
        description: "An interactive educational portal with modern accessibility standards and fluid UI animations.",
        image: "https://portfolio-web-mu-weld.vercel.app/projects/school.png",
        link: "https://school-website-iio4.vercel.app/",
        tags: &["React", "Framer Motion", "Tailwind"],
    },
    Project {
        title: "Standard Petro",
        category: "Corporate",
        description: "A corporate digital showcase highlighting industrial PEB structures and petrol pump canopy deployments.",
        image: "https://portfolio-web-mu-weld.vercel.app/projects/standard.png",
        link: "https://standardpetro.in/",
        tags: &["MERN Stack", "Tailwind", "Node.js"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

impl TimelineKind {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Work => "Professional Experience",
            Self::Education => "Academic Background",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Work => "extra-briefcase",
            Self::Education => "extra-graduation-cap",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: [TimelineEntry; 2] = [
    TimelineEntry {
        kind: TimelineKind::Work,
        period: "Sept 2024 - Present",
        title: "Full Stack Developer Intern",
        organization: "Digital Fly High Solutions",
        location: "Indore, India",
        description: "Leading the development of production-ready features using the MERN stack and React Native.",
        highlights: &[
            "Architecting scalable REST APIs and modern frontends",
            "Deploying cross-platform mobile solutions",
            "Optimizing application performance by 30%",
        ],
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        period: "2022 - 2026",
        title: "Bachelor of Technology (B.Tech)",
        organization: "SAGE University, Indore",
        location: "Indore, India",
        description: "Specializing in Software Engineering with a focus on data structures and full-stack architecture.",
        highlights: &[
            "8th Semester Student (Final Year)",
            "Core focus on JavaScript & Advanced DSA",
            "Developed 10+ academic & personal projects",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub action: &'static str,
    pub href: &'static str,
    /// Opens in a new tab.
    pub external: bool,
}

pub static CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "extra-email",
        label: "Email",
        value: EMAIL,
        action: "Send Mail",
        href: "mailto:himanshupatel9691@gmail.com",
        external: false,
    },
    ContactMethod {
        icon: "extra-phone",
        label: "Phone",
        value: "+91 9691365052",
        action: "Connect Now",
        href: "tel:+919691365052",
        external: false,
    },
    ContactMethod {
        icon: "extra-message",
        label: "WhatsApp",
        value: "Let's Chat",
        action: "Connect Now",
        href: "https://wa.me/919691365052",
        external: true,
    },
];

pub const LOCATION: &str = "Indore, Madhya Pradesh, India";

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "devicon-github-plain",
        href: GITHUB_URL,
        label: "GitHub",
    },
    SocialLink {
        icon: "devicon-linkedin-plain",
        href: LINKEDIN_URL,
        label: "LinkedIn",
    },
    SocialLink {
        icon: "extra-email",
        href: "mailto:himanshupatel9691@gmail.com",
        label: "Email",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_ids_unique() {
        let ids = nav_section_ids();
        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.first().map(String::as_str), Some("home"));
        assert_eq!(NAV_ITEMS[3].href(), "#projects");
    }

    #[test]
    fn test_skill_icons() {
        let react = SKILL_CATEGORIES[0].skills[3];
        assert_eq!(react.name, "React");
        assert_eq!(
            react.icon_url(),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"
        );
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn test_only_whatsapp_is_external() {
        let external = CONTACT_METHODS
            .iter()
            .filter(|c| c.external)
            .map(|c| c.label)
            .collect::<Vec<_>>();
        assert_eq!(external, vec!["WhatsApp"]);
    }

    #[test]
    fn test_projects_have_tags() {
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
        assert_eq!(EXPERIENCE[0].kind.heading(), "Professional Experience");
    }
}
