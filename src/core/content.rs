//! Static page content: case studies, journal posts, experience, and skills.

/// A project case study shown in the work table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    pub year: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    pub stack: &'static [&'static str],
}

/// A journal post preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const BRAND: &str = "ATLAS";
pub const ESTABLISHED: &str = "EST. 1998";
pub const HERO_WORDS: &[&str] = &["DIGITAL", "CRAFTSMAN", "& OPTICAL", "ENGINEER"];
pub const HERO_KICKER: &str = "FULLSTACK / DESIGN";
pub const HERO_CUE: &str = "SCROLL TO COMPILE ↓";
pub const TICKER: &str = "Designing with logic — Building with emotion — ";
pub const CONTACT_EMAIL: &str = "hello@atlas.dev";
pub const LOCATION: &str = "Based in Seattle";
/// Header links; each targets the section with the lower-cased id.
pub const NAV_ITEMS: &[&str] = &["WORK", "LAB", "ABOUT", "CONTACT"];
pub const AVAILABILITY: &str = "● AVAILABLE FOR FREELANCE";
pub const SOCIAL_LINKS: &[&str] = &["TWITTER / X", "GITHUB", "LINKEDIN"];

/// Captions of the frames in the photography strip.
pub const LAB_FRAMES: &[&str] = &[
    "Portra 400 / Pike Place",
    "HP5 / Ferry Terminal",
    "Ektar 100 / Snoqualmie",
    "Tri-X / Capitol Hill",
    "Gold 200 / Alki Beach",
    "Cinestill 800T / Night Market",
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "chronicle-api",
        title: "Chronicle API",
        kind: "Backend Architecture",
        year: "2024",
        tagline: "A high-throughput event sourcing engine",
        role: "Lead Architect",
        stack: &["Rust", "Kafka", "Postgres", "Next.js"],
    },
    Project {
        slug: "vogue-scandinavia",
        title: "Vogue Scandinavia",
        kind: "Frontend Experience",
        year: "2023",
        tagline: "An editorial-grade, motion-heavy storefront",
        role: "Lead Frontend Engineer",
        stack: &["Next.js", "React", "TypeScript", "Framer Motion"],
    },
    Project {
        slug: "lumina-health",
        title: "Lumina Health",
        kind: "Fullstack Application",
        year: "2023",
        tagline: "A clinician-first analytics portal",
        role: "Fullstack Engineer",
        stack: &["Next.js", "Postgres", "tRPC", "Tailwind"],
    },
    Project {
        slug: "apex-finance",
        title: "Apex Finance",
        kind: "Design System",
        year: "2022",
        tagline: "A resilient design system for fintech surfaces",
        role: "Design Engineer",
        stack: &["React", "TypeScript", "Storybook", "Figma"],
    },
];

pub const JOURNAL: &[JournalPost] = &[
    JournalPost {
        slug: "ethics-of-computer-vision",
        title: "The Ethics of Computer Vision",
        date: "NOV 2024",
        read_time: "5 MIN",
        category: "AI/ML",
        summary: "Where the loss function meets lived reality.",
    },
    JournalPost {
        slug: "why-i-chose-rust-for-web",
        title: "Why I Chose Rust for Web",
        date: "OCT 2024",
        read_time: "8 MIN",
        category: "ENGINEERING",
        summary: "Latency budgets, ownership, and the joy of zero-cost abstractions.",
    },
    JournalPost {
        slug: "design-systems-as-infrastructure",
        title: "Design Systems as Infrastructure",
        date: "AUG 2024",
        read_time: "4 MIN",
        category: "DESIGN",
        summary: "Treating components like APIs instead of decorations.",
    },
    JournalPost {
        slug: "optimizing-docker-builds",
        title: "Optimizing Docker Builds",
        date: "JUL 2024",
        read_time: "6 MIN",
        category: "DEVOPS",
        summary: "Layering, caching, and making CI logs readable again.",
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Stealth Startup",
        role: "Founding Engineer",
        period: "2023 — Present",
        desc: "Architecting the core NLP pipeline using PyTorch and FastAPI. Managed a team of 3 engineers.",
        tags: &["Python", "AI/ML", "Infrastructure"],
    },
    Experience {
        company: "Research Lab (MIT)",
        role: "ML Researcher",
        period: "2021 — 2023",
        desc: "Published papers on Computer Vision optimization. Implemented novel algorithms in C++.",
        tags: &["C++", "Research", "Vision"],
    },
    Experience {
        company: "Tech Giant Corp",
        role: "Fullstack Engineer",
        period: "2019 — 2021",
        desc: "Migrated legacy dashboard to React/Next.js, improving load times by 40%.",
        tags: &["React", "TypeScript", "Enterprise"],
    },
];

pub const ARSENAL: &[SkillGroup] = &[
    SkillGroup {
        category: "INTELLIGENCE",
        skills: &["PyTorch", "SciKit-Learn", "Computer Vision", "NLP", "NumPy", "Python"],
    },
    SkillGroup {
        category: "ARCHITECTURE",
        skills: &["Docker", "PostgreSQL", "Node.js", "C++", "Java", "Git"],
    },
    SkillGroup {
        category: "INTERFACE",
        skills: &["Next.js", "React", "TypeScript", "Tailwind", "Framer Motion", "WebGL"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, p) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS[i + 1..].iter().all(|q| q.slug != p.slug));
        }
        for (i, p) in JOURNAL.iter().enumerate() {
            assert!(JOURNAL[i + 1..].iter().all(|q| q.slug != p.slug));
        }
    }
}
