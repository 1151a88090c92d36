//! Static résumé content. Everything the pages show lives here as plain
//! tables so the UI stays free of copy.

pub mod art;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Proficient,
}

impl SkillLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Expert => "expert",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Proficient => "proficient",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub metrics: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ExpertiseGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct PersonaCard {
    pub title: &'static str,
    pub lead: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Hobby {
    pub title: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
}

pub const NAME: &str = "David Aimi";
pub const TITLE: &str = "AI Engineer";
pub const HEADLINE: &str = "Principal UI Engineer & AI Architect";
pub const LOCATION: &str = "Durham, Connecticut";
pub const AVAILABILITY: &str = "Available for AI consulting";
pub const TAGLINE: &str =
    "AI Engineer specializing in Large Language Models, Generative AI, and intelligent systems.";
pub const INTRO: &str = "I build production-ready AI solutions that transform how businesses \
operate. From RAG pipelines to custom fine-tuned models, I turn complex AI challenges into \
elegant, scalable systems.";
pub const CRAFTED_LINE: &str = "Crafted with storms and code.";

pub const CORE_SKILLS: &[Skill] = &[
    Skill { name: "Claude API", level: SkillLevel::Expert },
    Skill { name: "GPT-4 / OpenAI", level: SkillLevel::Expert },
    Skill { name: "LangChain", level: SkillLevel::Expert },
    Skill { name: "RAG Systems", level: SkillLevel::Expert },
    Skill { name: "Fine-tuning", level: SkillLevel::Advanced },
    Skill { name: "Prompt Engineering", level: SkillLevel::Expert },
    Skill { name: "Python", level: SkillLevel::Expert },
    Skill { name: "Cloud Deploy", level: SkillLevel::Advanced },
];

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: "AI Projects Delivered" },
    Stat { value: "5+", label: "Years in AI/ML" },
    Stat { value: "99%", label: "Client Satisfaction" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Enterprise RAG Pipeline",
        blurb: "Built a scalable retrieval-augmented generation system processing 10M+ \
documents with sub-second query response times. Implemented hybrid search combining semantic \
embeddings with keyword matching.",
        tags: &["LangChain", "Pinecone", "Claude API", "FastAPI"],
        metrics: &[("docs", "10M+"), ("latency", "<1s"), ("accuracy", "94%")],
    },
    Project {
        title: "Conversational AI Agent",
        blurb: "Developed a multi-turn conversational agent with tool-use capabilities for \
enterprise customer support. Reduced support ticket resolution time by 60%.",
        tags: &["GPT-4", "Function Calling", "Redis", "WebSocket"],
        metrics: &[("reduction", "60%"), ("conversations", "100K+"), ("satisfaction", "4.8/5")],
    },
    Project {
        title: "Custom LLM Fine-tuning",
        blurb: "Fine-tuned domain-specific models for legal document analysis. Achieved 40% \
improvement in accuracy over base models while reducing inference costs by 70%.",
        tags: &["LoRA", "PyTorch", "Hugging Face", "AWS SageMaker"],
        metrics: &[("accuracy", "+40%"), ("cost", "-70%"), ("models", "12")],
    },
    Project {
        title: "AI Workflow Orchestration",
        blurb: "Designed and implemented an AI workflow orchestration platform enabling \
non-technical users to build complex AI pipelines through a visual interface.",
        tags: &["React", "Python", "LangGraph", "PostgreSQL"],
        metrics: &[("users", "500+"), ("pipelines", "2K+"), ("uptime", "99.9%")],
    },
];

#[must_use]
pub fn featured_project() -> &'static Project {
    &PROJECTS[0]
}

/// Delivered projects per year, for the portfolio trend strip.
pub const EXPERIENCE_CURVE: &[(&str, u64)] = &[
    ("2020", 5),
    ("2021", 12),
    ("2022", 18),
    ("2023", 28),
    ("2024", 42),
    ("2025", 55),
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2022 - Present",
        role: "Architecture Senior Advisor, UI Lead & AI Enablement",
        company: "Cigna Healthcare",
        note: "Spearheading enterprise AI enablement with Claude, GPT, and agentic AI \
platforms. Authoring LLM governance policies and leading scalable Angular applications \
serving millions.",
    },
    TimelineEntry {
        period: "2021 - 2022",
        role: "Software Engineering Senior Advisor",
        company: "Cigna Healthcare",
        note: "Strategic technical leadership across global teams in US, UK, South Korea, and \
China. Architecting event-driven systems and migrating monoliths to modular architecture.",
    },
    TimelineEntry {
        period: "2021",
        role: "Principal Engineer, Consultant",
        company: "Harley-Davidson (via Ntelicor/BCG)",
        note: "Principal engineer for the LiveWire.com launch, Harley-Davidson's electric \
motorcycle brand. Architected NestJS APIs with Stripe and Plaid integration in Azure Cloud.",
    },
    TimelineEntry {
        period: "2012 - 2021",
        role: "App Dev Advisor, Senior UI Developer",
        company: "Cigna Healthcare",
        note: "Pioneered Angular adoption from v1 to v2+. Built enterprise solutions for DoD \
and healthcare clients. Mentored UI/UX teams across waterfall and agile methodologies.",
    },
    TimelineEntry {
        period: "2007 - 2012",
        role: "Senior UI Developer & Architect",
        company: "Various (Travelers, A&E Television, iiCREATiVE)",
        note: "Delivered high-profile projects for History Channel, Criss Angel Mindfreak, \
The Sopranos. Clients included Aetna, Prudential, LeGrand, CertainTeed.",
    },
    TimelineEntry {
        period: "2003 - 2007",
        role: "Web Developer & E-commerce Specialist",
        company: "Web Solutions, Collectibles Online, Bizatomic",
        note: "Early career building e-commerce platforms and web solutions. Established \
foundation in full-stack development and user experience design.",
    },
];

pub const EXPERTISE: &[ExpertiseGroup] = &[
    ExpertiseGroup {
        category: "AI & LLM",
        skills: &[
            "Claude 3.x-4.5 Opus",
            "GPT-5 Codex",
            "Cursor AI",
            "Devin AI",
            "RAG",
            "MCP",
            "Agentic AI",
            "Sudolang",
        ],
    },
    ExpertiseGroup {
        category: "Frontend",
        skills: &[
            "Angular 1-20+",
            "React",
            "TypeScript",
            "NgRx",
            "RxJS",
            "Signals",
            "HTML5",
            "SASS",
        ],
    },
    ExpertiseGroup {
        category: "Backend & APIs",
        skills: &["NestJS", "Node.js", "Express", "Java", "Spring Boot", "REST", "GraphQL"],
    },
    ExpertiseGroup {
        category: "Cloud & DevOps",
        skills: &["AWS", "Azure", "Docker", "Kubernetes", "Jenkins", "GitHub Actions", "CI/CD"],
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Gen AI Ops Certified",
    "SAFe Agile Certified",
    "Dale Carnegie Leadership",
];

pub const PERSONAS: &[PersonaCard] = &[
    PersonaCard {
        title: "The Builder",
        lead: "I'm a guy who lives and breathes building things. There's something magical \
about taking an idea and watching it come to life through elegant, well-crafted code.",
        quote: "Whether it's architecting enterprise-scale applications or building a pizza \
dough calculator, I find deep satisfaction in designing and building.",
    },
    PersonaCard {
        title: "The Chef",
        lead: "They say do what you like, not what you love, for your career. When I step \
away from the screen, you'll find me in the kitchen. Cooking is my other passion.",
        quote: "There's a beautiful parallel between coding and cooking: both require \
creativity, precision, and the patience to perfect your craft.",
    },
    PersonaCard {
        title: "The Leader",
        lead: "20+ years in tech have taught me that the best solutions come from \
understanding people, not just code.",
        quote: "I've led teams across continents, mentored engineers at every level, and \
helped organizations navigate the exciting (and sometimes turbulent) waters of digital \
transformation.",
    },
    PersonaCard {
        title: "An AI Pioneer",
        lead: "Today, I'm focused on the frontier of AI, helping enterprises harness the \
power of large language models responsibly and effectively.",
        quote: "It's the most exciting time to be in tech, I've finally been able to move at \
the speed my brain operates.",
    },
];

pub const HOBBIES: &[Hobby] = &[
    Hobby {
        title: "Cooking",
        note: "I love everything about cooking. It fascinates me because it's one of the few \
things in this world that activates all of your senses. Art, science, entertainment, \
everything all-in-one.",
    },
    Hobby {
        title: "Photography",
        note: "Capturing moments through the lens, with a focus on landscapes and street \
photography. Love experimenting with long exposures during storms.",
    },
    Hobby {
        title: "Tea Culture",
        note: "Appreciating the art of tea. From Pu-Erh to Oolong, I haven't met a tea I \
didn't like.",
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod { label: "Email", value: "davidaimi@gmail.com" },
    ContactMethod { label: "GitHub", value: "github.com/david-aimi" },
    ContactMethod { label: "LinkedIn", value: "linkedin.com/in/david-aimi" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_eq!(CORE_SKILLS.len(), 8);
        assert_eq!(STATS.len(), 3);
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(TIMELINE.len(), 6);
        assert_eq!(EXPERTISE.len(), 4);
        assert_eq!(HOBBIES.len(), 3);
        assert_eq!(CONTACT_METHODS.len(), 3);
    }

    #[test]
    fn every_project_carries_tags_and_metrics() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert_eq!(project.metrics.len(), 3, "{}", project.title);
        }
    }

    #[test]
    fn featured_project_is_the_rag_pipeline() {
        assert_eq!(featured_project().title, "Enterprise RAG Pipeline");
    }

    #[test]
    fn experience_curve_is_chronological_and_growing() {
        for pair in EXPERIENCE_CURVE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
    }
}
