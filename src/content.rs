use crate::glyph::Glyph;

/// Element ids of the page sections, used as in-page link targets.
pub mod anchor {
    pub const ABOUT: &str = "about";
    pub const SKILLS: &str = "skills";
    pub const PROJECTS: &str = "projects";
    pub const EXPERIENCE: &str = "experience";
    pub const CONTACT: &str = "contact";
}

pub const OWNER: &str = "Neha Suram";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "About",
        anchor: anchor::ABOUT,
    },
    NavLink {
        label: "Tech Stack",
        anchor: anchor::SKILLS,
    },
    NavLink {
        label: "Projects",
        anchor: anchor::PROJECTS,
    },
    NavLink {
        label: "Experience",
        anchor: anchor::EXPERIENCE,
    },
    NavLink {
        label: "Contact",
        anchor: anchor::CONTACT,
    },
];

pub mod hero {
    use crate::glyph::Glyph;

    pub const TITLE: &str = "NEHA SURAM";
    pub const SUBTITLE: &str =
        "Software Engineer · Full Stack · Cloud · GenAI · Open-Source Contributor";
    pub const TEXT: &str = "I build scalable cloud-native applications, intelligent systems, and high-performance software that ships reliably in real-world environments.";
    pub static BACKDROP: &[Glyph] = &[
        Glyph::React,
        Glyph::Aws,
        Glyph::Docker,
        Glyph::Python,
        Glyph::NodeJs,
    ];

    pub const POPUP_TITLE: &str = "Thanks for visiting 👋";
    pub const POPUP_TEXT: &str =
        "I’m Neha, a Software Engineer. Would you like to connect or reach out?";
    pub const POPUP_CONNECT: &str = "Yes, let’s connect";
    pub const POPUP_DECLINE: &str = "No, thanks";
}

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "I’m a Software Engineer with a Master’s in Computer Science and hands-on experience building full-stack applications, backend microservices, and data-driven systems. I enjoy owning features end-to-end, from understanding requirements and designing APIs to implementation, testing, and deployment.",
    "My core strengths are backend engineering and system thinking. I care deeply about clean architecture, database performance, and building services that behave well under load. I’ve worked extensively with RESTful APIs, SQL and NoSQL databases, and cloud-native systems on AWS.",
    "I actively contribute to open-source by fixing bugs, improving documentation, and collaborating through pull requests and code reviews.",
    "Open source has strengthened my ability to write clean, readable code and work effectively with distributed engineering teams.",
    "I’ve also explored lower-level systems and AI-driven applications, from implementing operating system components in C to building computer vision, machine learning, and blockchain-based projects. I’m especially excited about GenAI and combining ML with reliable software engineering practices.",
    "I’m currently seeking Software Engineer roles where I can contribute to impactful products, grow technically, and collaborate with strong engineering teams.",
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub glyphs: &'static [Glyph],
    pub items: &'static [&'static str],
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming Languages",
        glyphs: &[Glyph::Python, Glyph::Java, Glyph::CLang],
        items: &["Python", "Java", "C", "JavaScript", "R"],
    },
    SkillGroup {
        title: "Frontend",
        glyphs: &[Glyph::React, Glyph::Angular, Glyph::Html5, Glyph::Css3],
        items: &["React", "Angular", "HTML", "CSS", "TypeScript"],
    },
    SkillGroup {
        title: "Backend & Systems",
        glyphs: &[Glyph::NodeJs, Glyph::Cloud],
        items: &[
            "Node.js",
            "Django",
            "FastAPI",
            "Spring Boot",
            "Microservices",
            "Kafka",
            "RabbitMQ",
            "REST APIs",
        ],
    },
    SkillGroup {
        title: "AI / ML & Data",
        glyphs: &[Glyph::Brain],
        items: &[
            "TensorFlow",
            "PyTorch",
            "scikit-learn",
            "OpenCV",
            "Generative AI",
            "Pandas",
            "NumPy",
        ],
    },
    SkillGroup {
        title: "Cloud & DevOps",
        glyphs: &[Glyph::Aws, Glyph::Docker, Glyph::Cloud],
        items: &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD"],
    },
    SkillGroup {
        title: "Engineering Practices",
        glyphs: &[Glyph::Tools],
        items: &[
            "OOP",
            "SOLID",
            "Agile",
            "Git",
            "Automated Testing",
            "Blockchain",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Real-Time Vehicle Collision Detection System",
        bullets: &[
            "Built a real-time YOLO + OpenCV pipeline processing ~25 FPS live traffic video streams.",
            "Implemented bounding-box detection and collision logic for real-time alerts.",
            "Optimized inference pipeline to reduce false positives under challenging lighting and weather conditions.",
        ],
        tags: &["Python", "YOLO", "OpenCV", "NumPy"],
    },
    Project {
        title: "Smart Healthcare Record Management & Disease Forecasting",
        bullets: &[
            "Designed a blockchain-backed storage layer to ensure tamper-proof medical records.",
            "Integrated machine learning models to forecast common diseases.",
            "Built secure REST APIs and a React UI to reduce record retrieval latency.",
        ],
        tags: &["Blockchain", "Python", "ML", "React"],
    },
    Project {
        title: "PINTOS Operating System – User Programs & Syscalls",
        bullets: &[
            "Implemented argument passing, system call handling, and user process management in the Pintos teaching OS.",
            "Developed a custom argument parser to improve command-line processing efficiency.",
            "Strengthened memory safety by fixing vulnerabilities that caused kernel crashes.",
            "Gained hands-on experience with low-level C programming, kernel debugging, and OS internals.",
        ],
        tags: &["C", "Operating Systems", "System Calls", "Memory Management"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub glyph: Glyph,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub focus: &'static str,
    pub bullets: &'static [&'static str],
    pub tools: &'static [Tool],
}

impl Job {
    pub fn heading(&self) -> String {
        format!("{} — {}", self.role, self.company)
    }

    pub fn meta(&self) -> String {
        format!("{} · {}", self.period, self.focus)
    }
}

pub static JOBS: &[Job] = &[
    Job {
        role: "Software Development Intern",
        company: "Aspectsites Technologies",
        period: "Jun 2023 – Feb 2024",
        focus: "Cloud & Backend",
        bullets: &[
            "Developed cloud-native microservices using Django/FastAPI on AWS.",
            "Built and secured 10+ REST APIs with authentication, validation, and error handling.",
            "Optimized SQL and NoSQL queries, improving backend performance by ~30%.",
            "Wrote automated unit and integration tests to improve production reliability.",
        ],
        tools: &[
            Tool {
                glyph: Glyph::Python,
                label: "Python",
            },
            Tool {
                glyph: Glyph::Cloud,
                label: "FastAPI",
            },
            Tool {
                glyph: Glyph::Aws,
                label: "AWS",
            },
            Tool {
                glyph: Glyph::Database,
                label: "MySQL",
            },
            Tool {
                glyph: Glyph::Docker,
                label: "Docker",
            },
        ],
    },
    Job {
        role: "Software Engineering Intern",
        company: "HCL Technologies",
        period: "Jan 2023 – Apr 2023",
        focus: "Frontend / Full Stack",
        bullets: &[
            "Built React-based single-page applications serving 500+ users.",
            "Integrated Node.js backend services and REST APIs.",
            "Improved UI performance and accessibility by ~25%.",
            "Collaborated with designers and backend engineers in Agile teams.",
        ],
        tools: &[
            Tool {
                glyph: Glyph::React,
                label: "React",
            },
            Tool {
                glyph: Glyph::NodeJs,
                label: "Node.js",
            },
            Tool {
                glyph: Glyph::Html5,
                label: "HTML",
            },
            Tool {
                glyph: Glyph::Css3,
                label: "CSS",
            },
            Tool {
                glyph: Glyph::Github,
                label: "Git",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
    /// Opens in a new tab.
    pub external: bool,
}

pub mod contact {
    pub const HEADING: &str = "Let’s Connect";
    pub const PITCH_LEAD: &str = "I’m actively looking for ";
    pub const PITCH_ROLES: &str = "Software Engineer / Full Stack / Cloud";
    pub const PITCH_TAIL: &str =
        " roles. If you’re hiring or want to collaborate, I’d love to connect.";
}

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        href: "mailto:nehasuram04@gmail.com",
        glyph: Glyph::Envelope,
        external: false,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/neha-suram-5ab929215",
        glyph: Glyph::Linkedin,
        external: true,
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/Nehareddy0404",
        glyph: Glyph::Github,
        external: true,
    },
];
