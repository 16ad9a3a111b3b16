// Profile data: everything the portfolio prints lives here as a single
// compile-time literal. Renderers only ever borrow it.

/// Tools listed under one technology category. Most categories are split
/// into sub-groups (`js`, `css`, ...); a few are a single flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tools {
    Grouped(&'static [(&'static str, &'static [&'static str])]),
    Flat(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub tools: Tools,
}

/// Where people can reach the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub email: &'static str,
    pub booking: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub repository: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub pronouns: &'static str,
    pub languages: &'static [&'static str],
    pub ask_me_about: &'static [&'static str],
    /// Printed in this order.
    pub technologies: &'static [TechCategory],
    pub architecture: &'static [(&'static str, &'static [&'static str])],
    pub current_focus: &'static str,
    pub fun_fact: &'static str,
    pub links: Links,
}

pub static PROFILE: Profile = Profile {
    name: "Dipesh Rajoria",
    pronouns: "He | Him",
    languages: &["TypeScript", "Javascript", "Python"],
    ask_me_about: &[
        "frontend engineering",
        "system design",
        "performance optimization",
        "fitness",
    ],
    technologies: &[
        TechCategory {
            name: "Front-End",
            icon: "📂",
            tools: Tools::Grouped(&[
                ("js", &["React", "Next.js"]),
                ("css", &["Sass", "Tailwind", "Styled Components"]),
                (
                    "uiLibraries",
                    &[
                        "shadcn",
                        "grauity (design and developed in house)",
                        "Material UI",
                        "Ant Design",
                        "Chakra UI",
                    ],
                ),
            ]),
        },
        TechCategory {
            name: "Back-End",
            icon: "📂",
            tools: Tools::Grouped(&[
                ("js", &["Node", "Express", "NestJS"]),
                ("python", &["Django"]),
                ("go", &["Gin"]),
            ]),
        },
        TechCategory {
            name: "Mobile App",
            icon: "📂",
            tools: Tools::Grouped(&[("crossPlatform", &["React Native"])]),
        },
        TechCategory {
            name: "Cloud Services",
            icon: "📂",
            tools: Tools::Grouped(&[("aws", &["EC2", "SMS", "S3", "Lambda", "CloudFront"])]),
        },
        TechCategory {
            name: "Databases",
            icon: "🗃️",
            tools: Tools::Flat(&["PostgreSQL", "MongoDB", "Firebase Realtime DB", "redis"]),
        },
        TechCategory {
            name: "Misc",
            icon: "🔌",
            tools: Tools::Flat(&["Socket.IO", "REST APIs", "WebSockets", "Cloud Functions"]),
        },
        TechCategory {
            name: "Generative AI",
            icon: "🤖",
            tools: Tools::Flat(&["OpenAI", "Prompt Engineering"]),
        },
    ],
    architecture: &[
        ("Front-End", &["SPA", "SSR"]),
        ("Back-End", &["microservices", "monolithic", "serverless"]),
    ],
    current_focus: "Open source contribution and learning new technologies",
    fun_fact: "I once debugged a memory leak that saved 8+ re-renders per keystroke!",
    links: Links {
        email: "dipeshrajoria45@gmail.com",
        booking: "https://calendly.com/dipeshrajoria",
        github: "https://github.com/DipeshRajoria007",
        linkedin: "https://www.linkedin.com/in/dipeshrajoria/",
        repository: "https://github.com/DipeshRajoria007/dipesh-rajoria",
    },
};
