use crate::site::{
    Cluster, ExperienceEntry, Pillar, Project, SiteData, Stat, TechCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Static placeholder dataset, used when the content API is unreachable or
/// returns nothing for the settings, pillars and projects collections.
pub fn site_data() -> SiteData {
    SiteData {
        name: "Your Name".to_owned(),
        initials: "YN".to_owned(),
        eyebrow: "Developer · Designer · Builder".to_owned(),
        title: "Building things that matter at the intersection of code & design.".to_owned(),
        subtitle: "Independent developer and designer crafting digital experiences, tools, \
                   and platforms. Focused on creative technology, computational design, and \
                   rapid prototyping."
            .to_owned(),
        location: "City, Country".to_owned(),
        email: "hello@example.com".to_owned(),
        instagram: "https://www.instagram.com".to_owned(),
        linkedin: "https://www.linkedin.com".to_owned(),
        stats: vec![
            Stat {
                label: "Years Active".to_owned(),
                value: "5+".to_owned(),
            },
            Stat {
                label: "Projects Shipped".to_owned(),
                value: "30+".to_owned(),
            },
            Stat {
                label: "Based In".to_owned(),
                value: "City, Country".to_owned(),
            },
        ],
        pillars: vec![
            Pillar {
                icon: "⚡".to_owned(),
                title: "Creative Technology".to_owned(),
                tagline: "Turning ideas into interactive experiences".to_owned(),
                description: "Building custom tools, visualizations, and interactive \
                              installations that push the boundaries of what's possible on \
                              the web and beyond."
                    .to_owned(),
                keywords: strings(&["WebGL", "Three.js", "Canvas", "Shaders", "Generative Art"]),
            },
            Pillar {
                icon: "🏗️".to_owned(),
                title: "Computational Design".to_owned(),
                tagline: "Algorithms that shape the physical world".to_owned(),
                description: "Applying parametric and algorithmic approaches to architecture, \
                              product design, and fabrication workflows. From concept to \
                              production."
                    .to_owned(),
                keywords: strings(&["Rhino", "Grasshopper", "Python", "Parametric", "BIM"]),
            },
            Pillar {
                icon: "🚀".to_owned(),
                title: "Rapid Prototyping".to_owned(),
                tagline: "From zero to working product, fast".to_owned(),
                description: "Full-stack development with a bias toward shipping. Building \
                              MVPs, dashboards, and internal tools that solve real problems \
                              quickly."
                    .to_owned(),
                keywords: strings(&["React", "Node.js", "Python", "APIs", "Databases"]),
            },
        ],
        clusters: vec![
            Cluster {
                name: "Web Applications".to_owned(),
                color: "var(--color-accent-1)".to_owned(),
                projects: strings(&[
                    "Dashboard Platform",
                    "Data Visualizer",
                    "Client Portal",
                    "Analytics Tool",
                ]),
            },
            Cluster {
                name: "Design Tools".to_owned(),
                color: "var(--color-accent-2)".to_owned(),
                projects: strings(&[
                    "Parametric Generator",
                    "Shape Grammar Engine",
                    "Layout Optimizer",
                    "Material Explorer",
                ]),
            },
            Cluster {
                name: "Experiments".to_owned(),
                color: "var(--color-accent-3)".to_owned(),
                projects: strings(&[
                    "Particle System",
                    "Audio Visualizer",
                    "Procedural City",
                    "Neural Canvas",
                ]),
            },
        ],
        projects: vec![
            placeholder_project(
                "Project Alpha",
                "A full-stack platform for managing design workflows and collaboration.",
                &["React", "Node.js", "PostgreSQL"],
                "2025",
            ),
            placeholder_project(
                "Project Beta",
                "Interactive data visualization dashboard for urban planning analysis.",
                &["D3.js", "Python", "GIS"],
                "2024",
            ),
            placeholder_project(
                "Project Gamma",
                "Parametric design tool for generating architectural facades from algorithms.",
                &["Rhino", "Grasshopper", "C#"],
                "2024",
            ),
            placeholder_project(
                "Project Delta",
                "Real-time 3D configurator for custom furniture with fabrication output.",
                &["Three.js", "WebGL", "CAD"],
                "2023",
            ),
            placeholder_project(
                "Project Epsilon",
                "AI-powered analysis tool for automating repetitive design tasks.",
                &["Python", "ML", "FastAPI"],
                "2023",
            ),
            placeholder_project(
                "Project Zeta",
                "Mobile-first portfolio builder with drag-and-drop layout editing.",
                &["React", "Firebase", "PWA"],
                "2022",
            ),
        ],
        experience: vec![
            ExperienceEntry {
                date: "2024 — Present".to_owned(),
                role: "Senior Developer".to_owned(),
                org: "Studio Name".to_owned(),
                description: "Leading development of digital products and internal tools for \
                              design workflows."
                    .to_owned(),
            },
            ExperienceEntry {
                date: "2022 — 2024".to_owned(),
                role: "Computational Designer".to_owned(),
                org: "Architecture Firm".to_owned(),
                description: "Developed custom Rhino/Grasshopper plugins and automated BIM \
                              pipelines."
                    .to_owned(),
            },
            ExperienceEntry {
                date: "2020 — 2022".to_owned(),
                role: "Full-Stack Developer".to_owned(),
                org: "Tech Startup".to_owned(),
                description: "Built and shipped web applications from concept to production."
                    .to_owned(),
            },
            ExperienceEntry {
                date: "2018 — 2020".to_owned(),
                role: "Junior Developer".to_owned(),
                org: "Digital Agency".to_owned(),
                description: "Frontend development, prototyping, and client-facing dashboard \
                              projects."
                    .to_owned(),
            },
        ],
        tech_stack: vec![
            TechCategory {
                category: "Languages".to_owned(),
                color: "var(--color-accent-1)".to_owned(),
                items: strings(&["JavaScript", "TypeScript", "Python", "C#", "HTML/CSS"]),
            },
            TechCategory {
                category: "Frameworks".to_owned(),
                color: "var(--color-accent-2)".to_owned(),
                items: strings(&["React", "Next.js", "Node.js", "FastAPI", "Express"]),
            },
            TechCategory {
                category: "Design Tools".to_owned(),
                color: "var(--color-accent-4)".to_owned(),
                items: strings(&["Rhino 3D", "Grasshopper", "Figma", "Blender", "AutoCAD"]),
            },
            TechCategory {
                category: "Data & Infra".to_owned(),
                color: "var(--color-accent-3)".to_owned(),
                items: strings(&["PostgreSQL", "MongoDB", "Docker", "AWS", "Git"]),
            },
        ],
    }
}

fn placeholder_project(title: &str, subtitle: &str, tags: &[&str], year: &str) -> Project {
    Project {
        title: title.to_owned(),
        subtitle: subtitle.to_owned(),
        description: None,
        tags: strings(tags),
        year: year.to_owned(),
        featured: false,
        media: None,
        youtube_url: None,
    }
}
