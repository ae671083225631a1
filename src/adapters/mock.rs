//! Deterministic placeholder content, shaped exactly like live sheet rows.
//!
//! Served whenever credentials are missing or a remote read fails, so the
//! presentation layer always has something to render.

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Rows for the sheet named by the prefix before `!` in the range key,
/// matched case-insensitively. Unknown prefixes yield no rows.
pub fn fallback_rows(range: &str) -> Vec<Vec<String>> {
    let sheet = range.split('!').next().unwrap_or_default().to_lowercase();
    match sheet.as_str() {
        "about" => about_rows(),
        "skills" => skills_rows(),
        "projects" => projects_rows(),
        "contact" => contact_rows(),
        _ => Vec::new(),
    }
}

fn about_rows() -> Vec<Vec<String>> {
    vec![
        row(&["name", "Jordan Reyes"]),
        row(&["title", "Senior Backend Engineer"]),
        row(&[
            "summary",
            "Building scalable systems and crafting elegant solutions. \
             Passionate about distributed systems, microservices architecture, \
             and creating impactful software.",
        ]),
        row(&[
            "description",
            "With over 9 years of experience in software engineering, I \
             specialize in building robust backend systems and scalable \
             architectures.",
        ]),
        row(&[
            "expertise",
            "My expertise spans multiple programming languages and frameworks, \
             with a focus on efficient, maintainable, and innovative solutions.",
        ]),
        row(&["yearsExperience", "9"]),
        row(&["projectsCompleted", "50"]),
        row(&["technologies", "15"]),
    ]
}

fn skills_rows() -> Vec<Vec<String>> {
    vec![
        row(&["Languages", "Python, Golang, JavaScript, TypeScript, Rust"]),
        row(&["Backend", "Node.js, Django, FastAPI, Express.js, PostgreSQL"]),
        row(&["Frontend", "React, Vue.js, HTML5, CSS3, Tailwind CSS"]),
        row(&["Database", "PostgreSQL, MongoDB, Redis, MySQL, Elasticsearch"]),
        row(&["DevOps", "Docker, Kubernetes, AWS, CI/CD, Linux"]),
        row(&["Tools", "Git, VSCode, Postman, Jira, Figma"]),
    ]
}

fn projects_rows() -> Vec<Vec<String>> {
    vec![
        row(&["Title", "Description", "TechStack", "Github", "Demo", "Featured"]),
        row(&[
            "E-Commerce Platform",
            "Built a scalable microservices-based e-commerce platform handling 100k+ daily users",
            "Node.js, React, PostgreSQL, Redis, Docker",
            "https://github.com/jordanreyes/ecommerce-platform",
            "https://demo.example.com",
            "TRUE",
        ]),
        row(&[
            "Real-time Analytics Dashboard",
            "Developed a real-time analytics dashboard processing millions of events per day",
            "Python, FastAPI, MongoDB, React, WebSocket",
            "https://github.com/jordanreyes/analytics-dashboard",
            "",
            "TRUE",
        ]),
        row(&[
            "Task Management System",
            "Created a collaborative task management system with real-time updates",
            "Golang, Vue.js, PostgreSQL, Redis",
            "https://github.com/jordanreyes/task-manager",
            "",
            "FALSE",
        ]),
    ]
}

fn contact_rows() -> Vec<Vec<String>> {
    vec![
        row(&["email", "jordan.reyes@example.com"]),
        row(&["github", "jordanreyes"]),
        row(&["linkedin", "jordanreyes"]),
        row(&["twitter", "jordanreyes"]),
        row(&[
            "message",
            "I'm always interested in new opportunities and collaborations. \
             Feel free to reach out if you'd like to work together or just \
             have a chat.",
        ]),
    ]
}
