use crate::content::domain::{
    CertificationEntry, ContactInfo, EducationEntry, ExperienceEntry, PortfolioContent, Profile,
    ProjectEntry, Section, SectionId, SkillEntry,
};

fn skill(name: &str, category: &str) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        category: category.to_string(),
    }
}

fn section(id: &str, label: &str) -> Section {
    Section {
        id: SectionId::new(id),
        label: label.to_string(),
    }
}

/// Small, valid content set shared by unit and handler tests.
///
/// Sections: hero, about, skills, experience.
/// Skills (in order): AWS, Docker, Ansible, DHCP, DNS, Python, TCP/IP.
/// Projects: one with a repository link, one without.
pub fn sample_content() -> PortfolioContent {
    PortfolioContent {
        schema_version: PortfolioContent::SCHEMA_VERSION,
        profile: Profile {
            name: "Test Person".to_string(),
            headline: "DevOps & Backend Engineer".to_string(),
            about: "Builds reliable systems with automation in mind.".to_string(),
            resume_path: "/resume.pdf".to_string(),
        },
        sections: vec![
            section("hero", "Home"),
            section("about", "About"),
            section("skills", "Skills"),
            section("experience", "Experience"),
        ],
        skills: vec![
            skill("AWS", "Cloud"),
            skill("Docker", "DevOps"),
            skill("Ansible", "DevOps"),
            skill("DHCP", "Networking"),
            skill("DNS", "Networking"),
            skill("Python", "Languages"),
            skill("TCP/IP", "Networking"),
        ],
        experience: vec![ExperienceEntry {
            role: "DevOps Engineer".to_string(),
            company: "Example Corp".to_string(),
            period: "2021 - 2023".to_string(),
            highlights: vec!["Automated deployments with Ansible".to_string()],
        }],
        education: vec![EducationEntry {
            institution: "Example University".to_string(),
            degree: "M.S. Computer Science".to_string(),
            period: "2023 - 2025".to_string(),
            gpa: "3.8".to_string(),
            details: vec![],
        }],
        certifications: vec![CertificationEntry {
            name: "Cloud Practitioner".to_string(),
            issuer: "AWS".to_string(),
        }],
        projects: vec![
            ProjectEntry {
                title: "Health Integration Dashboard".to_string(),
                description: "Wearable data visualised with Dash and Plotly.".to_string(),
                tags: vec!["Python".to_string(), "PostgreSQL".to_string()],
                link: Some("https://github.com/RishikVaka28/oura-dashboard".to_string()),
            },
            ProjectEntry {
                title: "Product Showcase Website".to_string(),
                description: "Static product site.".to_string(),
                tags: vec!["HTML".to_string(), "CSS".to_string()],
                link: None,
            },
        ],
        contact: ContactInfo {
            email: "someone@example.com".to_string(),
            github_url: "https://github.com/someone".to_string(),
            linkedin_url: "https://www.linkedin.com/in/someone".to_string(),
        },
    }
}
