use email_address::EmailAddress;
use regex::Regex;
use std::collections::HashSet;

use crate::content::domain::entities::PortfolioContent;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("Unsupported schema version {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    #[error("Content declares no sections")]
    NoSections,

    #[error("Invalid section id: {0:?}")]
    InvalidSectionId(String),

    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),

    #[error("Duplicate skill name: {0}")]
    DuplicateSkillName(String),

    #[error("Experience entry {index} is missing a role or company")]
    IncompleteExperience { index: usize },

    #[error("Project {title:?} has an invalid link: {link}")]
    InvalidProjectLink { title: String, link: String },

    #[error("Profile is missing a name or headline")]
    IncompleteProfile,

    #[error("Resume path must be absolute: {0}")]
    InvalidResumePath(String),

    #[error("Invalid contact email: {0}")]
    InvalidContactEmail(String),

    #[error("Invalid profile URL: {0}")]
    InvalidProfileUrl(String),
}

/// Structural checks applied to content before it is served.
pub struct ContentValidator {
    section_id: Regex,
    http_url: Regex,
}

impl ContentValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            section_id: Regex::new(r"^[a-z][a-z0-9-]*$")?,
            http_url: Regex::new(r"^https?://[^\s/$.?#][^\s]*$")?,
        })
    }

    pub fn validate(&self, content: &PortfolioContent) -> Result<(), ContentValidationError> {
        if content.schema_version != PortfolioContent::SCHEMA_VERSION {
            return Err(ContentValidationError::UnsupportedSchemaVersion {
                found: content.schema_version,
                expected: PortfolioContent::SCHEMA_VERSION,
            });
        }

        self.validate_profile(content)?;
        self.validate_sections(content)?;

        let mut skill_names = HashSet::new();
        for skill in &content.skills {
            if !skill_names.insert(skill.name.as_str()) {
                return Err(ContentValidationError::DuplicateSkillName(
                    skill.name.clone(),
                ));
            }
        }

        for (index, entry) in content.experience.iter().enumerate() {
            if entry.role.trim().is_empty() || entry.company.trim().is_empty() {
                return Err(ContentValidationError::IncompleteExperience { index });
            }
        }

        for project in &content.projects {
            if let Some(link) = &project.link {
                if !self.http_url.is_match(link) {
                    return Err(ContentValidationError::InvalidProjectLink {
                        title: project.title.clone(),
                        link: link.clone(),
                    });
                }
            }
        }

        self.validate_contact(content)
    }

    fn validate_profile(&self, content: &PortfolioContent) -> Result<(), ContentValidationError> {
        let profile = &content.profile;
        if profile.name.trim().is_empty() || profile.headline.trim().is_empty() {
            return Err(ContentValidationError::IncompleteProfile);
        }
        if !profile.resume_path.starts_with('/') {
            return Err(ContentValidationError::InvalidResumePath(
                profile.resume_path.clone(),
            ));
        }
        Ok(())
    }

    fn validate_sections(&self, content: &PortfolioContent) -> Result<(), ContentValidationError> {
        if content.sections.is_empty() {
            return Err(ContentValidationError::NoSections);
        }

        let mut seen = HashSet::new();
        for section in &content.sections {
            let id = section.id.as_str();
            if !self.section_id.is_match(id) {
                return Err(ContentValidationError::InvalidSectionId(id.to_string()));
            }
            if !seen.insert(id) {
                return Err(ContentValidationError::DuplicateSectionId(id.to_string()));
            }
        }
        Ok(())
    }

    fn validate_contact(&self, content: &PortfolioContent) -> Result<(), ContentValidationError> {
        let contact = &content.contact;
        if !EmailAddress::is_valid(&contact.email) {
            return Err(ContentValidationError::InvalidContactEmail(
                contact.email.clone(),
            ));
        }
        for url in [&contact.github_url, &contact.linkedin_url] {
            if !self.http_url.is_match(url) {
                return Err(ContentValidationError::InvalidProfileUrl(url.clone()));
            }
        }
        Ok(())
    }
}
