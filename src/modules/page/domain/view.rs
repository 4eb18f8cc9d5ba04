use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    content::domain::{
        CertificationEntry, ContactInfo, EducationEntry, ExperienceEntry, PortfolioContent,
        Profile, ProjectEntry, SectionId, SkillEntry,
    },
    hero::domain::{type_out, TypedText},
    navigation::domain::{nav_items, NavItem},
    skills::domain::{filter_options, filter_skills, SkillSelection},
    theme::domain::ThemePreference,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillsPanel {
    pub selected: String,
    pub options: Vec<String>,
    pub skills: Vec<SkillEntry>,
}

/// Everything the page shows for one (theme, active section, filter) state.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub theme: ThemePreference,
    pub root_class: Option<String>,
    pub profile: Profile,
    pub headline: TypedText,
    pub active_section: SectionId,
    pub nav: Vec<NavItem>,
    pub skills: SkillsPanel,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub contact: ContactInfo,
    pub mailto: String,
}

pub fn build_page_view(
    content: &PortfolioContent,
    theme: ThemePreference,
    active: &SectionId,
    selection: &SkillSelection,
    stagger_ms: u64,
) -> PageView {
    PageView {
        theme,
        root_class: theme.root_class().map(str::to_string),
        profile: content.profile.clone(),
        headline: type_out(&content.profile.headline, stagger_ms),
        active_section: active.clone(),
        nav: nav_items(&content.sections, active),
        skills: SkillsPanel {
            selected: selection.label().to_string(),
            options: filter_options(&content.skills),
            skills: filter_skills(&content.skills, selection),
        },
        experience: content.experience.clone(),
        education: content.education.clone(),
        certifications: content.certifications.clone(),
        projects: content.projects.clone(),
        contact: content.contact.clone(),
        mailto: content.contact.mailto(),
    }
}
