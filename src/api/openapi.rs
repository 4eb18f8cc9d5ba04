use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::content::adapter::incoming::web::routes::SectionResponse;
use crate::content::domain::{
    CertificationEntry, ContactInfo, EducationEntry, ExperienceEntry, PortfolioContent, Profile,
    ProjectEntry, Section, SectionId, SkillEntry,
};
use crate::hero::application::ports::incoming::use_cases::HeroView;
use crate::hero::domain::{Glyph, TypedText};
use crate::navigation::adapter::incoming::web::routes::{
    ActiveSectionRequest, SectionRegionRequest,
};
use crate::navigation::application::ports::incoming::use_cases::ActiveSection;
use crate::navigation::domain::{NavItem, Region};
use crate::page::domain::{PageView, SkillsPanel};
use crate::skills::adapter::incoming::web::routes::SkillTransitionRequest;
use crate::skills::application::ports::incoming::use_cases::FilteredSkills;
use crate::skills::domain::SkillTransition;
use crate::theme::adapter::incoming::web::routes::ThemeResponse;
use crate::theme::domain::ThemePreference;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content, theme and navigation endpoints for the single-page portfolio"
    ),
    paths(
        // Content
        crate::content::adapter::incoming::web::routes::get_content_handler,
        crate::content::adapter::incoming::web::routes::get_sections_handler,
        crate::content::adapter::incoming::web::routes::get_projects_handler,

        // Skills
        crate::skills::adapter::incoming::web::routes::get_skills_handler,
        crate::skills::adapter::incoming::web::routes::skill_transition_handler,

        // Theme
        crate::theme::adapter::incoming::web::routes::get_theme_handler,
        crate::theme::adapter::incoming::web::routes::toggle_theme_handler,

        // Navigation
        crate::navigation::adapter::incoming::web::routes::initial_active_section_handler,
        crate::navigation::adapter::incoming::web::routes::resolve_active_section_handler,

        // Hero / page
        crate::hero::adapter::incoming::web::routes::get_hero_handler,
        crate::page::adapter::incoming::web::routes::get_page_view_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioContent>,
            ErrorResponse,
            ErrorDetail,

            // Content
            PortfolioContent,
            Profile,
            Section,
            SectionId,
            SectionResponse,
            SkillEntry,
            ExperienceEntry,
            EducationEntry,
            CertificationEntry,
            ProjectEntry,
            ContactInfo,

            // Skills
            FilteredSkills,
            SkillTransition,
            SkillTransitionRequest,

            // Theme
            ThemePreference,
            ThemeResponse,

            // Navigation
            ActiveSectionRequest,
            SectionRegionRequest,
            ActiveSection,
            NavItem,
            Region,

            // Hero / page
            HeroView,
            TypedText,
            Glyph,
            PageView,
            SkillsPanel
        )
    ),
    tags(
        (name = "content", description = "Static portfolio content"),
        (name = "skills", description = "Skill filtering"),
        (name = "theme", description = "Per-visitor light/dark preference"),
        (name = "navigation", description = "Active section tracking"),
        (name = "hero", description = "Hero banner"),
        (name = "page", description = "Page view model"),
    )
)]
pub struct ApiDoc;
