use serde::Serialize;
use utoipa::ToSchema;

use crate::content::domain::SectionId;
use crate::navigation::domain::{GeometryError, NavItem, Region, ScrollTrackerError};

/// One scroll event as reported by the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionQuery {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub regions: Vec<(SectionId, Region)>,
    /// Active section before this event. When absent the event is the
    /// page's mount and tracking starts from the first section.
    pub previous: Option<SectionId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActiveSection {
    pub active: SectionId,
    pub nav: Vec<NavItem>,
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveActiveSectionError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("No sections configured")]
    NoSections,
}

impl From<GeometryError> for ResolveActiveSectionError {
    fn from(err: GeometryError) -> Self {
        Self::InvalidGeometry(err.to_string())
    }
}

impl From<ScrollTrackerError> for ResolveActiveSectionError {
    fn from(err: ScrollTrackerError) -> Self {
        match err {
            ScrollTrackerError::NoSections => Self::NoSections,
            ScrollTrackerError::UnknownSection(id) => Self::UnknownSection(id),
        }
    }
}

pub trait ResolveActiveSectionUseCase: Send + Sync {
    fn execute(&self, query: ActiveSectionQuery) -> Result<ActiveSection, ResolveActiveSectionError>;

    /// Navigation state before any scroll event.
    fn initial(&self) -> Result<ActiveSection, ResolveActiveSectionError>;
}
