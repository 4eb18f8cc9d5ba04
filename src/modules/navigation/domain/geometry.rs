use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::content::domain::SectionId;

/// Vertical extent of a section in document coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct Region {
    pub top: f64,
    pub bottom: f64,
}

impl Region {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Inclusive on both edges.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

/// Source of scroll position and section layout.
///
/// A browser supplies the real values; tests and the HTTP surface use
/// [`StaticGeometry`].
pub trait ViewportGeometry {
    fn scroll_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// `None` when the section is not present in the document.
    fn region(&self, id: &SectionId) -> Option<Region>;

    fn midpoint(&self) -> f64 {
        self.scroll_offset() + self.viewport_height() / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Viewport height must be a finite, non-negative number")]
    InvalidViewportHeight,

    #[error("Scroll offset must be a finite number")]
    InvalidScrollOffset,

    #[error("Region for section {0} is not a finite top <= bottom range")]
    InvalidRegion(String),

    #[error("Region for section {0} is given more than once")]
    DuplicateRegion(String),
}

/// A fixed snapshot of viewport geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticGeometry {
    scroll_offset: f64,
    viewport_height: f64,
    regions: HashMap<SectionId, Region>,
}

impl StaticGeometry {
    pub fn new(scroll_offset: f64, viewport_height: f64) -> Result<Self, GeometryError> {
        if !scroll_offset.is_finite() {
            return Err(GeometryError::InvalidScrollOffset);
        }
        if !viewport_height.is_finite() || viewport_height < 0.0 {
            return Err(GeometryError::InvalidViewportHeight);
        }

        Ok(Self {
            scroll_offset,
            viewport_height,
            regions: HashMap::new(),
        })
    }

    pub fn with_region(mut self, id: SectionId, region: Region) -> Result<Self, GeometryError> {
        if !region.top.is_finite() || !region.bottom.is_finite() || region.top > region.bottom {
            return Err(GeometryError::InvalidRegion(id.to_string()));
        }
        if self.regions.contains_key(&id) {
            return Err(GeometryError::DuplicateRegion(id.to_string()));
        }
        self.regions.insert(id, region);
        Ok(self)
    }

    pub fn with_regions<I>(self, regions: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = (SectionId, Region)>,
    {
        regions
            .into_iter()
            .try_fold(self, |geometry, (id, region)| geometry.with_region(id, region))
    }
}

impl ViewportGeometry for StaticGeometry {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn region(&self, id: &SectionId) -> Option<Region> {
        self.regions.get(id).copied()
    }
}
