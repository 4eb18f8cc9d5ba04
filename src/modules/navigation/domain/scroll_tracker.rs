use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;
use utoipa::ToSchema;

use crate::content::domain::{Section, SectionId};
use crate::navigation::domain::active_section::resolve_active_section;
use crate::navigation::domain::geometry::ViewportGeometry;
use crate::shared::observable::Observable;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScrollTrackerError {
    #[error("No sections to track")]
    NoSections,

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// One entry of the fixed navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One nav item per section, in declared order, flagging `active`.
pub fn nav_items(sections: &[Section], active: &SectionId) -> Vec<NavItem> {
    sections
        .iter()
        .map(|section| NavItem {
            id: section.id.clone(),
            label: section.label.clone(),
            href: section.id.anchor(),
            active: &section.id == active,
        })
        .collect()
}

/// Owns the active section.
///
/// Starts at the first section. Each recompute either moves to the section
/// under the viewport midpoint or, when the midpoint is outside every
/// region, keeps the last known value. The value is never cleared.
pub struct ScrollTracker {
    sections: Vec<Section>,
    active: Observable<SectionId>,
}

impl ScrollTracker {
    pub fn new(sections: Vec<Section>) -> Result<Self, ScrollTrackerError> {
        let first = sections
            .first()
            .map(|s| s.id.clone())
            .ok_or(ScrollTrackerError::NoSections)?;

        Ok(Self {
            sections,
            active: Observable::new(first),
        })
    }

    /// Resumes tracking from a previously reported active section.
    pub fn resume(sections: Vec<Section>, previous: SectionId) -> Result<Self, ScrollTrackerError> {
        if !sections.iter().any(|s| s.id == previous) {
            return Err(ScrollTrackerError::UnknownSection(previous.to_string()));
        }

        let tracker = Self::new(sections)?;
        tracker.active.set(previous);
        Ok(tracker)
    }

    pub fn active(&self) -> SectionId {
        self.active.get()
    }

    /// Initial recompute, so the nav is correct before any scrolling.
    pub fn mount<G>(&self, geometry: &G) -> SectionId
    where
        G: ViewportGeometry + ?Sized,
    {
        debug!(midpoint = geometry.midpoint(), "Scroll tracker mounted");
        self.recompute(geometry)
    }

    pub fn on_scroll<G>(&self, geometry: &G) -> SectionId
    where
        G: ViewportGeometry + ?Sized,
    {
        self.recompute(geometry)
    }

    /// Receiver of active-section changes; dropping it unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.active.subscribe()
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(&self.sections, &self.active())
    }

    fn recompute<G>(&self, geometry: &G) -> SectionId
    where
        G: ViewportGeometry + ?Sized,
    {
        if let Some(id) = resolve_active_section(&self.sections, geometry) {
            if self.active.set(id.clone()) {
                debug!(section = %id, "Active section changed");
            }
        }
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::domain::geometry::{Region, StaticGeometry};

    fn sections() -> Vec<Section> {
        ["hero", "about", "skills", "experience"]
            .into_iter()
            .map(|id| Section {
                id: SectionId::new(id),
                label: id.to_string(),
            })
            .collect()
    }

    fn layout(scroll: f64) -> StaticGeometry {
        StaticGeometry::new(scroll, 600.0)
            .unwrap()
            .with_regions([
                (SectionId::new("hero"), Region::new(200.0, 800.0)),
                (SectionId::new("about"), Region::new(800.0, 1400.0)),
                (SectionId::new("skills"), Region::new(1400.0, 2000.0)),
                (SectionId::new("experience"), Region::new(2000.0, 2600.0)),
            ])
            .unwrap()
    }

    #[test]
    fn initial_active_is_first_section() {
        let tracker = ScrollTracker::new(sections()).unwrap();

        assert_eq!(tracker.active().as_str(), "hero");
    }

    #[test]
    fn empty_section_list_is_rejected() {
        assert!(matches!(
            ScrollTracker::new(vec![]),
            Err(ScrollTrackerError::NoSections)
        ));
    }

    #[test]
    fn mount_resolves_immediately() {
        let tracker = ScrollTracker::new(sections()).unwrap();

        // midpoint 1100
        assert_eq!(tracker.mount(&layout(800.0)).as_str(), "about");
    }

    #[test]
    fn scrolling_moves_active_section() {
        let tracker = ScrollTracker::new(sections()).unwrap();
        tracker.mount(&layout(0.0));

        assert_eq!(tracker.on_scroll(&layout(1300.0)).as_str(), "skills");
        assert_eq!(tracker.on_scroll(&layout(1900.0)).as_str(), "experience");
    }

    #[test]
    fn midpoint_above_first_region_keeps_initial_value() {
        let tracker = ScrollTracker::new(sections()).unwrap();

        // midpoint 100, above the hero region
        assert_eq!(tracker.mount(&layout(-200.0)).as_str(), "hero");
    }

    #[test]
    fn midpoint_past_last_region_keeps_last_value() {
        let tracker = ScrollTracker::new(sections()).unwrap();
        tracker.on_scroll(&layout(1900.0));

        assert_eq!(tracker.on_scroll(&layout(9000.0)).as_str(), "experience");
    }

    #[test]
    fn resume_starts_from_previous_section() {
        let tracker = ScrollTracker::resume(sections(), SectionId::new("skills")).unwrap();
        assert_eq!(tracker.active().as_str(), "skills");

        assert!(matches!(
            ScrollTracker::resume(sections(), SectionId::new("blog")),
            Err(ScrollTrackerError::UnknownSection(id)) if id == "blog"
        ));
    }

    #[test]
    fn nav_items_flag_only_active_section() {
        let tracker = ScrollTracker::new(sections()).unwrap();
        tracker.on_scroll(&layout(800.0));

        let items = tracker.nav_items();
        let active: Vec<_> = items.iter().filter(|i| i.active).collect();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id.as_str(), "about");
        assert_eq!(active[0].href, "#about");
    }

    #[test]
    fn subscribers_see_changes_only() {
        let tracker = ScrollTracker::new(sections()).unwrap();
        let mut rx = tracker.subscribe();

        tracker.on_scroll(&layout(800.0));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_str(), "about");

        tracker.on_scroll(&layout(800.0));
        assert!(!rx.has_changed().unwrap());

        tracker.on_scroll(&layout(1300.0));
        assert_eq!(rx.borrow_and_update().as_str(), "skills");
    }
}
