use tracing::debug;

use crate::{
    content::{application::ports::outgoing::ContentQuery, domain::SectionId},
    navigation::{
        application::ports::incoming::use_cases::{
            ActiveSection, ActiveSectionQuery, ResolveActiveSectionError,
            ResolveActiveSectionUseCase,
        },
        domain::{ScrollTracker, StaticGeometry},
    },
};

#[derive(Debug, Clone)]
pub struct ResolveActiveSectionService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> ResolveActiveSectionService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    fn tracker(&self, previous: Option<SectionId>) -> Result<ScrollTracker, ResolveActiveSectionError> {
        let sections = self.query.content().sections.clone();
        let tracker = match previous {
            Some(previous) => ScrollTracker::resume(sections, previous)?,
            None => ScrollTracker::new(sections)?,
        };
        Ok(tracker)
    }
}

impl<Q> ResolveActiveSectionUseCase for ResolveActiveSectionService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, query: ActiveSectionQuery) -> Result<ActiveSection, ResolveActiveSectionError> {
        let geometry = StaticGeometry::new(query.scroll_offset, query.viewport_height)?
            .with_regions(query.regions)?;

        let mounting = query.previous.is_none();
        let tracker = self.tracker(query.previous)?;
        let updates = tracker.subscribe();

        let active = if mounting {
            tracker.mount(&geometry)
        } else {
            tracker.on_scroll(&geometry)
        };
        let changed = updates.has_changed().unwrap_or(false);

        debug!(active = %active, changed, "Active section resolved");

        Ok(ActiveSection {
            nav: tracker.nav_items(),
            active,
            changed,
        })
    }

    fn initial(&self) -> Result<ActiveSection, ResolveActiveSectionError> {
        let tracker = self.tracker(None)?;

        Ok(ActiveSection {
            active: tracker.active(),
            nav: tracker.nav_items(),
            changed: false,
        })
    }
}
