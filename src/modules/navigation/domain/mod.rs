pub mod active_section;
pub mod geometry;
pub mod scroll_tracker;

pub use active_section::resolve_active_section;
pub use geometry::{GeometryError, Region, StaticGeometry, ViewportGeometry};
pub use scroll_tracker::{nav_items, NavItem, ScrollTracker, ScrollTrackerError};
