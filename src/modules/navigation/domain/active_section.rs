use crate::content::domain::{Section, SectionId};
use crate::navigation::domain::geometry::ViewportGeometry;

/// The section whose region straddles the viewport midpoint.
///
/// Sections are scanned last to first, so when regions overlap at the
/// midpoint the later one in document order wins. Sections without a region
/// are skipped. `None` means the midpoint is outside every known region.
pub fn resolve_active_section<'a, G>(sections: &'a [Section], geometry: &G) -> Option<&'a SectionId>
where
    G: ViewportGeometry + ?Sized,
{
    let mid = geometry.midpoint();

    sections
        .iter()
        .rev()
        .find(|section| {
            geometry
                .region(&section.id)
                .is_some_and(|region| region.contains(mid))
        })
        .map(|section| &section.id)
}
