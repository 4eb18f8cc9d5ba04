mod resolve_active_section;

pub use resolve_active_section::{
    __path_initial_active_section_handler, __path_resolve_active_section_handler,
    initial_active_section_handler, resolve_active_section_handler, ActiveSectionRequest,
    SectionRegionRequest,
};
