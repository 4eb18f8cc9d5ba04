mod resolve_active_section_service;

pub use resolve_active_section_service::ResolveActiveSectionService;
