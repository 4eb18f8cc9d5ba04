mod resolve_active_section_use_case;

pub use resolve_active_section_use_case::{
    ActiveSection, ActiveSectionQuery, ResolveActiveSectionError, ResolveActiveSectionUseCase,
};
