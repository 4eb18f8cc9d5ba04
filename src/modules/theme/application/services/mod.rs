mod resolve_theme_service;
mod toggle_theme_service;

pub use resolve_theme_service::ResolveThemeService;
pub use toggle_theme_service::ToggleThemeService;
