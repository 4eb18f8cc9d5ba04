mod resolve_theme_use_case;
mod toggle_theme_use_case;

pub use resolve_theme_use_case::{ResolveThemeError, ResolveThemeUseCase};
pub use toggle_theme_use_case::{ToggleThemeError, ToggleThemeUseCase};
