mod get_theme;
mod toggle_theme;

pub use get_theme::{__path_get_theme_handler, get_theme_handler, ThemeResponse};
pub use toggle_theme::{__path_toggle_theme_handler, toggle_theme_handler};
