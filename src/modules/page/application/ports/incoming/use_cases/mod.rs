mod render_page_use_case;

pub use render_page_use_case::{RenderPageError, RenderPageUseCase};
