pub mod html;
pub mod view;

pub use html::render_html;
pub use view::{build_page_view, PageView, SkillsPanel};
