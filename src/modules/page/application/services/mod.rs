mod render_page_service;

pub use render_page_service::RenderPageService;
