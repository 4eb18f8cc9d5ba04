mod get_page;
mod get_page_view;

pub use get_page::get_page_handler;
pub use get_page_view::{__path_get_page_view_handler, get_page_view_handler, PageQuery};
