mod get_content;
mod get_projects;
mod get_sections;

pub use get_content::{__path_get_content_handler, get_content_handler};
pub use get_projects::{__path_get_projects_handler, get_projects_handler};
pub use get_sections::{__path_get_sections_handler, get_sections_handler, SectionResponse};
