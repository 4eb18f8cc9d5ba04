mod get_content_service;

pub use get_content_service::GetContentService;
