mod content_file_json;
mod embedded_content;

pub use content_file_json::JsonFileContentSource;
pub use embedded_content::EmbeddedContentSource;
