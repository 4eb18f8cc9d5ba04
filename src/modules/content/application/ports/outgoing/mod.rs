mod content_query;
mod content_source;

pub use content_query::ContentQuery;
pub use content_source::{ContentSource, ContentSourceError};
