use async_trait::async_trait;

use crate::content::domain::PortfolioContent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentSourceError {
    #[error("Failed to read content from {location}: {message}")]
    ReadFailed { location: String, message: String },

    #[error("Malformed content in {location}: {message}")]
    Malformed { location: String, message: String },
}

/// Where the page content comes from (a file, or the copy compiled into
/// the binary).
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn load(&self) -> Result<PortfolioContent, ContentSourceError>;

    /// Human-readable origin used in logs.
    fn describe(&self) -> String;
}
