use async_trait::async_trait;

use crate::content::application::ports::outgoing::{ContentSource, ContentSourceError};
use crate::content::domain::PortfolioContent;

const EMBEDDED_CONTENT: &str = include_str!("../../../../../content/portfolio.json");

/// The content file compiled into the binary; used when no
/// `CONTENT_PATH` is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContentSource;

#[async_trait]
impl ContentSource for EmbeddedContentSource {
    async fn load(&self) -> Result<PortfolioContent, ContentSourceError> {
        serde_json::from_str(EMBEDDED_CONTENT).map_err(|e| ContentSourceError::Malformed {
            location: self.describe(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        "embedded:content/portfolio.json".to_string()
    }
}
