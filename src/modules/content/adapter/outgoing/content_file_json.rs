use async_trait::async_trait;
use std::path::PathBuf;

use crate::content::application::ports::outgoing::{ContentSource, ContentSourceError};
use crate::content::domain::PortfolioContent;

/// Reads the content schema from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileContentSource {
    path: PathBuf,
}

impl JsonFileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for JsonFileContentSource {
    async fn load(&self) -> Result<PortfolioContent, ContentSourceError> {
        let location = self.describe();

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ContentSourceError::ReadFailed {
                location: location.clone(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&raw).map_err(|e| ContentSourceError::Malformed {
            location,
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
