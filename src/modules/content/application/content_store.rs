use std::sync::Arc;
use tracing::info;

use crate::content::application::ports::outgoing::{ContentQuery, ContentSource, ContentSourceError};
use crate::content::domain::validation::{ContentValidationError, ContentValidator};
use crate::content::domain::PortfolioContent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentLoadError {
    #[error(transparent)]
    Source(#[from] ContentSourceError),

    #[error("Invalid content: {0}")]
    Invalid(#[from] ContentValidationError),

    #[error("Validator setup failed: {0}")]
    Validator(String),
}

/// Holds the validated content for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: Arc<PortfolioContent>,
}

impl ContentStore {
    pub async fn load<S>(source: &S) -> Result<Self, ContentLoadError>
    where
        S: ContentSource + ?Sized,
    {
        let content = source.load().await?;
        let store = Self::from_content(content)?;

        info!(
            source = %source.describe(),
            sections = store.content.sections.len(),
            skills = store.content.skills.len(),
            projects = store.content.projects.len(),
            "Portfolio content loaded"
        );

        Ok(store)
    }

    pub fn from_content(content: PortfolioContent) -> Result<Self, ContentLoadError> {
        let validator =
            ContentValidator::new().map_err(|e| ContentLoadError::Validator(e.to_string()))?;
        validator.validate(&content)?;

        Ok(Self {
            content: Arc::new(content),
        })
    }
}

impl ContentQuery for ContentStore {
    fn content(&self) -> Arc<PortfolioContent> {
        Arc::clone(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::tests::support::content_fixtures::sample_content;

    struct FixedSource {
        result: Result<PortfolioContent, ContentSourceError>,
    }

    #[async_trait]
    impl ContentSource for FixedSource {
        async fn load(&self) -> Result<PortfolioContent, ContentSourceError> {
            self.result.clone()
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[tokio::test]
    async fn load_validates_and_shares_content() {
        let source = FixedSource {
            result: Ok(sample_content()),
        };

        let store = ContentStore::load(&source).await.unwrap();

        let first = store.content();
        let second = store.content();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.sections[0].id.as_str(), "hero");
    }

    #[tokio::test]
    async fn load_propagates_source_errors() {
        let source = FixedSource {
            result: Err(ContentSourceError::ReadFailed {
                location: "content.json".to_string(),
                message: "missing".to_string(),
            }),
        };

        let result = ContentStore::load(&source).await;

        assert!(matches!(result, Err(ContentLoadError::Source(_))));
    }

    #[tokio::test]
    async fn load_rejects_invalid_content() {
        let mut content = sample_content();
        content.sections.clear();
        let source = FixedSource {
            result: Ok(content),
        };

        let result = ContentStore::load(&source).await;

        assert!(matches!(
            result,
            Err(ContentLoadError::Invalid(ContentValidationError::NoSections))
        ));
    }
}
