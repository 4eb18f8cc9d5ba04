use async_trait::async_trait;

use crate::theme::domain::{ThemePreference, VisitorId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveThemeError {
    #[error("Theme storage unavailable: {0}")]
    StorageError(String),
}

/// Initial theme for a visitor: the stored value, else the configured
/// default (which is then persisted).
#[async_trait]
pub trait ResolveThemeUseCase: Send + Sync {
    async fn execute(&self, visitor: VisitorId) -> Result<ThemePreference, ResolveThemeError>;
}
