use async_trait::async_trait;

use crate::theme::domain::{ThemePreference, VisitorId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToggleThemeError {
    #[error("Theme storage unavailable: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ToggleThemeUseCase: Send + Sync {
    /// Flips the visitor's theme and returns the new value.
    async fn execute(&self, visitor: VisitorId) -> Result<ThemePreference, ToggleThemeError>;
}
