use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::theme::domain::{ThemePreference, VisitorId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeStoreError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Stored theme value is unreadable: {0}")]
    CorruptValue(String),
}

/// Persisted form of a visitor's preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTheme {
    pub theme: ThemePreference,
    pub updated_at: DateTime<Utc>,
}

impl StoredTheme {
    pub fn now(theme: ThemePreference) -> Self {
        Self {
            theme,
            updated_at: Utc::now(),
        }
    }
}

/// Durable per-visitor storage for the theme preference.
#[async_trait]
pub trait ThemePreferenceStore: Send + Sync {
    async fn read(&self, visitor: &VisitorId) -> Result<Option<ThemePreference>, ThemeStoreError>;

    async fn write(
        &self,
        visitor: &VisitorId,
        theme: ThemePreference,
    ) -> Result<(), ThemeStoreError>;

    /// Flips the stored preference in one atomic step and returns the new
    /// value. `fallback` stands in for a missing or unreadable entry.
    async fn toggle(
        &self,
        visitor: &VisitorId,
        fallback: ThemePreference,
    ) -> Result<ThemePreference, ThemeStoreError>;

    /// Readiness probe for the backing storage.
    async fn ping(&self) -> Result<(), ThemeStoreError>;
}

#[async_trait]
impl<T> ThemePreferenceStore for Arc<T>
where
    T: ThemePreferenceStore + ?Sized,
{
    async fn read(&self, visitor: &VisitorId) -> Result<Option<ThemePreference>, ThemeStoreError> {
        (**self).read(visitor).await
    }

    async fn write(
        &self,
        visitor: &VisitorId,
        theme: ThemePreference,
    ) -> Result<(), ThemeStoreError> {
        (**self).write(visitor, theme).await
    }

    async fn toggle(
        &self,
        visitor: &VisitorId,
        fallback: ThemePreference,
    ) -> Result<ThemePreference, ThemeStoreError> {
        (**self).toggle(visitor, fallback).await
    }

    async fn ping(&self) -> Result<(), ThemeStoreError> {
        (**self).ping().await
    }
}
