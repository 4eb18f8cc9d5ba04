use async_trait::async_trait;

use crate::theme::application::ports::incoming::use_cases::{
    ResolveThemeError, ResolveThemeUseCase, ToggleThemeError, ToggleThemeUseCase,
};
use crate::theme::application::ports::outgoing::{ThemePreferenceStore, ThemeStoreError};
use crate::theme::domain::{ThemePreference, VisitorId};

/// Theme store whose backend is always down.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingThemeStore;

#[async_trait]
impl ThemePreferenceStore for FailingThemeStore {
    async fn read(&self, _visitor: &VisitorId) -> Result<Option<ThemePreference>, ThemeStoreError> {
        Err(ThemeStoreError::StorageError("connection refused: store down".into()))
    }

    async fn write(
        &self,
        _visitor: &VisitorId,
        _theme: ThemePreference,
    ) -> Result<(), ThemeStoreError> {
        Err(ThemeStoreError::StorageError("connection refused: store down".into()))
    }

    async fn toggle(
        &self,
        _visitor: &VisitorId,
        _fallback: ThemePreference,
    ) -> Result<ThemePreference, ThemeStoreError> {
        Err(ThemeStoreError::StorageError("connection refused: store down".into()))
    }

    async fn ping(&self) -> Result<(), ThemeStoreError> {
        Err(ThemeStoreError::StorageError("connection refused: store down".into()))
    }
}

#[derive(Clone)]
pub struct StubResolveThemeUseCase {
    result: Result<ThemePreference, ResolveThemeError>,
}

impl StubResolveThemeUseCase {
    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ResolveThemeError::StorageError(msg.into())),
        }
    }
}

#[async_trait]
impl ResolveThemeUseCase for StubResolveThemeUseCase {
    async fn execute(&self, _visitor: VisitorId) -> Result<ThemePreference, ResolveThemeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubToggleThemeUseCase {
    result: Result<ThemePreference, ToggleThemeError>,
}

impl StubToggleThemeUseCase {
    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ToggleThemeError::StorageError(msg.into())),
        }
    }
}

#[async_trait]
impl ToggleThemeUseCase for StubToggleThemeUseCase {
    async fn execute(&self, _visitor: VisitorId) -> Result<ThemePreference, ToggleThemeError> {
        self.result.clone()
    }
}
