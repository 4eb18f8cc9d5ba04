use async_trait::async_trait;

use crate::theme::{
    application::{
        ports::incoming::use_cases::{ToggleThemeError, ToggleThemeUseCase},
        ports::outgoing::ThemePreferenceStore,
        theme_controller::ThemeController,
    },
    domain::{ThemePreference, VisitorId},
};

#[derive(Debug, Clone)]
pub struct ToggleThemeService<S>
where
    S: ThemePreferenceStore + Clone,
{
    store: S,
    default: ThemePreference,
}

impl<S> ToggleThemeService<S>
where
    S: ThemePreferenceStore + Clone,
{
    pub fn new(store: S, default: ThemePreference) -> Self {
        Self { store, default }
    }
}

#[async_trait]
impl<S> ToggleThemeUseCase for ToggleThemeService<S>
where
    S: ThemePreferenceStore + Clone,
{
    async fn execute(&self, visitor: VisitorId) -> Result<ThemePreference, ToggleThemeError> {
        let controller = ThemeController::load(self.store.clone(), visitor, self.default)
            .await
            .map_err(|e| ToggleThemeError::StorageError(e.to_string()))?;

        controller
            .toggle()
            .await
            .map_err(|e| ToggleThemeError::StorageError(e.to_string()))
    }
}
