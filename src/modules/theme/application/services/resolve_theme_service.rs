use async_trait::async_trait;

use crate::theme::{
    application::{
        ports::incoming::use_cases::{ResolveThemeError, ResolveThemeUseCase},
        ports::outgoing::ThemePreferenceStore,
        theme_controller::ThemeController,
    },
    domain::{ThemePreference, VisitorId},
};

#[derive(Debug, Clone)]
pub struct ResolveThemeService<S>
where
    S: ThemePreferenceStore + Clone,
{
    store: S,
    default: ThemePreference,
}

impl<S> ResolveThemeService<S>
where
    S: ThemePreferenceStore + Clone,
{
    pub fn new(store: S, default: ThemePreference) -> Self {
        Self { store, default }
    }
}

#[async_trait]
impl<S> ResolveThemeUseCase for ResolveThemeService<S>
where
    S: ThemePreferenceStore + Clone,
{
    async fn execute(&self, visitor: VisitorId) -> Result<ThemePreference, ResolveThemeError> {
        let controller = ThemeController::load(self.store.clone(), visitor, self.default)
            .await
            .map_err(|e| ResolveThemeError::StorageError(e.to_string()))?;

        Ok(controller.current())
    }
}
