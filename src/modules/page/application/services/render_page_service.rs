use async_trait::async_trait;
use tracing::warn;

use crate::{
    content::application::ports::outgoing::ContentQuery,
    page::{
        application::ports::incoming::use_cases::{RenderPageError, RenderPageUseCase},
        domain::{build_page_view, PageView},
    },
    skills::domain::SkillSelection,
    theme::{
        application::{ports::outgoing::ThemePreferenceStore, theme_controller::ThemeController},
        domain::{ThemePreference, VisitorId},
    },
};

#[derive(Debug, Clone)]
pub struct RenderPageService<Q, S>
where
    Q: ContentQuery,
    S: ThemePreferenceStore + Clone,
{
    query: Q,
    store: S,
    default_theme: ThemePreference,
    stagger_ms: u64,
}

impl<Q, S> RenderPageService<Q, S>
where
    Q: ContentQuery,
    S: ThemePreferenceStore + Clone,
{
    pub fn new(query: Q, store: S, default_theme: ThemePreference, stagger_ms: u64) -> Self {
        Self {
            query,
            store,
            default_theme,
            stagger_ms,
        }
    }

    async fn theme_for(&self, visitor: VisitorId) -> ThemePreference {
        match ThemeController::load(self.store.clone(), visitor, self.default_theme).await {
            Ok(controller) => controller.current(),
            Err(e) => {
                warn!(%visitor, error = %e, "Theme store unavailable, rendering default theme");
                self.default_theme
            }
        }
    }
}

#[async_trait]
impl<Q, S> RenderPageUseCase for RenderPageService<Q, S>
where
    Q: ContentQuery,
    S: ThemePreferenceStore + Clone,
{
    async fn view(
        &self,
        visitor: VisitorId,
        selection: &SkillSelection,
    ) -> Result<PageView, RenderPageError> {
        let content = self.query.content();
        let active = content
            .first_section()
            .map(|s| s.id.clone())
            .ok_or(RenderPageError::NoSections)?;

        let theme = self.theme_for(visitor).await;

        Ok(build_page_view(
            &content,
            theme,
            &active,
            selection,
            self.stagger_ms,
        ))
    }
}
