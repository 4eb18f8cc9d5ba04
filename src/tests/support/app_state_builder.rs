use crate::config::AppConfig;
use crate::content::application::content_store::ContentStore;
use crate::content::application::ports::incoming::use_cases::GetContentUseCase;
use crate::hero::application::ports::incoming::use_cases::GetHeroUseCase;
use crate::navigation::application::ports::incoming::use_cases::ResolveActiveSectionUseCase;
use crate::page::application::ports::incoming::use_cases::RenderPageUseCase;
use crate::skills::application::ports::incoming::use_cases::FilterSkillsUseCase;
use crate::tests::support::content_fixtures::sample_content;
use crate::theme::adapter::outgoing::InMemoryThemeStore;
use crate::theme::application::ports::incoming::use_cases::{
    ResolveThemeUseCase, ToggleThemeUseCase,
};
use crate::theme::domain::ThemePreference;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Real services over `sample_content()` and a shared in-memory theme store
/// (default theme dark); individual use cases can be swapped for stubs.
pub struct TestAppStateBuilder {
    theme_store: InMemoryThemeStore,
    get_content: Arc<dyn GetContentUseCase + Send + Sync>,
    filter_skills: Arc<dyn FilterSkillsUseCase + Send + Sync>,
    resolve_theme: Arc<dyn ResolveThemeUseCase + Send + Sync>,
    toggle_theme: Arc<dyn ToggleThemeUseCase + Send + Sync>,
    resolve_active_section: Arc<dyn ResolveActiveSectionUseCase + Send + Sync>,
    get_hero: Arc<dyn GetHeroUseCase + Send + Sync>,
    render_page: Arc<dyn RenderPageUseCase + Send + Sync>,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        content_path: None,
        redis_url: None,
        default_theme: ThemePreference::Dark,
        typing_stagger_ms: 35,
        theme_ttl_secs: AppConfig::DEFAULT_THEME_TTL_SECS,
        theme_store_capacity: AppConfig::DEFAULT_THEME_STORE_CAPACITY,
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::over_store(InMemoryThemeStore::new())
    }
}

impl TestAppStateBuilder {
    /// Real services sharing `theme_store`.
    pub fn over_store(theme_store: InMemoryThemeStore) -> Self {
        let content =
            ContentStore::from_content(sample_content()).expect("sample content must be valid");
        let state = AppState::new(content, Arc::new(theme_store.clone()), &test_config());

        Self {
            theme_store,
            get_content: state.get_content_use_case,
            filter_skills: state.filter_skills_use_case,
            resolve_theme: state.resolve_theme_use_case,
            toggle_theme: state.toggle_theme_use_case,
            resolve_active_section: state.resolve_active_section_use_case,
            get_hero: state.get_hero_use_case,
            render_page: state.render_page_use_case,
        }
    }

    /// Store shared by the default theme and page services.
    pub fn theme_store(&self) -> &InMemoryThemeStore {
        &self.theme_store
    }

    pub fn with_resolve_theme(
        mut self,
        uc: impl ResolveThemeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_theme = Arc::new(uc);
        self
    }

    pub fn with_toggle_theme(mut self, uc: impl ToggleThemeUseCase + Send + Sync + 'static) -> Self {
        self.toggle_theme = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_content_use_case: self.get_content,
            filter_skills_use_case: self.filter_skills,
            resolve_theme_use_case: self.resolve_theme,
            toggle_theme_use_case: self.toggle_theme,
            resolve_active_section_use_case: self.resolve_active_section,
            get_hero_use_case: self.get_hero,
            render_page_use_case: self.render_page,
        })
    }
}
