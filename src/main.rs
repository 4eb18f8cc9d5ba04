pub mod modules;
pub use modules::content;
pub use modules::hero;
pub use modules::navigation;
pub use modules::page;
pub use modules::skills;
pub use modules::theme;

pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::content::adapter::outgoing::{EmbeddedContentSource, JsonFileContentSource};
use crate::content::application::content_store::ContentStore;
use crate::content::application::ports::incoming::use_cases::GetContentUseCase;
use crate::content::application::ports::outgoing::ContentSource;
use crate::content::application::services::GetContentService;
use crate::hero::application::ports::incoming::use_cases::GetHeroUseCase;
use crate::hero::application::services::GetHeroService;
use crate::navigation::application::ports::incoming::use_cases::ResolveActiveSectionUseCase;
use crate::navigation::application::services::ResolveActiveSectionService;
use crate::page::application::ports::incoming::use_cases::RenderPageUseCase;
use crate::page::application::services::RenderPageService;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::skills::application::ports::incoming::use_cases::FilterSkillsUseCase;
use crate::skills::application::services::FilterSkillsService;
use crate::theme::adapter::outgoing::{InMemoryThemeStore, RedisThemeStore};
use crate::theme::application::ports::incoming::use_cases::{
    ResolveThemeUseCase, ToggleThemeUseCase,
};
use crate::theme::application::ports::outgoing::ThemePreferenceStore;
use crate::theme::application::services::{ResolveThemeService, ToggleThemeService};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_content_use_case: Arc<dyn GetContentUseCase + Send + Sync>,
    pub filter_skills_use_case: Arc<dyn FilterSkillsUseCase + Send + Sync>,
    pub resolve_theme_use_case: Arc<dyn ResolveThemeUseCase + Send + Sync>,
    pub toggle_theme_use_case: Arc<dyn ToggleThemeUseCase + Send + Sync>,
    pub resolve_active_section_use_case: Arc<dyn ResolveActiveSectionUseCase + Send + Sync>,
    pub get_hero_use_case: Arc<dyn GetHeroUseCase + Send + Sync>,
    pub render_page_use_case: Arc<dyn RenderPageUseCase + Send + Sync>,
}

impl AppState {
    /// Wires every use case over one content store and one theme store.
    pub fn new(
        content: ContentStore,
        theme_store: Arc<dyn ThemePreferenceStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            get_content_use_case: Arc::new(GetContentService::new(content.clone())),
            filter_skills_use_case: Arc::new(FilterSkillsService::new(content.clone())),
            resolve_theme_use_case: Arc::new(ResolveThemeService::new(
                Arc::clone(&theme_store),
                config.default_theme,
            )),
            toggle_theme_use_case: Arc::new(ToggleThemeService::new(
                Arc::clone(&theme_store),
                config.default_theme,
            )),
            resolve_active_section_use_case: Arc::new(ResolveActiveSectionService::new(
                content.clone(),
            )),
            get_hero_use_case: Arc::new(GetHeroService::new(
                content.clone(),
                config.typing_stagger_ms,
            )),
            render_page_use_case: Arc::new(RenderPageService::new(
                content,
                theme_store,
                config.default_theme,
                config.typing_stagger_ms,
            )),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Content
    let source: Box<dyn ContentSource> = match &config.content_path {
        Some(path) => Box::new(JsonFileContentSource::new(path.clone())),
        None => Box::new(EmbeddedContentSource),
    };
    let content = ContentStore::load(source.as_ref())
        .await
        .context("Failed to load portfolio content")?;

    // Theme store
    let theme_store: Arc<dyn ThemePreferenceStore> = match &config.redis_url {
        Some(redis_url) => {
            if config.redis_uses_tls() {
                let _ = rustls::crypto::ring::default_provider().install_default();
            }
            let redis_pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            info!("Theme preferences stored in Redis");
            Arc::new(RedisThemeStore::new(
                Arc::new(redis_pool),
                config.theme_ttl_secs,
            ))
        }
        None => {
            info!(
                capacity = config.theme_store_capacity,
                "REDIS_URL not set, theme preferences kept in memory"
            );
            Arc::new(InMemoryThemeStore::with_limits(
                config.theme_store_capacity,
                config.theme_ttl_secs,
            ))
        }
    };

    let state = AppState::new(content, Arc::clone(&theme_store), &config);
    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&theme_store)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Page
    cfg.service(crate::page::adapter::incoming::web::routes::get_page_handler);
    cfg.service(crate::page::adapter::incoming::web::routes::get_page_view_handler);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_sections_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    // Skills
    cfg.service(crate::skills::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::skill_transition_handler);
    // Theme
    cfg.service(crate::theme::adapter::incoming::web::routes::get_theme_handler);
    cfg.service(crate::theme::adapter::incoming::web::routes::toggle_theme_handler);
    // Navigation
    cfg.service(crate::navigation::adapter::incoming::web::routes::initial_active_section_handler);
    cfg.service(crate::navigation::adapter::incoming::web::routes::resolve_active_section_handler);
    // Hero
    cfg.service(crate::hero::adapter::incoming::web::routes::get_hero_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
