use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    theme::{
        adapter::incoming::web::extractors::visitor::Visitor,
        application::ports::incoming::use_cases::ResolveThemeError, domain::ThemePreference,
    },
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme: ThemePreference,
    /// Whether the `dark` marker is set on the document root
    pub dark: bool,
}

impl From<ThemePreference> for ThemeResponse {
    fn from(theme: ThemePreference) -> Self {
        Self {
            theme,
            dark: theme.is_dark(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/theme",
    tag = "theme",
    responses(
        (status = 200, description = "Visitor's current theme", body = inline(SuccessResponse<ThemeResponse>)),
        (status = 500, description = "Theme storage unavailable", body = ErrorResponse)
    )
)]
#[get("/api/theme")]
pub async fn get_theme_handler(visitor: Visitor, data: web::Data<AppState>) -> impl Responder {
    let mut response = match data.resolve_theme_use_case.execute(visitor.id).await {
        Ok(theme) => ApiResponse::success(ThemeResponse::from(theme)),
        Err(err) => map_resolve_theme_error(err),
    };

    visitor.remember(&mut response);
    response
}

fn map_resolve_theme_error(err: ResolveThemeError) -> actix_web::HttpResponse {
    match err {
        ResolveThemeError::StorageError(msg) => {
            error!(error = %msg, "Failed to resolve theme");
            ApiResponse::internal_error()
        }
    }
}
