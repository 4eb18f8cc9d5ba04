use actix_web::{post, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    theme::{
        adapter::incoming::web::{extractors::visitor::Visitor, routes::ThemeResponse},
        application::ports::incoming::use_cases::ToggleThemeError,
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/theme/toggle",
    tag = "theme",
    responses(
        (status = 200, description = "Theme flipped and persisted", body = inline(SuccessResponse<ThemeResponse>)),
        (status = 500, description = "Theme storage unavailable", body = ErrorResponse)
    )
)]
#[post("/api/theme/toggle")]
pub async fn toggle_theme_handler(visitor: Visitor, data: web::Data<AppState>) -> impl Responder {
    let mut response = match data.toggle_theme_use_case.execute(visitor.id).await {
        Ok(theme) => ApiResponse::success(ThemeResponse::from(theme)),
        Err(err) => map_toggle_theme_error(err),
    };

    visitor.remember(&mut response);
    response
}

fn map_toggle_theme_error(err: ToggleThemeError) -> actix_web::HttpResponse {
    match err {
        ToggleThemeError::StorageError(msg) => {
            error!(error = %msg, "Failed to toggle theme");
            ApiResponse::internal_error()
        }
    }
}
