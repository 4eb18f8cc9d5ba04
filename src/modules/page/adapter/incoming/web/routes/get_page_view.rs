use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    page::domain::PageView,
    shared::api::ApiResponse,
    skills::domain::SkillSelection,
    theme::adapter::incoming::web::extractors::visitor::Visitor,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Skill category to show, or `All`
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/page",
    tag = "page",
    params(PageQuery),
    responses(
        (status = 200, description = "Page view model for the visitor", body = inline(SuccessResponse<PageView>)),
        (status = 500, description = "Content has no sections", body = ErrorResponse)
    )
)]
#[get("/api/page")]
pub async fn get_page_view_handler(
    visitor: Visitor,
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let selection = SkillSelection::parse(query.category.as_deref());

    let mut response = match data.render_page_use_case.view(visitor.id, &selection).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => {
            error!(error = %e, "Failed to build page view");
            ApiResponse::internal_error()
        }
    };

    visitor.remember(&mut response);
    response
}
