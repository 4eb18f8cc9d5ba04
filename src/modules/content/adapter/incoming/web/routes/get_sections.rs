use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{api::schemas::SuccessResponse, shared::api::ApiResponse, AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub id: String,
    pub label: String,
    pub href: String,
}

#[utoipa::path(
    get,
    path = "/api/sections",
    tag = "content",
    responses(
        (status = 200, description = "Sections in document order", body = inline(SuccessResponse<Vec<SectionResponse>>))
    )
)]
#[get("/api/sections")]
pub async fn get_sections_handler(data: web::Data<AppState>) -> impl Responder {
    let response = data
        .get_content_use_case
        .sections()
        .into_iter()
        .map(|section| SectionResponse {
            href: section.id.anchor(),
            id: section.id.to_string(),
            label: section.label,
        })
        .collect::<Vec<_>>();

    ApiResponse::success(response)
}
