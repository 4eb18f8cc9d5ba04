use actix_web::{get, web, Responder};

use crate::{api::schemas::SuccessResponse, content::domain::ProjectEntry, shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses(
        (status = 200, description = "Projects showcase", body = inline(SuccessResponse<Vec<ProjectEntry>>))
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_content_use_case.projects())
}
