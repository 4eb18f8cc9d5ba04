use actix_web::{get, web, Responder};

use crate::{api::schemas::SuccessResponse, content::domain::PortfolioContent, shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "Full portfolio content", body = inline(SuccessResponse<PortfolioContent>))
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    let content = data.get_content_use_case.execute();
    ApiResponse::success(&*content)
}
