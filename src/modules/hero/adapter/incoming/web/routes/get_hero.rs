use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, hero::application::ports::incoming::use_cases::HeroView,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/hero",
    tag = "hero",
    responses(
        (status = 200, description = "Hero banner with typed headline", body = inline(SuccessResponse<HeroView>))
    )
)]
#[get("/api/hero")]
pub async fn get_hero_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_hero_use_case.execute())
}
