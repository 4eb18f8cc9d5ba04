use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::SuccessResponse,
    shared::api::ApiResponse,
    skills::{
        application::ports::incoming::use_cases::FilteredSkills, domain::SkillSelection,
    },
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SkillsQuery {
    /// Category to show, or `All`
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(SkillsQuery),
    responses(
        (status = 200, description = "Skills matching the selected category", body = inline(SuccessResponse<FilteredSkills>))
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    data: web::Data<AppState>,
    query: web::Query<SkillsQuery>,
) -> impl Responder {
    let selection = SkillSelection::parse(query.category.as_deref());
    ApiResponse::success(data.filter_skills_use_case.execute(&selection))
}
