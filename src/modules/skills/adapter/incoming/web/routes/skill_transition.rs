use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::SuccessResponse,
    shared::api::ApiResponse,
    skills::domain::{SkillSelection, SkillTransition},
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SkillTransitionRequest {
    /// Previously selected category (`All` when omitted)
    pub from: Option<String>,
    /// Newly selected category (`All` when omitted)
    pub to: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/skills/transition",
    tag = "skills",
    request_body = SkillTransitionRequest,
    responses(
        (status = 200, description = "Entries entering, leaving and staying", body = inline(SuccessResponse<SkillTransition>))
    )
)]
#[post("/api/skills/transition")]
pub async fn skill_transition_handler(
    data: web::Data<AppState>,
    payload: web::Json<SkillTransitionRequest>,
) -> impl Responder {
    let from = SkillSelection::parse(payload.from.as_deref());
    let to = SkillSelection::parse(payload.to.as_deref());

    ApiResponse::success(data.filter_skills_use_case.transition(&from, &to))
}
