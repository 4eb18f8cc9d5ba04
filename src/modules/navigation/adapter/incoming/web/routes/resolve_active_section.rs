use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    content::domain::SectionId,
    navigation::{
        application::ports::incoming::use_cases::{
            ActiveSection, ActiveSectionQuery, ResolveActiveSectionError,
        },
        domain::Region,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SectionRegionRequest {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSectionRequest {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    /// Sections absent from the page are simply left out; each id at most once
    #[serde(default)]
    pub regions: Vec<SectionRegionRequest>,
    /// Active section before this scroll event; omit on mount
    pub previous: Option<String>,
}

impl From<ActiveSectionRequest> for ActiveSectionQuery {
    fn from(req: ActiveSectionRequest) -> Self {
        Self {
            scroll_offset: req.scroll_offset,
            viewport_height: req.viewport_height,
            regions: req
                .regions
                .into_iter()
                .map(|r| (SectionId::new(r.id), Region::new(r.top, r.bottom)))
                .collect(),
            previous: req.previous.map(SectionId::new),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/navigation/active-section",
    tag = "navigation",
    request_body = ActiveSectionRequest,
    responses(
        (status = 200, description = "Section under the viewport midpoint", body = inline(SuccessResponse<ActiveSection>)),
        (status = 400, description = "Invalid geometry or unknown section", body = ErrorResponse)
    )
)]
#[post("/api/navigation/active-section")]
pub async fn resolve_active_section_handler(
    data: web::Data<AppState>,
    payload: web::Json<ActiveSectionRequest>,
) -> impl Responder {
    match data
        .resolve_active_section_use_case
        .execute(payload.into_inner().into())
    {
        Ok(active) => ApiResponse::success(active),
        Err(err) => map_resolve_active_section_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/navigation/active-section",
    tag = "navigation",
    responses(
        (status = 200, description = "Navigation state before any scroll event", body = inline(SuccessResponse<ActiveSection>)),
        (status = 500, description = "No sections configured", body = ErrorResponse)
    )
)]
#[get("/api/navigation/active-section")]
pub async fn initial_active_section_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resolve_active_section_use_case.initial() {
        Ok(active) => ApiResponse::success(active),
        Err(err) => map_resolve_active_section_error(err),
    }
}

fn map_resolve_active_section_error(err: ResolveActiveSectionError) -> HttpResponse {
    match err {
        ResolveActiveSectionError::InvalidGeometry(msg) => {
            ApiResponse::bad_request("INVALID_GEOMETRY", &msg)
        }
        ResolveActiveSectionError::UnknownSection(id) => {
            ApiResponse::bad_request("UNKNOWN_SECTION", &format!("Unknown section: {}", id))
        }
        ResolveActiveSectionError::NoSections => {
            error!("Active section requested but no sections are configured");
            ApiResponse::internal_error()
        }
    }
}
