use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    page::adapter::incoming::web::routes::PageQuery,
    skills::domain::SkillSelection,
    theme::adapter::incoming::web::extractors::visitor::Visitor,
    AppState,
};

#[get("/")]
pub async fn get_page_handler(
    visitor: Visitor,
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let selection = SkillSelection::parse(query.category.as_deref());

    let mut response = match data.render_page_use_case.render(visitor.id, &selection).await {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("An unexpected error occurred")
        }
    };

    visitor.remember(&mut response);
    response
}
