use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::theme::application::ports::outgoing::ThemePreferenceStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    theme_store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the theme store
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<dyn ThemePreferenceStore>>) -> impl Responder {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            theme_store: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "Theme store is not ready");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                theme_store: "unhealthy",
            })
        }
    }
}
