use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    dev::Payload,
    Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use std::future::{ready, Ready};
use tracing::warn;
use uuid::Uuid;

use crate::theme::domain::VisitorId;

pub const VISITOR_COOKIE: &str = "visitor_id";

/// The anonymous visitor behind a request.
///
/// Read from the `visitor_id` cookie; a fresh id is minted when the cookie is
/// missing or unreadable, and handlers must then call [`Visitor::remember`] on
/// their response so the id sticks.
#[derive(Debug, Clone, Copy)]
pub struct Visitor {
    pub id: VisitorId,
    pub is_new: bool,
}

impl Visitor {
    pub fn remember(&self, response: &mut HttpResponse) {
        if !self.is_new {
            return;
        }

        let cookie = Cookie::build(VISITOR_COOKIE, self.id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(365))
            .finish();

        if let Err(e) = response.add_cookie(&cookie) {
            warn!(error = %e, "Failed to attach visitor cookie");
        }
    }
}

impl FromRequest for Visitor {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let existing = req
            .cookie(VISITOR_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok())
            .map(VisitorId::from);

        let visitor = match existing {
            Some(id) => Visitor { id, is_new: false },
            None => Visitor {
                id: VisitorId::new(),
                is_new: true,
            },
        };

        ready(Ok(visitor))
    }
}
