use std::sync::Arc;

use crate::content::{
    application::{ports::incoming::use_cases::GetContentUseCase, ports::outgoing::ContentQuery},
    domain::PortfolioContent,
};

#[derive(Debug, Clone)]
pub struct GetContentService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetContentService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetContentUseCase for GetContentService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self) -> Arc<PortfolioContent> {
        self.query.content()
    }
}
