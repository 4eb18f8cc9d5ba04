use std::sync::Arc;

use crate::content::domain::PortfolioContent;

/// Read access to the loaded content.
pub trait ContentQuery: Send + Sync {
    fn content(&self) -> Arc<PortfolioContent>;
}

impl<T> ContentQuery for Arc<T>
where
    T: ContentQuery + ?Sized,
{
    fn content(&self) -> Arc<PortfolioContent> {
        (**self).content()
    }
}
