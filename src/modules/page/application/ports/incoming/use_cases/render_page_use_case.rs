use async_trait::async_trait;

use crate::page::domain::{render_html, PageView};
use crate::skills::domain::SkillSelection;
use crate::theme::domain::VisitorId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderPageError {
    #[error("Content declares no sections")]
    NoSections,
}

/// Builds the page for one visitor. Theme storage problems never fail a
/// render; the configured default theme is used instead.
#[async_trait]
pub trait RenderPageUseCase: Send + Sync {
    async fn view(
        &self,
        visitor: VisitorId,
        selection: &SkillSelection,
    ) -> Result<PageView, RenderPageError>;

    async fn render(
        &self,
        visitor: VisitorId,
        selection: &SkillSelection,
    ) -> Result<String, RenderPageError> {
        let view = self.view(visitor, selection).await?;
        Ok(render_html(&view))
    }
}
