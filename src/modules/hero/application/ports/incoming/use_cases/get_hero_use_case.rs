use serde::Serialize;
use utoipa::ToSchema;

use crate::hero::domain::TypedText;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub name: String,
    pub typed: TypedText,
    pub resume_path: String,
}

pub trait GetHeroUseCase: Send + Sync {
    fn execute(&self) -> HeroView;
}
