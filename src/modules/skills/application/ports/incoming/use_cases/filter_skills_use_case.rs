use serde::Serialize;
use utoipa::ToSchema;

use crate::content::domain::SkillEntry;
use crate::skills::domain::{SkillSelection, SkillTransition};

/// Projection of the skill list for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FilteredSkills {
    pub selected: String,
    pub options: Vec<String>,
    pub skills: Vec<SkillEntry>,
}

pub trait FilterSkillsUseCase: Send + Sync {
    fn execute(&self, selection: &SkillSelection) -> FilteredSkills;

    fn transition(&self, from: &SkillSelection, to: &SkillSelection) -> SkillTransition;
}
