use tracing::debug;

use crate::{
    content::application::ports::outgoing::ContentQuery,
    skills::{
        application::ports::incoming::use_cases::{FilterSkillsUseCase, FilteredSkills},
        domain::{diff_by_name, filter_options, filter_skills, SkillSelection, SkillTransition},
    },
};

#[derive(Debug, Clone)]
pub struct FilterSkillsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> FilterSkillsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> FilterSkillsUseCase for FilterSkillsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, selection: &SkillSelection) -> FilteredSkills {
        let content = self.query.content();
        let skills = filter_skills(&content.skills, selection);

        debug!(
            selection = selection.label(),
            matched = skills.len(),
            "Skill filter applied"
        );

        FilteredSkills {
            selected: selection.label().to_string(),
            options: filter_options(&content.skills),
            skills,
        }
    }

    fn transition(&self, from: &SkillSelection, to: &SkillSelection) -> SkillTransition {
        let content = self.query.content();
        diff_by_name(
            &filter_skills(&content.skills, from),
            &filter_skills(&content.skills, to),
        )
    }
}
