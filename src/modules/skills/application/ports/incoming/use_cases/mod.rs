mod filter_skills_use_case;

pub use filter_skills_use_case::{FilterSkillsUseCase, FilteredSkills};
