pub mod skill_filter;
pub mod transition;

pub use skill_filter::{filter_options, filter_skills, SkillSelection, ALL_SKILLS};
pub use transition::{diff_by_name, SkillTransition};
