mod get_skills;
mod skill_transition;

pub use get_skills::{__path_get_skills_handler, get_skills_handler};
pub use skill_transition::{
    __path_skill_transition_handler, skill_transition_handler, SkillTransitionRequest,
};
