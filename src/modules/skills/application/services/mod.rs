mod filter_skills_service;

pub use filter_skills_service::FilterSkillsService;
