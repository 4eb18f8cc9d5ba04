mod get_hero_service;

pub use get_hero_service::GetHeroService;
