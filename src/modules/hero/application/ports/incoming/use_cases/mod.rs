mod get_hero_use_case;

pub use get_hero_use_case::{GetHeroUseCase, HeroView};
