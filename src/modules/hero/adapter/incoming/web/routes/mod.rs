mod get_hero;

pub use get_hero::{__path_get_hero_handler, get_hero_handler};
