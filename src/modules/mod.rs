pub mod content;
pub mod hero;
pub mod navigation;
pub mod page;
pub mod skills;
pub mod theme;
