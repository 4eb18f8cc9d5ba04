pub mod entities;
pub mod validation;

pub use entities::*;
