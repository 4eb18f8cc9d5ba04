pub mod typing;

pub use typing::{type_out, Glyph, TypedText};
