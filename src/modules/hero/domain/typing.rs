use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    pub character: char,
    pub delay_ms: u64,
}

/// A fully resolved string plus per-character reveal delays.
///
/// `text` is always complete; the delays are presentation hints only.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypedText {
    pub text: String,
    pub glyphs: Vec<Glyph>,
    pub total_duration_ms: u64,
}

/// Splits `text` into glyphs delayed by `index * stagger_ms`.
///
/// A stagger of 0 reveals every glyph at once.
pub fn type_out(text: &str, stagger_ms: u64) -> TypedText {
    let glyphs: Vec<Glyph> = text
        .chars()
        .enumerate()
        .map(|(index, character)| Glyph {
            character,
            delay_ms: (index as u64).saturating_mul(stagger_ms),
        })
        .collect();

    let total_duration_ms = glyphs.last().map_or(0, |g| g.delay_ms);

    TypedText {
        text: text.to_string(),
        glyphs,
        total_duration_ms,
    }
}
