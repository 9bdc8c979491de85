use crate::{LayoutError, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font object. Fonts can be TTF or OTF fonts. Only the metrics are used here; the
/// rendering side is expected to draw with the same face so measured lines actually fit.
///
/// Load one font per style: a bold face and a regular face are separate fonts.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn scaling(&self, size: Px) -> f32 {
        *size / self.face.as_face_ref().units_per_em() as f32
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face
            .as_face_ref()
            .glyph_index('\u{FFFD}')
            .or_else(|| self.face.as_face_ref().glyph_index('?'))
            .map(|i| i.0)
    }

    /// Horizontal advance of a single character at the given size. Characters missing from the
    /// font are measured as the replacement glyph, or as nothing if that is missing too.
    pub fn advance(&self, ch: char, size: Px) -> Px {
        let advance = self
            .glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(GlyphId(gid)))
            .unwrap_or_default();
        Px(self.scaling(size) * advance as f32)
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }
}
