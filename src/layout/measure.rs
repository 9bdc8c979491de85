use crate::font::Font;
use crate::units::Px;

/// The single capability layout needs from the rendering side: how wide a run of text is when
/// drawn with the font that will eventually render it.
///
/// Any `Fn(&str) -> Px` closure is a measurer, which keeps tests free of fonts:
///
/// ```
/// use textpages::layout::Measure;
/// use textpages::Px;
///
/// let measure = |text: &str| Px(text.chars().count() as f32 * 10.0);
/// assert_eq!(measure.measure("hello"), Px(50.0));
/// ```
pub trait Measure {
    /// Width of `text` laid out on a single line
    fn measure(&self, text: &str) -> Px;

    /// Whether the measurer can currently produce real widths. Layout refuses to run against a
    /// measurer that is not ready rather than produce lines that will not fit once the font
    /// arrives.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<F> Measure for F
where
    F: Fn(&str) -> Px,
{
    fn measure(&self, text: &str) -> Px {
        self(text)
    }
}

/// Every character is the same width
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: Px,
}

impl MonospaceMeasure {
    pub fn new<D: Into<Px>>(advance: D) -> MonospaceMeasure {
        MonospaceMeasure {
            advance: advance.into(),
        }
    }
}

impl Measure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Px {
        self.advance * text.chars().count() as f32
    }
}

/// Measures text with a loaded [`Font`] at a fixed size. Until a font is attached the measurer
/// reports itself as not ready.
pub struct FontMeasure<'f> {
    font: Option<&'f Font>,
    size: Px,
}

impl<'f> FontMeasure<'f> {
    pub fn new(font: &'f Font, size: Px) -> FontMeasure<'f> {
        FontMeasure {
            font: Some(font),
            size,
        }
    }

    /// A measurer whose font is still loading
    pub fn pending(size: Px) -> FontMeasure<'f> {
        FontMeasure { font: None, size }
    }

    /// Attach the font once it has loaded
    pub fn with_font(self, font: &'f Font) -> FontMeasure<'f> {
        FontMeasure {
            font: Some(font),
            size: self.size,
        }
    }

    pub fn size(&self) -> Px {
        self.size
    }
}

impl Measure for FontMeasure<'_> {
    fn measure(&self, text: &str) -> Px {
        match self.font {
            Some(font) => font.width_of_text(text, self.size),
            None => Px(0.0),
        }
    }

    fn is_ready(&self) -> bool {
        self.font.is_some()
    }
}
