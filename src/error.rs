use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The canvas, padding and typography leave room for less than one line on a page.
    /// `first_page` is the capacity after any title header reservation.
    #[error("page capacity too small: {lines_per_page} lines per page, {first_page} on the first page")]
    CapacityTooSmall {
        lines_per_page: i64,
        first_page: i64,
    },

    /// A settings value is out of range
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The measurement capability cannot measure yet, usually because its font has not loaded
    #[error("text measurement is not ready")]
    MeasureNotReady,

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}
