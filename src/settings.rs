//! Typography and canvas configuration for a pagination run.
//!
//! Settings arrive either from code, via [`Settings::for_canvas`] and the builder setters, or
//! as a serialized record from the rendering side. Serialized field names are camelCase:
//!
//! ```
//! use textpages::Settings;
//!
//! let settings: Settings = serde_json::from_str(r#"{
//!     "fontSize": 40,
//!     "lineHeight": 1.5,
//!     "padding": 80,
//!     "canvasWidth": 1080,
//!     "canvasHeight": 1350,
//!     "showTitleHeader": true,
//!     "hasTitle": false
//! }"#).expect("valid settings");
//! assert!(settings.validate().is_ok());
//! ```

use crate::canvas::CanvasSize;
use crate::rect::Rect;
use crate::units::Px;
use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Vertical clearance kept free on every page for descenders and the border
pub const CLEARANCE: Px = Px(40.0);

/// Lines reserved at the top of the first page for the title header
pub const HEADER_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Font size in pixels
    pub font_size: Px,
    /// Multiplier applied to the font size to get the distance between baselines
    pub line_height: f32,
    /// Margin kept clear on all four sides of the canvas
    pub padding: Px,
    pub canvas_width: Px,
    pub canvas_height: Px,
    /// Whether the first page draws the title above the body
    pub show_title_header: bool,
    /// Whether a non-empty title accompanies the text
    pub has_title: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::for_canvas(crate::canvas::SQUARE)
    }
}

impl Settings {
    /// Settings for the given canvas with a 40px font, 1.5 line height, 80px padding, and the
    /// title header shown whenever a title is present
    pub fn for_canvas(size: impl Into<CanvasSize>) -> Settings {
        let (canvas_width, canvas_height) = size.into();
        Settings {
            font_size: Px(40.0),
            line_height: 1.5,
            padding: Px(80.0),
            canvas_width,
            canvas_height,
            show_title_header: true,
            has_title: false,
        }
    }

    pub fn font_size<D: Into<Px>>(&mut self, size: D) -> &mut Self {
        self.font_size = size.into();
        self
    }

    pub fn line_height(&mut self, line_height: f32) -> &mut Self {
        self.line_height = line_height;
        self
    }

    pub fn padding<D: Into<Px>>(&mut self, padding: D) -> &mut Self {
        self.padding = padding.into();
        self
    }

    pub fn show_title_header(&mut self, show: bool) -> &mut Self {
        self.show_title_header = show;
        self
    }

    pub fn has_title(&mut self, has_title: bool) -> &mut Self {
        self.has_title = has_title;
        self
    }

    /// Checks every value is in range. Does not check page capacity; that is the
    /// [`Paginator`](crate::layout::Paginator)'s concern.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.font_size.is_finite() || *self.font_size <= 0.0 {
            return Err(LayoutError::InvalidSettings(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if !self.line_height.is_finite() || self.line_height < 1.0 {
            return Err(LayoutError::InvalidSettings(format!(
                "line height must be at least 1, got {}",
                self.line_height
            )));
        }
        if !self.padding.is_finite() || *self.padding < 0.0 {
            return Err(LayoutError::InvalidSettings(format!(
                "padding must not be negative, got {}",
                self.padding
            )));
        }
        if !self.canvas_width.is_finite()
            || !self.canvas_height.is_finite()
            || *self.canvas_width <= 0.0
            || *self.canvas_height <= 0.0
        {
            return Err(LayoutError::InvalidSettings(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if *self.max_width() <= 0.0 {
            return Err(LayoutError::InvalidSettings(format!(
                "padding of {} leaves no room on a {} wide canvas",
                self.padding, self.canvas_width
            )));
        }
        Ok(())
    }

    /// Widest a line of text may be
    pub fn max_width(&self) -> Px {
        self.canvas_width - self.padding * 2.0
    }

    /// Distance between consecutive baselines
    pub fn line_advance(&self) -> Px {
        self.font_size * self.line_height
    }

    /// Whether the first page gives up [`HEADER_LINES`] lines to the title
    pub fn reserves_header(&self) -> bool {
        self.has_title && self.show_title_header
    }

    /// The area inside the padding
    pub fn content_box(&self) -> Rect {
        Rect::inset(self.canvas_width, self.canvas_height, self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{AspectRatio, PORTRAIT};

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
        assert!(Settings::for_canvas(AspectRatio::Story).validate().is_ok());
    }

    #[test]
    fn builder_setters_chain() {
        let mut settings = Settings::for_canvas(PORTRAIT);
        settings.font_size(32).padding(Px(60.0)).line_height(1.2).has_title(true);
        assert_eq!(settings.font_size, Px(32.0));
        assert_eq!(settings.max_width(), Px(960.0));
        assert!(settings.reserves_header());
        settings.show_title_header(false);
        assert!(!settings.reserves_header());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut settings = Settings::default();
        settings.line_height(0.8);
        assert!(matches!(
            settings.validate(),
            Err(LayoutError::InvalidSettings(_))
        ));

        let mut settings = Settings::default();
        settings.font_size(0);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.padding(Px(600.0));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.font_size(Px(f32::NAN));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn content_box_is_inset_by_padding() {
        let settings = Settings::default();
        let content = settings.content_box();
        assert_eq!(content.x1, Px(80.0));
        assert_eq!(content.y2, Px(1000.0));
        assert_eq!(content.width(), settings.max_width());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Settings::default()).expect("serializes");
        assert_eq!(json["fontSize"], 40.0);
        assert_eq!(json["canvasHeight"], 1080.0);
        assert_eq!(json["showTitleHeader"], true);
    }
}
