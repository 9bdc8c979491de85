//! Pre-defined canvas sizes for common social post formats.
//!
//! Sizes are given as (width, height) in pixels. Presets are named by the aspect ratio they are
//! published at; use the [`Orientation`](crate::canvas::Orientation) trait to flip any size
//! between portrait and landscape.
//!
//! # Available Sizes
//!
//! `SQUARE` (1:1), `PORTRAIT` (4:5), `STORY` (9:16), `LANDSCAPE` (1.91:1), `WIDESCREEN` (16:9)
//!
//! # Example
//!
//! ```
//! use textpages::canvas::{Orientation, PORTRAIT, STORY};
//!
//! let (width, height) = PORTRAIT;
//! assert!(width < height);
//!
//! let sideways = STORY.landscape();
//! assert!(sideways.0 > sideways.1);
//! ```

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Canvas dimensions as (width, height) in pixels.
pub type CanvasSize = (Px, Px);

pub const SQUARE: CanvasSize = (Px(1080.0), Px(1080.0));
pub const PORTRAIT: CanvasSize = (Px(1080.0), Px(1350.0));
pub const STORY: CanvasSize = (Px(1080.0), Px(1920.0));
pub const LANDSCAPE: CanvasSize = (Px(1200.0), Px(628.0));
pub const WIDESCREEN: CanvasSize = (Px(1920.0), Px(1080.0));

/// Named aspect-ratio presets, for settings that arrive as serialized data rather than as
/// explicit dimensions.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "9:16")]
    Story,
    #[serde(rename = "1.91:1")]
    Landscape,
    #[serde(rename = "16:9")]
    Widescreen,
}

impl AspectRatio {
    /// The canvas size this preset renders at
    pub fn size(self) -> CanvasSize {
        match self {
            AspectRatio::Square => SQUARE,
            AspectRatio::Portrait => PORTRAIT,
            AspectRatio::Story => STORY,
            AspectRatio::Landscape => LANDSCAPE,
            AspectRatio::Widescreen => WIDESCREEN,
        }
    }
}

impl From<AspectRatio> for CanvasSize {
    fn from(ratio: AspectRatio) -> Self {
        ratio.size()
    }
}

/// Convert canvas sizes between portrait and landscape orientations.
pub trait Orientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl Orientation for CanvasSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> CanvasSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
