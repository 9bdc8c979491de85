use crate::units::*;

/// A rectangle on the canvas, specified by two opposite corners. Canvas coordinates put the
/// origin at the top-left corner with `y` growing downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (top-left) corner.
    pub x1: Px,
    /// The y-coordinate of the first (top-left) corner.
    pub y1: Px,
    /// The x-coordinate of the second (bottom-right) corner.
    pub x2: Px,
    /// The y-coordinate of the second (bottom-right) corner.
    pub y2: Px,
}

impl Rect {
    /// A rectangle covering `(0, 0)` to `(width, height)`, shrunk by `inset` on every side
    pub fn inset(width: Px, height: Px, inset: Px) -> Rect {
        Rect {
            x1: inset,
            y1: inset,
            x2: width - inset,
            y2: height - inset,
        }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }
}
