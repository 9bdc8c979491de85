//! Length units used throughout layout.

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// A length in canvas pixels. Widths returned by a [`Measure`](crate::layout::Measure),
/// canvas dimensions, padding and font sizes all share this unit.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[display("{_0}px")]
#[serde(transparent)]
pub struct Px(pub f32);

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Mul<Px> for f32 {
    type Output = Px;

    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

/// Dividing one length by another yields a plain ratio
impl Div<Px> for Px {
    type Output = f32;

    fn div(self, rhs: Px) -> f32 {
        self.0 / rhs.0
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keeps_units() {
        let width = Px(1080.0) - Px(64.0) * 2.0;
        assert_eq!(width, Px(952.0));
        assert_eq!(Px(30.0) / Px(10.0), 3.0);
        assert_eq!(0.5 * Px(10.0), Px(5.0));
        assert_eq!(*Px(4.0), 4.0);
    }

    #[test]
    fn sums_and_displays() {
        let total: Px = [Px(1.0), Px(2.5), Px(3.5)].into_iter().sum();
        assert_eq!(total, Px(7.0));
        assert_eq!(Px(12.5).to_string(), "12.5px");
    }
}
