//! Core geometry value types.

use glam::DVec2;

use crate::errors::{ensure_numbers, LayoutError};

/// A location in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Component perpendicular to `axis`.
    pub fn across(&self, axis: Axis) -> f64 {
        self.along(axis.cross())
    }

    /// Build a point from a main-axis and a cross-axis component.
    pub fn from_axes(axis: Axis, main: f64, cross: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// A width and height pair.
///
/// Zero is a valid size everywhere, and `+∞` may appear whenever an item
/// answers an expanded proposal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size with equal width and height.
    pub const fn square(dimension: f64) -> Self {
        Self::new(dimension, dimension)
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn across(&self, axis: Axis) -> f64 {
        self.along(axis.cross())
    }

    pub fn from_axes(axis: Axis, main: f64, cross: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Componentwise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Grow by the insets on every side.
    pub fn outset_by(self, insets: EdgeInsets) -> Size {
        Size::new(
            self.width + insets.horizontal(),
            self.height + insets.vertical(),
        )
    }

    /// Shrink by the insets on every side. The result may be negative.
    pub fn inset_by(self, insets: EdgeInsets) -> Size {
        Size::new(
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        ensure_numbers("size", &[self.width, self.height])
    }
}

impl From<DVec2> for Size {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for DVec2 {
    fn from(s: Size) -> Self {
        DVec2::new(s.width, s.height)
    }
}

/// Insets applied to each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 };

    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    /// Create uniform insets.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric insets.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, vertical, horizontal, horizontal)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        ensure_numbers("edge insets", &[self.top, self.bottom, self.left, self.right])
    }
}

/// Direction along which a stack arranges its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left to right
    #[default]
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// One of the nine anchor positions of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Alignment::TopLeading,
        Alignment::Top,
        Alignment::TopTrailing,
        Alignment::Leading,
        Alignment::Center,
        Alignment::Trailing,
        Alignment::BottomLeading,
        Alignment::Bottom,
        Alignment::BottomTrailing,
    ];

    /// Horizontal placement as a fraction of the width (0 leading, 1 trailing).
    pub const fn horizontal_fraction(self) -> f64 {
        match self {
            Alignment::TopLeading | Alignment::Leading | Alignment::BottomLeading => 0.0,
            Alignment::Top | Alignment::Center | Alignment::Bottom => 0.5,
            Alignment::TopTrailing | Alignment::Trailing | Alignment::BottomTrailing => 1.0,
        }
    }

    /// Vertical placement as a fraction of the height (0 top, 1 bottom).
    pub const fn vertical_fraction(self) -> f64 {
        match self {
            Alignment::TopLeading | Alignment::Top | Alignment::TopTrailing => 0.0,
            Alignment::Leading | Alignment::Center | Alignment::Trailing => 0.5,
            Alignment::BottomLeading | Alignment::Bottom | Alignment::BottomTrailing => 1.0,
        }
    }
}
