//! Axis-aligned rectangles and their anchor projections.
//!
//! Every projection is a pure getter/setter pair over `origin` and `size`.
//! Setters move the origin and leave the size untouched.

use crate::errors::{ensure_numbers, LayoutError};
use crate::types::{Alignment, Axis, EdgeInsets, Point, Size};

/// A rectangle described by its top-leading origin and its size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub origin: Point,
    pub size: Size,
}

impl Rectangle {
    pub const ZERO: Self = Self { origin: Point::ZERO, size: Size::ZERO };

    /// Create a rectangle with position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.origin.x = x;
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.origin.y = y;
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.size.width = width;
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.size.height = height;
    }

    // Horizontal edges

    pub fn leading_x(&self) -> f64 {
        self.origin.x
    }

    pub fn set_leading_x(&mut self, x: f64) {
        self.origin.x = x;
    }

    pub fn center_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn set_center_x(&mut self, x: f64) {
        self.origin.x = x - self.size.width / 2.0;
    }

    pub fn trailing_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn set_trailing_x(&mut self, x: f64) {
        self.origin.x = x - self.size.width;
    }

    // Vertical edges

    pub fn top_y(&self) -> f64 {
        self.origin.y
    }

    pub fn set_top_y(&mut self, y: f64) {
        self.origin.y = y;
    }

    pub fn center_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn set_center_y(&mut self, y: f64) {
        self.origin.y = y - self.size.height / 2.0;
    }

    pub fn bottom_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn set_bottom_y(&mut self, y: f64) {
        self.origin.y = y - self.size.height;
    }

    /// The point at `alignment`.
    pub fn anchor(&self, alignment: Alignment) -> Point {
        Point::new(
            self.origin.x + offset(self.size.width, alignment.horizontal_fraction()),
            self.origin.y + offset(self.size.height, alignment.vertical_fraction()),
        )
    }

    /// Move the rectangle so that its anchor at `alignment` lands on `point`.
    pub fn set_anchor(&mut self, alignment: Alignment, point: Point) {
        self.origin = Point::new(
            point.x - offset(self.size.width, alignment.horizontal_fraction()),
            point.y - offset(self.size.height, alignment.vertical_fraction()),
        );
    }

    pub fn top_leading(&self) -> Point {
        self.anchor(Alignment::TopLeading)
    }

    pub fn set_top_leading(&mut self, point: Point) {
        self.set_anchor(Alignment::TopLeading, point);
    }

    pub fn top(&self) -> Point {
        self.anchor(Alignment::Top)
    }

    pub fn set_top(&mut self, point: Point) {
        self.set_anchor(Alignment::Top, point);
    }

    pub fn top_trailing(&self) -> Point {
        self.anchor(Alignment::TopTrailing)
    }

    pub fn set_top_trailing(&mut self, point: Point) {
        self.set_anchor(Alignment::TopTrailing, point);
    }

    pub fn leading(&self) -> Point {
        self.anchor(Alignment::Leading)
    }

    pub fn set_leading(&mut self, point: Point) {
        self.set_anchor(Alignment::Leading, point);
    }

    pub fn center(&self) -> Point {
        self.anchor(Alignment::Center)
    }

    pub fn set_center(&mut self, point: Point) {
        self.set_anchor(Alignment::Center, point);
    }

    pub fn trailing(&self) -> Point {
        self.anchor(Alignment::Trailing)
    }

    pub fn set_trailing(&mut self, point: Point) {
        self.set_anchor(Alignment::Trailing, point);
    }

    pub fn bottom_leading(&self) -> Point {
        self.anchor(Alignment::BottomLeading)
    }

    pub fn set_bottom_leading(&mut self, point: Point) {
        self.set_anchor(Alignment::BottomLeading, point);
    }

    pub fn bottom(&self) -> Point {
        self.anchor(Alignment::Bottom)
    }

    pub fn set_bottom(&mut self, point: Point) {
        self.set_anchor(Alignment::Bottom, point);
    }

    pub fn bottom_trailing(&self) -> Point {
        self.anchor(Alignment::BottomTrailing)
    }

    pub fn set_bottom_trailing(&mut self, point: Point) {
        self.set_anchor(Alignment::BottomTrailing, point);
    }

    /// Coordinate of the leading edge along `axis`.
    pub fn min_along(&self, axis: Axis) -> f64 {
        self.origin.along(axis)
    }

    /// Shrink by the insets on every side, moving the origin inward.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rectangle {
        Rectangle::from_origin_size(
            Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            self.size.inset_by(insets),
        )
    }

    /// Same size, origin moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Rectangle {
        Rectangle::from_origin_size(
            Point::new(self.origin.x + dx, self.origin.y + dy),
            self.size,
        )
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        ensure_numbers(
            "rectangle",
            &[self.origin.x, self.origin.y, self.size.width, self.size.height],
        )
    }
}

/// Distance from the leading edge to `fraction` of `extent`. The leading
/// edge itself is always at zero, even for an infinite extent.
fn offset(extent: f64, fraction: f64) -> f64 {
    if fraction == 0.0 {
        0.0
    } else {
        extent * fraction
    }
}
