//! The sizing vocabulary parents use to express intent to their children.
//!
//! A proposal is not a raw number: `Collapsed` asks an item for
//! its floor, `Expanded` for its ceiling and `Unspecified` for its ideal
//! size, none of which is the same as a fixed `0.0` or `f64::INFINITY`.

use crate::errors::{ensure_numbers, LayoutError};
use crate::types::{Axis, Size};

/// A proposed dimension along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DimensionProposal {
    /// A specific extent.
    Fixed(f64),
    /// Zero space; requests the item's minimum.
    Collapsed,
    /// Unbounded space; requests the item's maximum.
    Expanded,
    /// No proposal; the item should use its ideal size.
    #[default]
    Unspecified,
}

impl DimensionProposal {
    /// Numeric value of the proposal, with `Unspecified` mapped to `ideal`.
    pub fn resolve(self, ideal: f64) -> f64 {
        match self {
            DimensionProposal::Fixed(value) => value,
            DimensionProposal::Collapsed => 0.0,
            DimensionProposal::Expanded => f64::INFINITY,
            DimensionProposal::Unspecified => ideal,
        }
    }

    /// The fixed extent, if any.
    pub fn fixed(self) -> Option<f64> {
        match self {
            DimensionProposal::Fixed(value) => Some(value),
            _ => None,
        }
    }
}

/// A proposal along both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeProposal {
    pub width: DimensionProposal,
    pub height: DimensionProposal,
}

impl SizeProposal {
    /// Both axes collapsed. Requests the minimum size.
    pub const COLLAPSED: Self = Self::new(DimensionProposal::Collapsed, DimensionProposal::Collapsed);

    /// Both axes expanded. Requests the maximum size.
    pub const EXPANDED: Self = Self::new(DimensionProposal::Expanded, DimensionProposal::Expanded);

    /// Both axes unspecified. Requests the ideal size.
    pub const UNSPECIFIED: Self =
        Self::new(DimensionProposal::Unspecified, DimensionProposal::Unspecified);

    pub const fn new(width: DimensionProposal, height: DimensionProposal) -> Self {
        Self { width, height }
    }

    /// Fixed proposal on both axes.
    pub const fn fixed(width: f64, height: f64) -> Self {
        Self::new(DimensionProposal::Fixed(width), DimensionProposal::Fixed(height))
    }

    pub fn along(&self, axis: Axis) -> DimensionProposal {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn across(&self, axis: Axis) -> DimensionProposal {
        self.along(axis.cross())
    }

    pub fn from_axes(axis: Axis, main: DimensionProposal, cross: DimensionProposal) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Numeric size of the proposal, with unspecified axes taken from `ideal`.
    pub fn resolve(&self, ideal: Size) -> Size {
        Size::new(self.width.resolve(ideal.width), self.height.resolve(ideal.height))
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let values: Vec<f64> = [self.width, self.height]
            .into_iter()
            .filter_map(DimensionProposal::fixed)
            .collect();
        ensure_numbers("size proposal", &values)
    }
}

impl From<Size> for SizeProposal {
    fn from(size: Size) -> Self {
        Self::fixed(size.width, size.height)
    }
}
