//! Frame layout: clamps or targets the size of a region.
//!
//! Per axis the frame has four regimes depending on which limits are set:
//!
//! - **minimum and maximum**: the child's size clamped to `min..=max(min, max)`,
//!   then to the bounds. An inverted range collapses onto the minimum.
//! - **minimum only**: at least the minimum, even beyond the bounds.
//! - **maximum only**: exactly the maximum clamped to the bounds. The frame
//!   is a target size and the child floats inside it.
//! - **neither**: the child's size clamped to the bounds.
//!
//! An infinite limit adopts the bounds' extent when fitting, but is kept as
//! is for the natural size.

use arrange_core::{Alignment, DimensionProposal, LayoutItem, Rectangle, Size, SizeProposal};

use crate::layout::Layout;
use crate::overlay::ZStackLayout;

/// Optional minimum and maximum along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionLimits {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl DimensionLimits {
    pub const NONE: Self = Self { minimum: None, maximum: None };

    pub const fn new(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        Self { minimum, maximum }
    }

    /// Minimum and maximum both set to `extent`.
    pub const fn exactly(extent: f64) -> Self {
        Self::new(Some(extent), Some(extent))
    }

    fn natural(&self, child: f64) -> f64 {
        match (self.minimum, self.maximum) {
            (Some(min), Some(max)) => clamp(child, min, min.max(max)),
            (Some(min), None) => min.max(child),
            (None, Some(max)) => max.min(child),
            (None, None) => child,
        }
    }

    /// Infinite limits replaced by the bounds' extent.
    fn adopting(&self, bounds: f64) -> Self {
        let adopt = |limit: Option<f64>| {
            limit.map(|value| if value == f64::INFINITY { bounds } else { value })
        };
        Self::new(adopt(self.minimum), adopt(self.maximum))
    }

    fn child_proposal(&self, bounds: f64) -> f64 {
        self.maximum.map_or(bounds, |max| max.min(bounds))
    }

    fn fitting(&self, child: f64, bounds: f64) -> f64 {
        match (self.minimum, self.maximum) {
            (Some(min), Some(max)) => clamp(child, min, min.max(max)).min(bounds),
            (Some(min), None) => min.max(child),
            (None, Some(max)) => max.min(bounds),
            (None, None) => child.min(bounds),
        }
    }
}

/// `lower` wins when the range is inverted.
fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    value.min(upper).max(lower)
}

/// Constrains the region its items are laid out in, then places them in
/// that region with an overlay layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameLayout {
    pub width: DimensionLimits,
    pub height: DimensionLimits,
    layout: ZStackLayout,
}

impl FrameLayout {
    /// A frame with no limits and centered content.
    pub const fn new() -> Self {
        Self {
            width: DimensionLimits::NONE,
            height: DimensionLimits::NONE,
            layout: ZStackLayout::new(Alignment::Center),
        }
    }

    /// A frame with minimum and maximum pinned to the given extents.
    pub fn fixed(width: Option<f64>, height: Option<f64>) -> Self {
        let pin = |extent: Option<f64>| DimensionLimits::new(extent, extent);
        Self {
            width: pin(width),
            height: pin(height),
            ..Self::new()
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = DimensionLimits::exactly(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = DimensionLimits::exactly(height);
        self
    }

    pub fn with_minimum_width(mut self, width: f64) -> Self {
        self.width.minimum = Some(width);
        self
    }

    pub fn with_maximum_width(mut self, width: f64) -> Self {
        self.width.maximum = Some(width);
        self
    }

    pub fn with_minimum_height(mut self, height: f64) -> Self {
        self.height.minimum = Some(height);
        self
    }

    pub fn with_maximum_height(mut self, height: f64) -> Self {
        self.height.maximum = Some(height);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    pub fn alignment(&self) -> Alignment {
        self.layout.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.layout.alignment = alignment;
    }

    /// Numeric extents of `proposal`, taking unspecified axes from the
    /// natural size.
    fn resolve_bounds(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        let unspecified = [proposal.width, proposal.height]
            .contains(&DimensionProposal::Unspecified);
        let ideal = if unspecified {
            self.natural_size(items)
        } else {
            Size::ZERO
        };
        proposal.resolve(ideal)
    }
}

impl Layout for FrameLayout {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        let child = self.layout.natural_size(items);
        Size::new(self.width.natural(child.width), self.height.natural(child.height))
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        let bounds = self.resolve_bounds(items, proposal);
        let width = self.width.adopting(bounds.width);
        let height = self.height.adopting(bounds.height);

        let child = self.layout.size_fitting(
            items,
            SizeProposal::fixed(width.child_proposal(bounds.width), height.child_proposal(bounds.height)),
        );
        Size::new(
            width.fitting(child.width, bounds.width),
            height.fitting(child.height, bounds.height),
        )
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        let size = self.size_fitting(items, SizeProposal::from(bounds.size));
        let region = Rectangle::from_origin_size(bounds.origin, size);
        self.layout.frames(items, region)
    }
}
