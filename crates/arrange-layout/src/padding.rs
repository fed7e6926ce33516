//! Padding layout.

use arrange_core::{Alignment, EdgeInsets, LayoutError, LayoutItem, Rectangle, Size, SizeProposal};

use crate::layout::Layout;
use crate::overlay::ZStackLayout;

/// Insets the space offered to its items and grows their size back by the
/// same amount. Items are pinned to the top-leading corner of the inset
/// region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaddingLayout {
    pub insets: EdgeInsets,
}

impl PaddingLayout {
    const LAYOUT: ZStackLayout = ZStackLayout::new(Alignment::TopLeading);

    pub const fn new(insets: EdgeInsets) -> Self {
        Self { insets }
    }

    /// Same inset on every edge.
    pub const fn uniform(inset: f64) -> Self {
        Self::new(EdgeInsets::uniform(inset))
    }
}

impl Layout for PaddingLayout {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        Self::LAYOUT.natural_size(items).outset_by(self.insets)
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        let proposed = proposal.resolve(self.natural_size(items));
        let inner = SizeProposal::from(proposed.inset_by(self.insets));
        Self::LAYOUT.size_fitting(items, inner).outset_by(self.insets)
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        Self::LAYOUT.frames(items, bounds.inset_by(self.insets))
    }

    fn validate(&self) -> Result<(), LayoutError> {
        self.insets.validate()
    }
}
