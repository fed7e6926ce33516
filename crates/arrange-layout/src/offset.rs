//! Offset layout.

use arrange_core::{Alignment, LayoutItem, Rectangle, Size, SizeProposal};
use glam::DVec2;

use crate::layout::Layout;
use crate::overlay::ZStackLayout;

/// Moves the frames of an overlay layout by a fixed vector. Sizing is
/// unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetLayout {
    pub x: f64,
    pub y: f64,
}

impl OffsetLayout {
    const LAYOUT: ZStackLayout = ZStackLayout::new(Alignment::Center);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translation(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for OffsetLayout {
    fn from(translation: DVec2) -> Self {
        Self::new(translation.x, translation.y)
    }
}

impl Layout for OffsetLayout {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        Self::LAYOUT.natural_size(items)
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        Self::LAYOUT.size_fitting(items, proposal)
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        Self::LAYOUT
            .frames(items, bounds)
            .into_iter()
            .map(|frame| frame.translated(self.x, self.y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_items::{Fixed, Responsive};
    use arrange_core::Point;

    #[test]
    fn test_sizing_is_passthrough() {
        let item = Responsive::new(40.0);
        let offset = OffsetLayout::new(15.0, -5.0);
        assert_eq!(offset.natural_size(&[&item]), Size::new(40.0, 1.0));
        let proposal = SizeProposal::fixed(20.0, 20.0);
        assert_eq!(
            offset.size_fitting(&[&item], proposal),
            ZStackLayout::default().size_fitting(&[&item], proposal)
        );
    }

    #[test]
    fn test_frames_are_translated() {
        let item = Fixed::square(20.0);
        let bounds = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        let frames = OffsetLayout::new(15.0, -5.0).frames(&[&item], bounds);
        assert_eq!(frames, vec![Rectangle::new(55.0, 35.0, 20.0, 20.0)]);
    }

    #[test]
    fn test_from_vector() {
        let offset = OffsetLayout::from(DVec2::new(3.0, 4.0));
        assert_eq!(offset.translation(), DVec2::new(3.0, 4.0));
        let frames = offset.frames(&[&Fixed::square(0.0)], Rectangle::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(frames[0].origin, Point::new(3.0, 4.0));
    }
}
