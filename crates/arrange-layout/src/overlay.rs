//! Overlay layout: items stacked on top of each other.

use arrange_core::{Alignment, LayoutItem, Point, Rectangle, Size, SizeProposal};

use crate::layout::Layout;

/// Superimposes items. Each item is sized on its own and pinned to the
/// bounds at the same anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZStackLayout {
    pub alignment: Alignment,
}

impl ZStackLayout {
    pub const fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }
}

/// Componentwise maximum of `sizes`, or zero when there are none.
fn enclosing(sizes: impl Iterator<Item = Size>) -> Size {
    sizes.reduce(Size::max).unwrap_or(Size::ZERO)
}

impl Layout for ZStackLayout {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        enclosing(items.iter().map(|item| item.intrinsic_size()))
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        enclosing(items.iter().map(|item| item.size_that_fits(proposal)))
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        let proposal = SizeProposal::from(bounds.size);
        let anchor = bounds.anchor(self.alignment);
        items
            .iter()
            .map(|item| {
                let mut frame = Rectangle::from_origin_size(Point::ZERO, item.size_that_fits(proposal));
                frame.set_anchor(self.alignment, anchor);
                frame
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_items::{Fixed, Responsive, Spacer};

    #[test]
    fn test_empty() {
        let layout = ZStackLayout::default();
        assert_eq!(layout.natural_size(&[]), Size::ZERO);
        assert_eq!(layout.size_fitting(&[], SizeProposal::EXPANDED), Size::ZERO);
        assert!(layout.frames(&[], Rectangle::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }

    #[test]
    fn test_natural_size_is_componentwise_max() {
        let (wide, tall) = (Fixed::new(40.0, 10.0), Fixed::new(10.0, 30.0));
        assert_eq!(ZStackLayout::default().natural_size(&[&wide, &tall]), Size::new(40.0, 30.0));
    }

    #[test]
    fn test_every_item_gets_the_same_proposal() {
        let (narrow, spacer) = (Responsive::new(20.0), Spacer::default());
        let size = ZStackLayout::default().size_fitting(&[&narrow, &spacer], SizeProposal::fixed(10.0, 5.0));
        // narrow answers 10x2, spacer answers 10x5
        assert_eq!(size, Size::new(10.0, 5.0));
    }

    #[test]
    fn test_negative_answers_are_kept() {
        let (a, b) = (Fixed::new(-10.0, -4.0), Fixed::new(-20.0, -2.0));
        let layout = ZStackLayout::default();
        assert_eq!(layout.natural_size(&[&a, &b]), Size::new(-10.0, -2.0));
        assert_eq!(layout.size_fitting(&[&a, &b], SizeProposal::COLLAPSED), Size::new(-10.0, -2.0));
    }

    #[test]
    fn test_frames_centered_by_default() {
        let item = Fixed::new(20.0, 10.0);
        let frames = ZStackLayout::default().frames(&[&item], Rectangle::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(frames[0], Rectangle::new(50.0, 40.0, 20.0, 10.0));
    }

    #[test]
    fn test_frames_for_each_alignment() {
        let item = Fixed::new(20.0, 10.0);
        let bounds = Rectangle::new(0.0, 0.0, 100.0, 50.0);
        let expected = [
            (Alignment::TopLeading, Point::new(0.0, 0.0)),
            (Alignment::Top, Point::new(40.0, 0.0)),
            (Alignment::TopTrailing, Point::new(80.0, 0.0)),
            (Alignment::Leading, Point::new(0.0, 20.0)),
            (Alignment::Center, Point::new(40.0, 20.0)),
            (Alignment::Trailing, Point::new(80.0, 20.0)),
            (Alignment::BottomLeading, Point::new(0.0, 40.0)),
            (Alignment::Bottom, Point::new(40.0, 40.0)),
            (Alignment::BottomTrailing, Point::new(80.0, 40.0)),
        ];
        for (alignment, origin) in expected {
            let frames = ZStackLayout::new(alignment).frames(&[&item], bounds);
            assert_eq!(frames[0].origin, origin, "{alignment:?}");
        }
    }

    #[test]
    fn test_oversized_item_overflows_around_anchor() {
        let item = Fixed::square(60.0);
        let frames = ZStackLayout::default().frames(&[&item], Rectangle::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(frames[0].origin, Point::new(-10.0, -10.0));
    }
}
