//! The layout trait and its checked entry points.

use arrange_core::{LayoutError, LayoutItem, Rectangle, Size, SizeProposal};

/// A layout sizes and places a list of items.
///
/// Layouts are immutable descriptors. Each call is computed from scratch;
/// nothing is cached between calls. The item list is handed in per call, so
/// one descriptor can arrange any number of item lists.
///
/// Calls recurse into the items, which may wrap host UI objects. Drivers must
/// invoke these methods from the host toolkit's UI thread when that is the
/// case.
pub trait Layout {
    /// Size of the arrangement when every item takes its intrinsic size.
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size;

    /// Size the layout prefers for `items` under `proposal`.
    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size;

    /// One rectangle per item, in item order, placed within `bounds`.
    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle>;

    /// Check the layout's own parameters. Called by the [`LayoutExt`]
    /// entry points before any item is consulted.
    fn validate(&self) -> Result<(), LayoutError> {
        Ok(())
    }
}

/// Validating wrappers around [`Layout`] for drivers that do not trust
/// their inputs to be free of NaN.
pub trait LayoutExt: Layout {
    fn try_natural_size(&self, items: &[&dyn LayoutItem]) -> Result<Size, LayoutError> {
        self.validate()?;
        let size = self.natural_size(items);
        size.validate()?;
        Ok(size)
    }

    fn try_size_fitting(
        &self,
        items: &[&dyn LayoutItem],
        proposal: SizeProposal,
    ) -> Result<Size, LayoutError> {
        self.validate()?;
        proposal.validate()?;
        let size = self.size_fitting(items, proposal);
        size.validate()?;
        Ok(size)
    }

    fn try_frames(
        &self,
        items: &[&dyn LayoutItem],
        bounds: Rectangle,
    ) -> Result<Vec<Rectangle>, LayoutError> {
        self.validate()?;
        bounds.validate()?;
        let frames = self.frames(items, bounds);
        if frames.len() != items.len() {
            return Err(LayoutError::FrameCountMismatch {
                expected: items.len(),
                found: frames.len(),
            });
        }
        for frame in &frames {
            frame.validate()?;
        }
        Ok(frames)
    }
}

impl<L: Layout + ?Sized> LayoutExt for L {}

impl<L: Layout + ?Sized> Layout for &L {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        (**self).natural_size(items)
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        (**self).size_fitting(items, proposal)
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        (**self).frames(items, bounds)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        (**self).validate()
    }
}
