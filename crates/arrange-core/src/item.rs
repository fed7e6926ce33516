//! The capability every layout participant implements.

use crate::proposal::SizeProposal;
use crate::types::Size;

/// Anything that can report its size preferences to a layout.
///
/// Implementors only need [`size_that_fits`](LayoutItem::size_that_fits).
/// It must be a pure function of the proposal for a given item state: a
/// layout pass calls it repeatedly and relies on getting the same answer.
///
/// Items that wrap host UI objects must only be called from the thread the
/// host toolkit designates for UI work. The layouts in this workspace hold
/// no state of their own and do not enforce this.
pub trait LayoutItem {
    /// Higher priorities are sized first by stacks.
    fn priority(&self) -> i32 {
        0
    }

    /// Natural size, considering only the item itself.
    fn intrinsic_size(&self) -> Size {
        Size::ZERO
    }

    /// The size the item prefers under `proposal`. It may be larger or
    /// smaller than what was proposed.
    fn size_that_fits(&self, proposal: SizeProposal) -> Size;
}

impl<T: LayoutItem + ?Sized> LayoutItem for &T {
    fn priority(&self) -> i32 {
        (**self).priority()
    }

    fn intrinsic_size(&self) -> Size {
        (**self).intrinsic_size()
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        (**self).size_that_fits(proposal)
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn priority(&self) -> i32 {
        (**self).priority()
    }

    fn intrinsic_size(&self) -> Size {
        (**self).intrinsic_size()
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        (**self).size_that_fits(proposal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Square;

    impl LayoutItem for Square {
        fn size_that_fits(&self, _proposal: SizeProposal) -> Size {
            Size::square(10.0)
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Square.priority(), 0);
        assert_eq!(Square.intrinsic_size(), Size::ZERO);
    }

    #[test]
    fn test_boxed_item_delegates() {
        let boxed: Box<dyn LayoutItem> = Box::new(Square);
        assert_eq!(boxed.size_that_fits(SizeProposal::EXPANDED), Size::square(10.0));
        assert_eq!((&boxed).priority(), 0);
    }
}
