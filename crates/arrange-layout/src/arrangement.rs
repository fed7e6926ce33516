//! A layout bundled with its children, usable as an item of another layout.

use std::fmt;

use arrange_core::{LayoutItem, Rectangle, Size, SizeProposal};
use smallvec::SmallVec;

use crate::layout::Layout;

/// A layout together with the items it arranges.
///
/// An arrangement is itself a [`LayoutItem`]: its intrinsic size is the
/// layout's natural size and it answers proposals with the layout's fitting
/// size. This is how layouts nest.
pub struct Arrangement<L> {
    layout: L,
    items: Vec<Box<dyn LayoutItem>>,
    priority: i32,
}

impl<L: Layout> Arrangement<L> {
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            items: Vec::new(),
            priority: 0,
        }
    }

    /// Append a child.
    pub fn with_item(mut self, item: impl LayoutItem + 'static) -> Self {
        self.push(item);
        self
    }

    /// Set the priority this arrangement reports to its parent.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn push(&mut self, item: impl LayoutItem + 'static) {
        self.items.push(Box::new(item));
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Frames of the direct children within `bounds`, in insertion order.
    pub fn frames(&self, bounds: Rectangle) -> Vec<Rectangle> {
        self.layout.frames(&self.item_refs(), bounds)
    }

    fn item_refs(&self) -> SmallVec<[&dyn LayoutItem; 8]> {
        self.items.iter().map(|item| item.as_ref()).collect()
    }
}

impl<L: Layout> LayoutItem for Arrangement<L> {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn intrinsic_size(&self) -> Size {
        self.layout.natural_size(&self.item_refs())
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        self.layout.size_fitting(&self.item_refs(), proposal)
    }
}

impl<L: fmt::Debug> fmt::Debug for Arrangement<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arrangement")
            .field("layout", &self.layout)
            .field("items", &self.items.len())
            .field("priority", &self.priority)
            .finish()
    }
}
