//! Layouts for the Arrange engine.
//!
//! A layout sizes and positions a list of [`LayoutItem`]s. Every layout
//! answers three questions about its items: how big they are at rest
//! ([`Layout::natural_size`]), how big they become for a given proposal
//! ([`Layout::size_fitting`]) and where each one goes inside some bounds
//! ([`Layout::frames`]).
//!
//! # Layouts
//!
//! - [`HStackLayout`] and [`VStackLayout`]: priority-tiered linear stacks
//! - [`ZStackLayout`]: items superimposed at an alignment anchor
//! - [`FrameLayout`]: exact or min/max dimensions around an overlay
//! - [`PaddingLayout`] and [`OffsetLayout`]: insets and translations
//!
//! [`Arrangement`] bundles a layout with its children so it can be nested
//! inside another layout.
//!
//! # Example
//!
//! ```
//! use arrange_layout::{Arrangement, HStackLayout, LayoutItem, Rectangle, Size, SizeProposal};
//!
//! struct Label(f64);
//!
//! impl LayoutItem for Label {
//!     fn intrinsic_size(&self) -> Size {
//!         Size::new(self.0, 12.0)
//!     }
//!
//!     fn size_that_fits(&self, _proposal: SizeProposal) -> Size {
//!         self.intrinsic_size()
//!     }
//! }
//!
//! let row = Arrangement::new(HStackLayout::new(8.0))
//!     .with_item(Label(40.0))
//!     .with_item(Label(60.0));
//!
//! let frames = row.frames(Rectangle::new(0.0, 0.0, 200.0, 20.0));
//! assert_eq!(frames[1].x(), 48.0);
//! assert_eq!(row.intrinsic_size(), Size::new(108.0, 12.0));
//! ```

mod arrangement;
mod frame;
mod layout;
mod offset;
mod overlay;
mod padding;
mod stack;

#[cfg(test)]
mod test_items;

pub use arrange_core::*;

pub use arrangement::Arrangement;
pub use frame::{DimensionLimits, FrameLayout};
pub use layout::{Layout, LayoutExt};
pub use offset::OffsetLayout;
pub use overlay::ZStackLayout;
pub use padding::PaddingLayout;
pub use stack::{CrossAlignment, HStackLayout, LinearStack, VStackLayout};
