//! Linear stacks.
//!
//! Space along the main axis is handed out tier by tier, highest priority
//! first. Inside a tier the least flexible item is sized first, where
//! flexibility is the gap between what an item reports for an expanded and
//! for a collapsed proposal. Each item is offered an even share of what is
//! left and keeps whatever it reports. Positions are assigned afterwards in
//! list order, without clamping to the bounds.

use std::cmp::Ordering;

use arrange_core::{Axis, DimensionProposal, LayoutItem, Point, Rectangle, Size, SizeProposal};
use indexmap::IndexMap;
use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

use crate::layout::Layout;

type Sizes = SmallVec<[Size; 8]>;

/// Placement of items on the cross axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossAlignment {
    /// Top for horizontal stacks, leading for vertical ones
    Start,
    /// Centered in the cross extent
    #[default]
    Center,
    /// Bottom for horizontal stacks, trailing for vertical ones
    End,
}

impl CrossAlignment {
    fn offset(self, available: f64, extent: f64) -> f64 {
        match self {
            CrossAlignment::Start => 0.0,
            CrossAlignment::Center => (available - extent) / 2.0,
            CrossAlignment::End => available - extent,
        }
    }
}

/// A stack along an arbitrary axis. [`HStackLayout`] and [`VStackLayout`]
/// are this engine with the axis fixed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearStack {
    /// Main axis
    pub axis: Axis,
    /// Gap between consecutive items; negative values overlap them
    pub spacing: f64,
    /// Cross-axis placement
    pub alignment: CrossAlignment,
}

/// An item waiting for its share within a tier.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    min_extent: f64,
    flexibility: f64,
}

impl Candidate {
    /// Least flexible first; among equals the higher floor goes first.
    /// Remaining ties keep list order because the sort is stable.
    fn allocation_order(a: &Candidate, b: &Candidate) -> Ordering {
        a.flexibility
            .partial_cmp(&b.flexibility)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.min_extent
                    .partial_cmp(&a.min_extent)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl LinearStack {
    pub const fn new(axis: Axis, spacing: f64) -> Self {
        Self {
            axis,
            spacing,
            alignment: CrossAlignment::Center,
        }
    }

    /// Set the cross-axis alignment.
    pub fn with_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn total_spacing(&self, count: usize) -> f64 {
        match count {
            0 => 0.0,
            n => self.spacing * (n - 1) as f64,
        }
    }

    /// Main extent is the sum plus spacing; cross extent is the maximum.
    fn enclosing_size(&self, sizes: &[Size]) -> Size {
        if sizes.is_empty() {
            return Size::ZERO;
        }
        let main = sizes.iter().map(|size| size.along(self.axis)).sum::<f64>()
            + self.total_spacing(sizes.len());
        let cross = sizes
            .iter()
            .map(|size| size.across(self.axis))
            .fold(0.0_f64, f64::max);
        Size::from_axes(self.axis, main, cross)
    }

    /// Resolve every item's size for a fixed main extent, indexed by list
    /// position.
    fn distribute(
        &self,
        items: &[&dyn LayoutItem],
        extent: f64,
        cross: DimensionProposal,
    ) -> Sizes {
        let axis = self.axis;
        let mut sizes: Sizes = smallvec![Size::ZERO; items.len()];
        let mut remaining = extent - self.total_spacing(items.len());

        let mut tiers: IndexMap<i32, SmallVec<[usize; 8]>> = IndexMap::new();
        for (index, item) in items.iter().enumerate() {
            tiers.entry(item.priority()).or_default().push(index);
        }
        tiers.sort_by(|a, _, b, _| b.cmp(a));

        for (priority, members) in &tiers {
            let mut candidates: SmallVec<[Candidate; 8]> = members
                .iter()
                .map(|&index| {
                    let item = items[index];
                    let min_extent = item
                        .size_that_fits(SizeProposal::from_axes(axis, DimensionProposal::Collapsed, cross))
                        .along(axis);
                    let max_extent = item
                        .size_that_fits(SizeProposal::from_axes(axis, DimensionProposal::Expanded, cross))
                        .along(axis);
                    Candidate {
                        index,
                        min_extent,
                        flexibility: flexibility(min_extent, max_extent),
                    }
                })
                .collect();
            candidates.sort_by(Candidate::allocation_order);

            let mut unresolved = candidates.len();
            for candidate in &candidates {
                let share = share_of(remaining, unresolved);
                let size = items[candidate.index]
                    .size_that_fits(SizeProposal::from_axes(axis, DimensionProposal::Fixed(share), cross));
                trace!(
                    "tier {priority}: item {} offered {share}, took {}",
                    candidate.index,
                    size.along(axis)
                );
                remaining = consume(remaining, size.along(axis));
                unresolved -= 1;
                sizes[candidate.index] = size;
            }
        }

        sizes
    }
}

fn flexibility(min_extent: f64, max_extent: f64) -> f64 {
    let flexibility = max_extent - min_extent;
    if flexibility.is_nan() {
        f64::INFINITY
    } else {
        flexibility
    }
}

/// Even share of what is left. Once earlier items overrun the extent the
/// share is negative and is proposed as is.
fn share_of(remaining: f64, unresolved: usize) -> f64 {
    if unresolved == 0 {
        return 0.0;
    }
    remaining / unresolved as f64
}

/// An unbounded budget stays unbounded.
fn consume(remaining: f64, extent: f64) -> f64 {
    if remaining == f64::INFINITY {
        remaining
    } else {
        remaining - extent
    }
}

impl Layout for LinearStack {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        let sizes: Sizes = items.iter().map(|item| item.intrinsic_size()).collect();
        self.enclosing_size(&sizes)
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        let cross = proposal.across(self.axis);
        let sizes = match proposal.along(self.axis) {
            DimensionProposal::Fixed(extent) => self.distribute(items, extent, cross),
            // Non-fixed proposals pass through so each item can answer with its own floor, ceiling or ideal.
            main => items
                .iter()
                .map(|item| item.size_that_fits(SizeProposal::from_axes(self.axis, main, cross)))
                .collect(),
        };
        self.enclosing_size(&sizes)
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        let axis = self.axis;
        let cross_extent = bounds.size.across(axis);
        let sizes = self.distribute(
            items,
            bounds.size.along(axis),
            DimensionProposal::Fixed(cross_extent),
        );

        let cross_origin = bounds.origin.across(axis);
        let mut cursor = bounds.min_along(axis);
        let frames: Vec<Rectangle> = sizes
            .iter()
            .map(|&size| {
                let main = cursor;
                cursor += size.along(axis) + self.spacing;
                let cross = cross_origin + self.alignment.offset(cross_extent, size.across(axis));
                Rectangle::from_origin_size(Point::from_axes(axis, main, cross), size)
            })
            .collect();

        debug!("{axis:?} stack placed {} items within {bounds:?}", frames.len());
        frames
    }
}

/// Arranges items left to right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HStackLayout {
    pub spacing: f64,
    pub alignment: CrossAlignment,
}

impl HStackLayout {
    pub const fn new(spacing: f64) -> Self {
        Self {
            spacing,
            alignment: CrossAlignment::Center,
        }
    }

    /// Set the gap between items.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the vertical placement of items.
    pub fn with_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn stack(&self) -> LinearStack {
        LinearStack::new(Axis::Horizontal, self.spacing).with_alignment(self.alignment)
    }
}

impl Layout for HStackLayout {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        self.stack().natural_size(items)
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        self.stack().size_fitting(items, proposal)
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        self.stack().frames(items, bounds)
    }
}

/// Arranges items top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VStackLayout {
    pub spacing: f64,
    pub alignment: CrossAlignment,
}

impl VStackLayout {
    pub const fn new(spacing: f64) -> Self {
        Self {
            spacing,
            alignment: CrossAlignment::Center,
        }
    }

    /// Set the gap between items.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the horizontal placement of items.
    pub fn with_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn stack(&self) -> LinearStack {
        LinearStack::new(Axis::Vertical, self.spacing).with_alignment(self.alignment)
    }
}

impl Layout for VStackLayout {
    fn natural_size(&self, items: &[&dyn LayoutItem]) -> Size {
        self.stack().natural_size(items)
    }

    fn size_fitting(&self, items: &[&dyn LayoutItem], proposal: SizeProposal) -> Size {
        self.stack().size_fitting(items, proposal)
    }

    fn frames(&self, items: &[&dyn LayoutItem], bounds: Rectangle) -> Vec<Rectangle> {
        self.stack().frames(items, bounds)
    }
}
