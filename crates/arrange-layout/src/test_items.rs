//! Leaf items used by the unit tests.

use arrange_core::{DimensionProposal, LayoutItem, Size, SizeProposal};

/// Resolves a proposal the way an elastic view does: fixed values are
/// taken verbatim, collapsed and unspecified give zero, expanded gives `+∞`.
fn elastic(proposal: DimensionProposal) -> f64 {
    match proposal {
        DimensionProposal::Fixed(value) => value,
        DimensionProposal::Collapsed | DimensionProposal::Unspecified => 0.0,
        DimensionProposal::Expanded => f64::INFINITY,
    }
}

/// Takes whatever it is offered on both axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer {
    pub priority: i32,
}

impl LayoutItem for Spacer {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        Size::new(elastic(proposal.width), elastic(proposal.height))
    }
}

/// Always reports the same size.
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    pub size: Size,
}

impl Fixed {
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: Size::new(width, height) }
    }

    pub fn square(dimension: f64) -> Self {
        Self { size: Size::square(dimension) }
    }
}

impl LayoutItem for Fixed {
    fn intrinsic_size(&self) -> Size {
        self.size
    }

    fn size_that_fits(&self, _proposal: SizeProposal) -> Size {
        self.size
    }
}

/// Fixed width; takes whatever height it is offered.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub f64);

impl LayoutItem for FixedWidth {
    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        Size::new(self.0, elastic(proposal.height))
    }
}

/// Elastic, but never narrower than its floor.
#[derive(Debug, Clone, Copy)]
pub struct Floored(pub f64);

impl LayoutItem for Floored {
    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        Size::new(elastic(proposal.width).max(self.0), elastic(proposal.height))
    }
}

/// One unit tall at its natural width; grows taller as it is narrowed so
/// its area stays constant.
#[derive(Debug, Clone, Copy)]
pub struct Responsive {
    pub width: f64,
}

impl Responsive {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl LayoutItem for Responsive {
    fn intrinsic_size(&self) -> Size {
        Size::new(self.width, 1.0)
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        match proposal.width {
            DimensionProposal::Collapsed => Size::ZERO,
            DimensionProposal::Expanded | DimensionProposal::Unspecified => self.intrinsic_size(),
            DimensionProposal::Fixed(width) if width >= self.width => self.intrinsic_size(),
            DimensionProposal::Fixed(width) => Size::new(width, self.width / width),
        }
    }
}

/// Answers every proposal with NaN.
#[derive(Debug, Clone, Copy)]
pub struct NotANumber;

impl LayoutItem for NotANumber {
    fn size_that_fits(&self, _proposal: SizeProposal) -> Size {
        Size::new(f64::NAN, 0.0)
    }
}
