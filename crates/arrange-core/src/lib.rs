//! Core types for the Arrange layout engine.
//!
//! This crate provides the vocabulary shared by every layout:
//! - The sizing model ([`DimensionProposal`], [`SizeProposal`])
//! - Geometry values ([`Point`], [`Size`], [`Rectangle`], [`EdgeInsets`], [`Alignment`])
//! - The [`LayoutItem`] capability
//! - Error types for checked entry points

pub mod errors;
pub mod item;
pub mod proposal;
pub mod rectangle;
pub mod types;

pub use errors::*;
pub use item::*;
pub use proposal::*;
pub use rectangle::*;
pub use types::*;
