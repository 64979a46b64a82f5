//! Semantic diagram model types.
//!
//! These types describe *what* the diagram contains, in data coordinates:
//! x grows to the right and y grows upward. They carry no rendering state and
//! are never mutated after construction.
//!
//! # Organization
//!
//! - [`diagram`] - [`Diagram`] and its [`AxisRange`]s
//! - [`element`] - [`Component`], [`Layer`], [`FlowArrow`] and [`Note`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
