//! Tierplot Core Types and Definitions
//!
//! This crate provides the foundational types for tierplot architecture
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawables that emit layered SVG ([`draw`] module)
//! - **Semantic**: The diagram model: components, layers, arrows and notes ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
