//! Core domain types for framepack.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `PixelBuffer` - owned RGBA pixel grids
//! - `ContentBounds` - tight bounding boxes of visible content
//! - `Frame` - one animation frame with provenance and bounds
//! - `Direction` / `DirectionSet8` - 8-way directional frame sequences
//! - `GridSpec` - sheet subdivision geometry

mod bounds;
mod buffer;
mod colour;
mod direction;
mod frame;
mod grid;

pub use bounds::ContentBounds;
pub use buffer::PixelBuffer;
pub use colour::Colour;
pub use direction::{Direction, DirectionSet8};
pub use frame::Frame;
pub use grid::GridSpec;
