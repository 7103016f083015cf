//! framepack - Sprite frame normalization and sheet assembly
//!
//! A library for turning raw captures - sliced sheets, video stills, drawn
//! pixels - into uniform, correctly anchored animation frames, and packing
//! them back into sprite sheets plus layout metadata for a 2D game.

pub mod cli;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod png;
pub mod types;

pub use error::{FramepackError, Result};
pub use layout::{write_layout_json, AnimationEntry, SheetLayout};
pub use manifest::Manifest;
pub use pipeline::{
    apply_crop, chroma_key, compose_directional, compose_flat, compute_crop_params, crop_sequence,
    remove_halo, slice, slice_directions, CropMode, CropParams, CropPolicy, HorizontalAlign,
    VerticalAlign,
};
pub use png::{read_png, scale_buffer, write_png};
pub use types::{Colour, ContentBounds, Direction, DirectionSet8, Frame, GridSpec, PixelBuffer};
