//! Frame normalization and sheet assembly operations.
//!
//! Every operation here is pure and copy-on-write: inputs are taken by
//! reference and a freshly allocated buffer or frame is returned, so passes
//! compose freely and independent frames can be processed in any order.
//! Bounds measurement itself lives on [`crate::types::ContentBounds`].

mod colorkey;
mod compose;
mod crop;
mod slice;

pub use colorkey::{chroma_key, remove_halo, HALO_SEED_ALPHA};
pub use compose::{compose_directional, compose_flat};
pub use crop::{
    apply_crop, compute_crop_params, crop_sequence, CropMode, CropParams, CropPolicy,
    HorizontalAlign, VerticalAlign,
};
pub use slice::{slice, slice_directions};
