//! Crop engine.
//!
//! Renders a measured source region into a fixed-size output canvas under an
//! alignment policy, scaling uniformly and sampling nearest-neighbour for
//! pixel-art fidelity.

use crate::types::{ContentBounds, Frame, PixelBuffer};

/// How a crop measures content across a frame sequence.
///
/// This distinction is the most important semantic choice in the crop
/// subsystem and the two variants stay separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    /// Measure the sequence's first frame once and apply the identical crop
    /// rectangle to every frame. Preserves relative motion: a walk cycle's
    /// feet stay anchored to one ground line even as the silhouette's
    /// bounding box shifts frame to frame.
    AnimationRelative,

    /// Re-measure every frame independently and centre its content.
    /// Removes relative motion between frames.
    CenterCenter,
}

/// Horizontal placement of scaled content in the output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement of scaled content in the output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Requested crop behaviour for a frame sequence.
#[derive(Debug, Clone, Copy)]
pub struct CropPolicy {
    pub mode: CropMode,
    pub target_width: u32,
    pub target_height: u32,
    pub align_x: HorizontalAlign,
    pub align_y: VerticalAlign,
    /// Pixels to erode from each side of the measured bounds, trimming
    /// stray anti-aliasing fringes before the crop is taken.
    pub reduction: u32,
}

/// A resolved crop: the source region to sample and the output size.
///
/// Under [`CropMode::AnimationRelative`] one `CropParams` is computed from
/// the reference frame and reused verbatim for the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropParams {
    pub region: ContentBounds,
    pub target_width: u32,
    pub target_height: u32,
}

/// Measure a reference buffer and resolve the crop region for it.
///
/// The measured bounds are shrunk inward by `policy.reduction` on each side.
/// A region that would collapse to nothing clamps to 1px instead: a 1px
/// output is visibly wrong and lets the user correct the input, where an
/// error would abort the whole pipeline.
pub fn compute_crop_params(reference: &PixelBuffer, policy: &CropPolicy) -> CropParams {
    let bounds = ContentBounds::of(reference);
    CropParams {
        region: shrink(bounds, policy.reduction),
        target_width: policy.target_width.max(1),
        target_height: policy.target_height.max(1),
    }
}

/// Render the crop region of `source` into a new buffer of the target size.
///
/// Content is scaled uniformly by `min(tw/rw, th/rh)` (aspect-preserving,
/// never distorted) and placed according to the alignment pair. Pixels
/// outside the region are never sampled; cells the scaled content does not
/// cover stay transparent.
pub fn apply_crop(
    source: &PixelBuffer,
    params: &CropParams,
    align_x: HorizontalAlign,
    align_y: VerticalAlign,
) -> PixelBuffer {
    let region = params.region;
    let region_width = region.width.max(1);
    let region_height = region.height.max(1);
    let target_width = params.target_width;
    let target_height = params.target_height;

    let scale = (f64::from(target_width) / f64::from(region_width))
        .min(f64::from(target_height) / f64::from(region_height));

    let scaled_width = ((f64::from(region_width) * scale).round() as u32)
        .clamp(1, target_width);
    let scaled_height = ((f64::from(region_height) * scale).round() as u32)
        .clamp(1, target_height);

    let offset_x = match align_x {
        HorizontalAlign::Left => 0,
        HorizontalAlign::Center => (target_width - scaled_width) / 2,
        HorizontalAlign::Right => target_width - scaled_width,
    };
    let offset_y = match align_y {
        VerticalAlign::Top => 0,
        VerticalAlign::Center => (target_height - scaled_height) / 2,
        VerticalAlign::Bottom => target_height - scaled_height,
    };

    let mut out = PixelBuffer::new(target_width, target_height);

    for oy in 0..scaled_height {
        // Integer inverse map keeps sampling inside the region for every
        // output pixel: oy * rh / sh < rh.
        let src_y = region.y + (u64::from(oy) * u64::from(region_height) / u64::from(scaled_height)) as u32;
        let src_y = src_y.min(source.height().saturating_sub(1));

        for ox in 0..scaled_width {
            let src_x = region.x + (u64::from(ox) * u64::from(region_width) / u64::from(scaled_width)) as u32;
            let src_x = src_x.min(source.width().saturating_sub(1));

            out.set(offset_x + ox, offset_y + oy, source.get(src_x, src_y));
        }
    }

    out
}

/// Crop a whole frame sequence under a policy.
///
/// `AnimationRelative` resolves one set of params against the first frame
/// and reuses it for every frame; `CenterCenter` re-measures per frame and
/// centres (the alignment fields are not consulted - centring is what the
/// mode means).
pub fn crop_sequence(frames: &[Frame], policy: &CropPolicy) -> Vec<Frame> {
    match policy.mode {
        CropMode::AnimationRelative => {
            let Some(reference) = frames.first() else {
                return Vec::new();
            };
            let params = compute_crop_params(reference.pixels(), policy);
            frames
                .iter()
                .map(|frame| {
                    frame.with_pixels(apply_crop(
                        frame.pixels(),
                        &params,
                        policy.align_x,
                        policy.align_y,
                    ))
                })
                .collect()
        }
        CropMode::CenterCenter => frames
            .iter()
            .map(|frame| {
                let params = compute_crop_params(frame.pixels(), policy);
                frame.with_pixels(apply_crop(
                    frame.pixels(),
                    &params,
                    HorizontalAlign::Center,
                    VerticalAlign::Center,
                ))
            })
            .collect(),
    }
}

/// Shrink bounds inward by `reduction` pixels per side, clamping to 1px.
fn shrink(bounds: ContentBounds, reduction: u32) -> ContentBounds {
    let both_sides = reduction.saturating_mul(2);
    let width = if bounds.width > both_sides {
        bounds.width - both_sides
    } else {
        1
    };
    let height = if bounds.height > both_sides {
        bounds.height - both_sides
    } else {
        1
    };

    // Keep the shrunk region inside the original bounds even when clamped.
    let x = bounds.x + reduction.min(bounds.width.saturating_sub(1));
    let y = bounds.y + reduction.min(bounds.height.saturating_sub(1));

    ContentBounds {
        x,
        y,
        width,
        height,
    }
}
