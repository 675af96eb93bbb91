// Fixed-width frame slicing

use super::{SheetError, SheetImage};
use crate::core::Rect;
use std::ops::Deref;

/// The ordered frames of a sprite sheet, left to right
///
/// Each frame is `frame_width` wide and spans the full sheet height.
/// Widths are exact when `frame_width` and the frame edges are whole
/// numbers below 2^24; other widths carry `f32` rounding of a few ulps.
/// Neighbouring frames always share an edge: `frames[i].max.x ==
/// frames[i + 1].min.x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Rect>,
    frame_width: f32,
}

impl FrameSequence {
    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Rect> {
        self.frames.get(index)
    }

    /// Get the number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Width every frame was cut at
    pub fn frame_width(&self) -> f32 {
        self.frame_width
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.frames
    }

    /// Raw `f32` frame data, four floats per frame, ready for a GPU buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frames)
    }

    pub fn into_vec(self) -> Vec<Rect> {
        self.frames
    }
}

impl Deref for FrameSequence {
    type Target = [Rect];

    fn deref(&self) -> &[Rect] {
        &self.frames
    }
}

/// Slice a decoded image into frames of `frame_width`
///
/// When the image reports an exact pixel width and `frame_width` is a
/// whole number, the frame count is computed with integer division.
pub fn slice<I: SheetImage + ?Sized>(
    image: &I,
    frame_width: f32,
) -> Result<FrameSequence, SheetError> {
    slice_span(image.sheet_bounds(), image.pixel_width(), frame_width)
}

/// Slice image bounds into frames of `frame_width`
///
/// A trailing column narrower than `frame_width` is discarded, so a frame
/// wider than the sheet yields an empty sequence.
pub fn slice_bounds(bounds: Rect, frame_width: f32) -> Result<FrameSequence, SheetError> {
    slice_span(bounds, None, frame_width)
}

fn slice_span(
    bounds: Rect,
    pixel_width: Option<u32>,
    frame_width: f32,
) -> Result<FrameSequence, SheetError> {
    if !frame_width.is_finite() || frame_width <= 0.0 {
        return Err(SheetError::InvalidFrameWidth(frame_width));
    }

    let count = match pixel_width {
        Some(px) if frame_width.fract() == 0.0 => whole_frame_count(px, frame_width),
        _ => frame_count(bounds.width(), frame_width),
    };

    // Both edges come from the same expression so neighbours abut exactly
    let edge = |i: usize| (f64::from(bounds.min.x) + i as f64 * f64::from(frame_width)) as f32;
    let frames = (0..count)
        .map(|i| Rect::new(edge(i), bounds.min.y, edge(i + 1), bounds.max.y))
        .collect();

    Ok(FrameSequence {
        frames,
        frame_width,
    })
}

fn whole_frame_count(pixel_width: u32, frame_width: f32) -> usize {
    if frame_width >= u32::MAX as f32 {
        return 0;
    }
    (pixel_width / frame_width as u32) as usize
}

fn frame_count(sheet_width: f32, frame_width: f32) -> usize {
    let count = (sheet_width / frame_width).floor();
    if count.is_nan() || count < 1.0 {
        0
    } else {
        count as usize
    }
}
