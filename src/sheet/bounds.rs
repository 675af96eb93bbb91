// Bounds of an already-decoded sheet image

use crate::core::Rect;
use image::{DynamicImage, GenericImageView, RgbaImage};

/// Anything the slicer can read image bounds from
///
/// The slicer never touches pixel data, only the bounds. `Rect` stores
/// `f32` coordinates, which hold integer widths exactly only up to 2^24
/// pixels. Sources with integer dimensions also report `pixel_width` so
/// the frame count is computed from the exact width.
pub trait SheetImage {
    fn sheet_bounds(&self) -> Rect;

    /// Exact width in pixels, when the source has integer dimensions
    fn pixel_width(&self) -> Option<u32> {
        None
    }
}

impl SheetImage for Rect {
    fn sheet_bounds(&self) -> Rect {
        *self
    }
}

impl SheetImage for DynamicImage {
    fn sheet_bounds(&self) -> Rect {
        let (width, height) = self.dimensions();
        Rect::from_size(width as f32, height as f32)
    }

    fn pixel_width(&self) -> Option<u32> {
        Some(self.width())
    }
}

impl SheetImage for RgbaImage {
    fn sheet_bounds(&self) -> Rect {
        let (width, height) = self.dimensions();
        Rect::from_size(width as f32, height as f32)
    }

    fn pixel_width(&self) -> Option<u32> {
        Some(self.width())
    }
}
