// Axis-aligned rectangles in image coordinate space

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// An axis-aligned rectangle given by its minimum and maximum corners
///
/// Used both for image bounds and for the frames cut out of a sheet.
/// The layout is plain `f32` data so a frame list can be uploaded to the
/// GPU as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rect {
    /// Minimum corner (x0, y0)
    pub min: Vec2,
    /// Maximum corner (x1, y1)
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its corner coordinates
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }

    /// Create a rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Normalized texture coordinates of this rectangle inside `sheet`
    ///
    /// Returns `(uv_min, uv_max)` in the range 0.0 to 1.0. A degenerate
    /// sheet yields zero coordinates.
    pub fn uv(&self, sheet: &Rect) -> (Vec2, Vec2) {
        let size = sheet.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return (Vec2::ZERO, Vec2::ZERO);
        }

        (
            (self.min - sheet.min) / size,
            (self.max - sheet.min) / size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(32.0, 0.0, 64.0, 48.0);
        assert_eq!(rect.width(), 32.0);
        assert_eq!(rect.height(), 48.0);
        assert_eq!(rect.size(), Vec2::new(32.0, 48.0));
    }

    #[test]
    fn test_rect_from_size() {
        let rect = Rect::from_size(160.0, 32.0);
        assert_eq!(rect.min, Vec2::ZERO);
        assert_eq!(rect.max, Vec2::new(160.0, 32.0));
    }

    #[test]
    fn test_rect_uv() {
        let sheet = Rect::from_size(256.0, 64.0);
        let frame = Rect::new(64.0, 0.0, 128.0, 64.0);

        let (uv_min, uv_max) = frame.uv(&sheet);
        assert_relative_eq!(uv_min.x, 0.25);
        assert_relative_eq!(uv_min.y, 0.0);
        assert_relative_eq!(uv_max.x, 0.5);
        assert_relative_eq!(uv_max.y, 1.0);
    }

    #[test]
    fn test_rect_uv_degenerate_sheet() {
        let sheet = Rect::from_size(0.0, 64.0);
        let frame = Rect::new(0.0, 0.0, 16.0, 64.0);
        assert_eq!(frame.uv(&sheet), (Vec2::ZERO, Vec2::ZERO));
    }

    #[test]
    fn test_rect_pod_layout() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&rect));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
