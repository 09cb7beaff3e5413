//! Sampled pixel points and the grid sampler that produces them.

use glam::Vec3;

/// Alpha threshold, as a fraction of full scale, below which a sampled pixel
/// is treated as transparent and skipped.
pub const ALPHA_MIN: f32 = 0.01;

/// One sampled pixel, positioned in the unit RGB cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    /// Normalized channel values: x=R, y=G, z=B, each in [0,1].
    pub pos: Vec3,
    /// Display color, channel values at 0-255. The fill alpha is fixed by the
    /// renderer, not stored per point.
    pub rgb: [u8; 3],
}

impl Point3D {
    /// Builds a point from an 8-bit RGBA pixel, or `None` when the pixel is
    /// effectively transparent.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Option<Self> {
        if (a as f32 / 255.0) < ALPHA_MIN {
            return None;
        }
        Some(Self {
            pos: Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0),
            rgb: [r, g, b],
        })
    }

    /// Perceived luminance of the point's color, ITU-R BT.601 weights.
    #[inline]
    pub fn luminance(&self) -> f32 {
        0.299 * self.pos.x + 0.587 * self.pos.y + 0.114 * self.pos.z
    }
}

/// An ordered set of sampled points.
///
/// Rebuilt wholesale whenever the source image or the sampling step changes;
/// never mutated incrementally. Draw order is decided per frame by depth, not
/// by the order points appear here.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point3D>,
}

impl PointSet {
    pub fn new(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point3D] {
        &self.points
    }
}

/// Samples `rgba` (8-bit RGBA, row-major, tightly packed) on a `step`x`step`
/// grid and collects one point per pixel whose alpha clears [`ALPHA_MIN`].
///
/// `step` below 1 is treated as 1. A buffer shorter than `width * height * 4`
/// simply yields fewer points; the sampler never reads past the end.
pub fn sample_rgba(rgba: &[u8], width: u32, height: u32, step: u32) -> PointSet {
    let step = step.max(1) as usize;
    let (w, h) = (width as usize, height as usize);

    let mut points = Vec::new();
    for y in (0..h).step_by(step) {
        for x in (0..w).step_by(step) {
            let i = (y * w + x) * 4;
            let Some(px) = rgba.get(i..i + 4) else {
                continue;
            };
            if let Some(p) = Point3D::from_rgba8(px[0], px[1], px[2], px[3]) {
                points.push(p);
            }
        }
    }

    PointSet::new(points)
}
