//! Source image loading and sampling into point sets.

use anyhow::{Context, Result};
use log::info;
use rgbcloud::{sample_rgba, PointSet};
use std::path::Path;

/// A decoded source image, retained so the sampling step can change without
/// re-reading the file.
#[derive(Debug)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    rgba: Vec<u8>,
}

impl SourceImage {
    /// Decodes `path` into tightly packed RGBA8.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        info!("Decoded {} ({}x{})", path.display(), width, height);
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Builds a source straight from raw RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self { width, height, rgba }
    }

    /// Samples the image on a `step` grid into a fresh point set.
    pub fn sample(&self, step: u32) -> PointSet {
        let points = sample_rgba(&self.rgba, self.width, self.height, step);
        info!(
            "Sampled {} points (step {}, {}x{} source)",
            points.len(),
            step,
            self.width,
            self.height
        );
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resampling_with_a_finer_step_yields_more_points() {
        let rgba = vec![200u8; 16 * 16 * 4];
        let src = SourceImage::from_rgba8(16, 16, rgba);
        let coarse = src.sample(8).len();
        let medium = src.sample(4).len();
        let fine = src.sample(2).len();
        assert!(coarse < medium && medium < fine);
        assert_eq!(fine, 64);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = SourceImage::open(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/image.png"));
    }
}
