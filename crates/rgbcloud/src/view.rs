//! Orbit and zoom parameters.

use std::f32::consts::FRAC_PI_2;
use std::ops::RangeInclusive;

/// Orbit/zoom state read by the projector and renderer and mutated by the
/// interaction controller.
///
/// This is a plain value, not ambient state: it is passed explicitly so
/// several independent views can exist and rendering stays headless-testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Pitch about the horizontal axis, radians. Always inside
    /// `(-PI/2 + PITCH_MARGIN, PI/2 - PITCH_MARGIN)` so the orbit never flips
    /// through the poles.
    pub rx: f32,
    /// Yaw about the vertical axis, radians. Unbounded; wraps through
    /// trigonometric periodicity.
    pub ry: f32,
    /// Magnification factor. Always positive; clamped to one of the two zoom
    /// ranges below depending on who set it.
    pub zoom: f32,
}

impl ViewState {
    /// Margin keeping pitch strictly away from straight up/down.
    pub const PITCH_MARGIN: f32 = 0.01;

    /// Zoom bounds for interactive wheel input.
    pub const WHEEL_ZOOM_RANGE: RangeInclusive<f32> = 0.4..=4.0;

    /// Wider zoom bounds used by automatic fitting, so very small or very
    /// spread-out clouds can still be brought fully into view. A fit may land
    /// outside [`Self::WHEEL_ZOOM_RANGE`]; the next wheel event pulls zoom
    /// back inside it.
    pub const FIT_ZOOM_RANGE: RangeInclusive<f32> = 0.2..=6.0;

    /// Largest legal pitch magnitude.
    #[inline]
    pub fn pitch_limit() -> f32 {
        FRAC_PI_2 - Self::PITCH_MARGIN
    }

    /// Clamps a pitch angle into the legal interval.
    #[inline]
    pub fn clamp_pitch(rx: f32) -> f32 {
        let limit = Self::pitch_limit();
        rx.clamp(-limit, limit)
    }

    /// Clamps a zoom into the interactive wheel range.
    #[inline]
    pub fn clamp_wheel_zoom(zoom: f32) -> f32 {
        zoom.clamp(*Self::WHEEL_ZOOM_RANGE.start(), *Self::WHEEL_ZOOM_RANGE.end())
    }

    /// Clamps a zoom into the auto-fit range.
    #[inline]
    pub fn clamp_fit_zoom(zoom: f32) -> f32 {
        zoom.clamp(*Self::FIT_ZOOM_RANGE.start(), *Self::FIT_ZOOM_RANGE.end())
    }

    /// Restores the default orientation and zoom.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rx: -0.9,
            ry: 0.6,
            zoom: 1.6,
        }
    }
}
