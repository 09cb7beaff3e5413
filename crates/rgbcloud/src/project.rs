//! Orthographic projection of cube points onto the screen plane.

use crate::view::ViewState;
use glam::Vec3;

/// Fraction of the smaller viewport dimension one cube unit covers at zoom 1.
pub const BASE_FILL: f32 = 0.9;

/// Screen-space result of projecting one cube point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Horizontal screen position in logical pixels.
    pub sx: f32,
    /// Vertical screen position in logical pixels, top-left origin.
    pub sy: f32,
    /// Post-rotation z. Ordering key for the painter's algorithm only; never
    /// displayed and never used for sizing.
    pub depth: f32,
    /// Pixels per cube unit at the current zoom and viewport.
    pub base: f32,
}

/// Projects `p` under `view` into a `width` x `height` logical viewport.
///
/// The point is centered on the cube middle (0.5, 0.5, 0.5), rotated by yaw
/// about the vertical axis and then by pitch about the horizontal axis (fixed
/// order, no roll), and scaled orthographically. Screen size is independent
/// of depth, so the cloud stays visually stable while orbiting.
pub fn project(p: Vec3, view: &ViewState, width: f32, height: f32) -> ProjectedPoint {
    let (sin_ry, cos_ry) = view.ry.sin_cos();
    let (sin_rx, cos_rx) = view.rx.sin_cos();

    let c = p - Vec3::splat(0.5);

    // Yaw about the vertical axis.
    let x1 = cos_ry * c.x + sin_ry * c.z;
    let z1 = -sin_ry * c.x + cos_ry * c.z;

    // Pitch about the horizontal axis, applied in the yaw-rotated frame.
    let y1 = cos_rx * c.y - sin_rx * z1;
    let z2 = sin_rx * c.y + cos_rx * z1;

    let base = width.min(height) * BASE_FILL * view.zoom;

    ProjectedPoint {
        sx: x1 * base + width * 0.5,
        // Screen y grows downward; cube y grows upward.
        sy: height * 0.5 - y1 * base,
        depth: z2,
        base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn cube_center_is_the_rotation_center() {
        let center = Vec3::splat(0.5);
        let views = [
            ViewState::default(),
            ViewState { rx: 0.0, ry: 0.0, zoom: 1.0 },
            ViewState { rx: 1.5, ry: -7.3, zoom: 0.2 },
            ViewState { rx: -1.2, ry: 42.0, zoom: 6.0 },
        ];
        for view in views {
            let pr = project(center, &view, 800.0, 600.0);
            assert!((pr.sx - 400.0).abs() < EPS, "sx for {view:?}");
            assert!((pr.sy - 300.0).abs() < EPS, "sy for {view:?}");
        }
    }

    #[test]
    fn unrotated_red_corner_lands_on_the_right() {
        let view = ViewState { rx: 0.0, ry: 0.0, zoom: 1.0 };
        let pr = project(Vec3::new(1.0, 0.0, 0.0), &view, 800.0, 600.0);
        // base = min(800,600) * 0.9 = 540; offset is half a cube unit.
        assert!((pr.sx - (400.0 + 540.0 * 0.5)).abs() < EPS);
        assert!((pr.sy - (300.0 + 540.0 * 0.5)).abs() < EPS);
        assert!((pr.base - 540.0).abs() < EPS);
    }

    #[test]
    fn depth_is_the_post_rotation_z() {
        let view = ViewState { rx: 0.0, ry: 0.0, zoom: 1.0 };
        let near = project(Vec3::new(0.5, 0.5, 0.9), &view, 800.0, 600.0);
        let far = project(Vec3::new(0.5, 0.5, 0.1), &view, 800.0, 600.0);
        assert!((near.depth - 0.4).abs() < EPS);
        assert!((far.depth + 0.4).abs() < EPS);
        // Orthographic: both share the same screen position and scale.
        assert!((near.sx - far.sx).abs() < EPS);
        assert!((near.sy - far.sy).abs() < EPS);
        assert_eq!(near.base, far.base);
    }

    #[test]
    fn base_scales_with_zoom_and_the_smaller_dimension() {
        let mut view = ViewState { rx: 0.0, ry: 0.0, zoom: 2.0 };
        let pr = project(Vec3::splat(0.5), &view, 1000.0, 300.0);
        assert!((pr.base - 300.0 * 0.9 * 2.0).abs() < EPS);
        view.zoom = 0.5;
        let pr = project(Vec3::splat(0.5), &view, 1000.0, 300.0);
        assert!((pr.base - 300.0 * 0.9 * 0.5).abs() < EPS);
    }

    #[test]
    fn yaw_is_applied_before_pitch() {
        // (1, 0.5, 0.5) sits on the pure-x axis through the cube center. A
        // quarter-turn yaw swings it onto the depth axis, so the following
        // pitch lifts it vertically. Pitch-first would leave it on screen
        // center height instead.
        let view = ViewState {
            rx: 1.0,
            ry: std::f32::consts::FRAC_PI_2,
            zoom: 1.0,
        };
        let pr = project(Vec3::new(1.0, 0.5, 0.5), &view, 800.0, 600.0);
        assert!((pr.sx - 400.0).abs() < 1e-3);
        let expected_sy = 300.0 - 1.0f32.sin() * 0.5 * 540.0;
        assert!((pr.sy - expected_sy).abs() < 1e-3);
    }
}
