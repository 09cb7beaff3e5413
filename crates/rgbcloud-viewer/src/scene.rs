//! Software renderer: axes, labels and the depth-sorted point cloud.

use crate::framebuffer::{Color, Frame};
use glam::Vec3;
use rgbcloud::{project, PointSet, ProjectedPoint, ViewState};

/// Background fill, 0RGB.
const BACKGROUND: u32 = 0x061017;

const AXIS_RED: Color = Color::rgba(220, 80, 80, 0.7);
const AXIS_GREEN: Color = Color::rgba(80, 220, 120, 0.7);
const AXIS_BLUE: Color = Color::rgba(90, 140, 240, 0.8);
const AXIS_WIDTH: f32 = 2.0;
const CORNER_RADIUS: f32 = 6.0;
const LABEL_COLOR: Color = Color::rgba(230, 235, 240, 0.95);

/// Fixed fill opacity of every point; never varies with depth.
const POINT_ALPHA: f32 = 0.9;
/// Smallest radius a point may shrink to, so far-zoomed clouds stay visible.
const MIN_POINT_RADIUS: f32 = 0.9;
/// Luminance above which the dark outline wins.
const LUMA_SPLIT: f32 = 0.6;
const OUTLINE_DARK: Color = Color::rgba(0, 0, 0, 0.75);
const OUTLINE_LIGHT: Color = Color::rgba(255, 255, 255, 0.95);

/// Point radius in logical pixels. Tracks zoom through `base` but never
/// depth: sizing is orthographic by design.
#[inline]
fn point_radius(base: f32, min_dim: f32) -> f32 {
    (3.0 * (base / min_dim) * 0.6).max(MIN_POINT_RADIUS)
}

/// Renders one complete frame: background, reference axes, then every point
/// painter's-ordered by depth. Deterministic: identical inputs produce an
/// identical buffer, and no drawing state survives the call.
pub fn render(frame: &mut Frame, points: &PointSet, view: &ViewState) {
    let (w, h) = frame.logical_size();

    frame.clear(BACKGROUND);
    draw_axes(frame, view, w, h);

    // Painter's algorithm: ascending depth, so nearer points overdraw
    // farther ones. Stable sort keeps ties deterministic.
    let mut projected: Vec<(&rgbcloud::Point3D, ProjectedPoint)> = points
        .iter()
        .map(|p| (p, project(p.pos, view, w, h)))
        .collect();
    projected.sort_by(|a, b| a.1.depth.total_cmp(&b.1.depth));

    let min_dim = w.min(h).max(1.0);
    for (p, pr) in &projected {
        let radius = point_radius(pr.base, min_dim);
        let [r, g, b] = p.rgb;
        frame.fill_circle(pr.sx, pr.sy, radius, Color::rgba(r, g, b, POINT_ALPHA));

        let outline = if p.luminance() > LUMA_SPLIT {
            OUTLINE_DARK
        } else {
            OUTLINE_LIGHT
        };
        frame.stroke_circle(pr.sx, pr.sy, radius, (radius * 0.25).max(1.0), outline);
    }

    draw_hud(frame, points.len(), h);
}

/// Axis lines from the cube origin to the three pure-channel corners, with a
/// solid marker and coordinate label at each corner.
fn draw_axes(frame: &mut Frame, view: &ViewState, w: f32, h: f32) {
    let origin = project(Vec3::ZERO, view, w, h);
    let corners = [
        (Vec3::X, AXIS_RED, Color::rgb(255, 0, 0), "R (1,0,0)"),
        (Vec3::Y, AXIS_GREEN, Color::rgb(0, 255, 0), "G (0,1,0)"),
        (Vec3::Z, AXIS_BLUE, Color::rgb(0, 0, 255), "B (0,0,1)"),
    ];

    for (corner, axis_color, marker_color, label) in corners {
        let pr = project(corner, view, w, h);
        frame.line(origin.sx, origin.sy, pr.sx, pr.sy, AXIS_WIDTH, axis_color);
        frame.fill_circle(pr.sx, pr.sy, CORNER_RADIUS, marker_color);
        frame.text(pr.sx + 8.0, pr.sy + 4.0, label, LABEL_COLOR);
    }
}

fn draw_hud(frame: &mut Frame, count: usize, h: f32) {
    frame.text(8.0, h - 10.0, &format!("points: {count}"), LABEL_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rgbcloud::Point3D;

    fn point(x: f32, y: f32, z: f32) -> Point3D {
        Point3D {
            pos: Vec3::new(x, y, z),
            rgb: [
                (x * 255.0).round() as u8,
                (y * 255.0).round() as u8,
                (z * 255.0).round() as u8,
            ],
        }
    }

    fn center_pixel(frame: &Frame) -> u32 {
        let (w, h) = (frame.width(), frame.height());
        frame.buffer()[(h / 2) * w + w / 2]
    }

    #[test]
    fn rendering_is_deterministic() {
        let points = PointSet::new(vec![
            point(0.2, 0.8, 0.4),
            point(0.9, 0.1, 0.1),
            point(0.5, 0.5, 0.5),
        ]);
        let view = ViewState::default();

        let mut a = Frame::new(200.0, 150.0, 1.0);
        render(&mut a, &points, &view);
        let first: Vec<u32> = a.buffer().to_vec();
        render(&mut a, &points, &view);
        assert_eq!(a.buffer(), &first[..]);
    }

    #[test]
    fn empty_set_still_renders_axes() {
        let mut frame = Frame::new(200.0, 150.0, 1.0);
        render(&mut frame, &PointSet::default(), &ViewState::default());
        let non_background = frame
            .buffer()
            .iter()
            .filter(|&&px| px != 0xFF00_0000 | BACKGROUND)
            .count();
        assert!(non_background > 0, "axes and labels must still be drawn");
    }

    #[test]
    fn nearer_point_wins_the_shared_pixel() {
        // Both points sit on the depth axis through the cube center with
        // rx=ry=0, so they project to the exact same screen position. The
        // blue-ish one is nearer (larger depth) and must be drawn last.
        let view = ViewState { rx: 0.0, ry: 0.0, zoom: 1.6 };
        let far = point(0.5, 0.5, 0.1);
        let near = point(0.5, 0.5, 0.9);

        let mut a = Frame::new(200.0, 150.0, 1.0);
        render(&mut a, &PointSet::new(vec![far, near]), &view);
        let px = center_pixel(&a);
        let blue = px & 0xFF;
        let red = (px >> 16) & 0xFF;
        assert!(blue > 150, "near point's blue should dominate, got {px:#010x}");
        assert!(blue > red);

        // Insertion order must not matter: depth decides.
        let mut b = Frame::new(200.0, 150.0, 1.0);
        render(&mut b, &PointSet::new(vec![near, far]), &view);
        assert_eq!(a.buffer(), b.buffer());
    }

    #[test]
    fn point_size_ignores_depth() {
        // One near and one far point, horizontally separated; count their lit
        // fill pixels, which must match because sizing is orthographic.
        let view = ViewState { rx: 0.0, ry: 0.0, zoom: 1.0 };
        let left_near = point(0.25, 0.5, 0.9);
        let right_far = point(0.75, 0.5, 0.1);

        let mut frame = Frame::new(400.0, 300.0, 1.0);
        render(&mut frame, &PointSet::new(vec![left_near, right_far]), &view);

        let w = frame.width();
        let count_around = |cx: usize, cy: usize| {
            let mut n = 0;
            for y in cy - 10..cy + 10 {
                for x in cx - 10..cx + 10 {
                    if frame.buffer()[y * w + x] != 0xFF00_0000 | BACKGROUND {
                        n += 1;
                    }
                }
            }
            n
        };
        // base = 300*0.9 = 270; the points sit at x = 200 -+ 67.5.
        let near_px = count_around(132, 150);
        let far_px = count_around(268, 150);
        assert_eq!(near_px, far_px);
    }

    #[test]
    fn high_dpr_renders_into_the_scaled_buffer() {
        let points = PointSet::new(vec![point(0.5, 0.5, 0.5)]);
        let view = ViewState { rx: 0.0, ry: 0.0, zoom: 1.0 };
        let mut frame = Frame::new(100.0, 100.0, 2.0);
        render(&mut frame, &points, &view);
        assert_eq!(frame.width(), 200);
        // The cube-center point projects to logical (50,50) = physical
        // (100,100) regardless of ratio.
        let px = center_pixel(&frame);
        assert_ne!(px, 0xFF00_0000 | BACKGROUND);
    }
}
