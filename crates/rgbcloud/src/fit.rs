//! Automatic zoom-to-fit for freshly rebuilt point sets.

use crate::points::PointSet;
use crate::project::project;
use crate::view::ViewState;

/// Fraction of the smaller viewport dimension a fitted cloud should span.
pub const FIT_TARGET: f32 = 0.70;

/// Chooses a zoom that fits `points` comfortably in a `width` x `height`
/// viewport under the current orientation.
///
/// Screen extents are measured at a fixed evaluation zoom of 1 and the
/// result is clamped to [`ViewState::FIT_ZOOM_RANGE`]. Degenerate sets (zero
/// or one point) trivially fit and get zoom 1. Called once per point-set
/// rebuild, never per redraw.
pub fn fit_zoom(points: &PointSet, view: &ViewState, width: f32, height: f32) -> f32 {
    if points.len() < 2 {
        return 1.0;
    }

    let probe = ViewState { zoom: 1.0, ..*view };

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for p in points.iter() {
        let pr = project(p.pos, &probe, width, height);
        min_x = min_x.min(pr.sx);
        max_x = max_x.max(pr.sx);
        min_y = min_y.min(pr.sy);
        max_y = max_y.max(pr.sy);
    }

    // Minimum span of 1 guards both flat clouds and zero-area viewports.
    let span_x = (max_x - min_x).max(1.0);
    let span_y = (max_y - min_y).max(1.0);
    let span = span_x.max(span_y);

    let target = width.min(height) * FIT_TARGET;
    let zoom = if span > 0.0 { target / span } else { view.zoom };

    ViewState::clamp_fit_zoom(zoom)
}
